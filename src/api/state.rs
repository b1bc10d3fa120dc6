use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::clients::ProductClient;

/// Shared application state handed to every stage and handler.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the store actor
    pub products: ProductClient,
    api_key: Arc<SecretString>,
}

impl AppState {
    pub fn new(products: ProductClient, api_key: SecretString) -> Self {
        Self {
            products,
            api_key: Arc::new(api_key),
        }
    }

    /// Compare a caller-supplied key against the configured secret in constant time.
    pub fn is_valid_api_key(&self, presented: &str) -> bool {
        presented
            .as_bytes()
            .ct_eq(self.api_key.expose_secret().as_bytes())
            .into()
    }
}
