use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductFields};
use crate::product_actor::{ProductError, ProductQuery, ProductQueryResult};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: String) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .get(id.clone())
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, payload), fields(product_name = %payload.name))]
    pub async fn create_product(&self, payload: ProductFields) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(payload).await?)
    }

    #[instrument(skip(self, payload), fields(product_name = %payload.name))]
    pub async fn update_product(
        &self,
        id: String,
        payload: ProductFields,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, payload).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: String) -> Result<(), ProductError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn search_products(&self, needle: String) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        match self.inner.query(ProductQuery::SearchByName(needle)).await? {
            ProductQueryResult::SearchByName(found) => Ok(found),
            _ => Err(ProductError::ActorCommunicationError(
                "Unexpected result".to_string(),
            )),
        }
    }

    #[instrument(skip(self))]
    pub async fn category_stats(&self) -> Result<BTreeMap<String, usize>, ProductError> {
        debug!("Sending request");
        match self.inner.query(ProductQuery::CountByCategory).await? {
            ProductQueryResult::CountByCategory(counts) => Ok(counts),
            _ => Err(ProductError::ActorCommunicationError(
                "Unexpected result".to_string(),
            )),
        }
    }
}
