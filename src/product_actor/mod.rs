//! Product-specific domain logic: entity hooks, catalog queries and payload validation.

pub mod entity;
pub mod error;
mod queries;
pub mod validation;

pub use error::*;
pub use queries::*;
pub use validation::validate_product_payload;

use crate::actor_framework::ResourceActor;
use crate::clients::ProductClient;
use crate::domain::Product;

/// Creates a new Product actor, pre-loaded with `seed`, and its client.
///
/// Ids are random UUID v4 strings.
pub fn new(buffer_size: usize, seed: Vec<Product>) -> (ResourceActor<Product>, ProductClient) {
    let next_product_id = || uuid::Uuid::new_v4().to_string();

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_product_id);
    let client = ProductClient::new(generic_client);

    (actor.with_items(seed), client)
}
