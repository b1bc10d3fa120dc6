//! Typed handles used by the HTTP layer to talk to the store actor.

mod product_client;

pub use product_client::ProductClient;
