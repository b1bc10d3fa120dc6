use serde_json::Value;

use super::error::ProductError;
use crate::domain::ProductFields;

/// Checks a request body against the product schema and extracts the fields.
///
/// `name`, `description` and `category` must be non-empty strings, `price` a
/// JSON number (kept exactly as sent) and `inStock` a boolean. Any other keys
/// (including `id`) are ignored. Identity is never checked here, so the same
/// function guards both creation and replacement.
pub fn validate_product_payload(body: &Value) -> Result<ProductFields, ProductError> {
    let non_empty = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    let name = non_empty("name");
    let description = non_empty("description");
    let price = match body.get("price") {
        Some(Value::Number(price)) => Some(price.clone()),
        _ => None,
    };
    let category = non_empty("category");
    let in_stock = body.get("inStock").and_then(Value::as_bool);

    match (name, description, price, category, in_stock) {
        (Some(name), Some(description), Some(price), Some(category), Some(in_stock)) => {
            Ok(ProductFields {
                name,
                description,
                price,
                category,
                in_stock,
            })
        }
        _ => Err(ProductError::InvalidData),
    }
}
