use serde::Serialize;
use serde_json::Number;

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`Entity`](crate::actor_framework::Entity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).
/// See `product_actor::entity` for the creation, update and query semantics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Kept as the JSON number the client sent, so `10` stays `10`.
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

/// Every client-controlled field of a product. Used for both creation and
/// full replacement; the id is never part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally assigned by the actor system)
    /// * `fields` - Every other attribute of the product
    pub fn new(id: impl Into<String>, fields: ProductFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock,
        }
    }

    /// Overwrites everything but the id.
    pub fn replace_fields(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.category = fields.category;
        self.in_stock = fields.in_stock;
    }
}

impl ProductFields {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Number,
        category: impl Into<String>,
        in_stock: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            in_stock,
        }
    }
}

/// The catalog the service starts with unless seeding is disabled.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            ProductFields::new(
                "Laptop",
                "High-performance laptop with 16GB RAM",
                Number::from(1200),
                "electronics",
                true,
            ),
        ),
        Product::new(
            "2",
            ProductFields::new(
                "Smartphone",
                "Latest model with 128GB storage",
                Number::from(800),
                "electronics",
                true,
            ),
        ),
        Product::new(
            "3",
            ProductFields::new(
                "Coffee Maker",
                "Programmable coffee maker with timer",
                Number::from(50),
                "kitchen",
                false,
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let product = Product::new("9", ProductFields::new("Mug", "Ceramic", Number::from(10), "kitchen", true));
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["inStock"], serde_json::json!(true));
        assert!(value.get("in_stock").is_none());
        assert_eq!(value["id"], "9");
    }

    #[test]
    fn test_integer_prices_serialize_without_fraction() {
        let value = serde_json::to_value(sample_catalog()).unwrap();
        assert_eq!(value[0]["price"], serde_json::json!(1200));
        assert!(!value[0].to_string().contains("1200.0"));
    }

    #[test]
    fn test_replace_fields_keeps_id() {
        let mut product = sample_catalog().remove(0);
        product.replace_fields(ProductFields::new("Desk", "Oak", Number::from(300), "furniture", false));
        assert_eq!(product.id, "1");
        assert_eq!(product.name, "Desk");
        assert_eq!(product.category, "furniture");
        assert!(!product.in_stock);
    }
}
