use std::collections::BTreeMap;

use super::queries::{ProductQuery, ProductQueryResult};
use crate::actor_framework::Entity;
use crate::domain::{Product, ProductFields};

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductFields;
    type Update = ProductFields;
    type Query = ProductQuery;
    type QueryResult = ProductQueryResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Product from already-validated fields.
    fn from_create_params(id: String, fields: ProductFields) -> Result<Self, String> {
        Ok(Self::new(id, fields))
    }

    /// Replaces every field except `id`.
    fn on_update(&mut self, fields: ProductFields) -> Result<(), String> {
        self.replace_fields(fields);
        Ok(())
    }

    /// Handles catalog-wide queries.
    ///
    /// # Queries
    /// - `SearchByName(q)`: products whose lowercased name contains lowercased `q`
    /// - `CountByCategory`: category -> number of products in it
    fn handle_query(items: &[Self], query: ProductQuery) -> ProductQueryResult {
        match query {
            ProductQuery::SearchByName(needle) => {
                let needle = needle.to_lowercase();
                let matches = items
                    .iter()
                    .filter(|p| p.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                ProductQueryResult::SearchByName(matches)
            }
            ProductQuery::CountByCategory => {
                let mut counts = BTreeMap::new();
                for product in items {
                    *counts.entry(product.category.clone()).or_insert(0) += 1;
                }
                ProductQueryResult::CountByCategory(counts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_catalog;

    #[test]
    fn test_search_is_case_insensitive() {
        let result = Product::handle_query(
            &sample_catalog(),
            ProductQuery::SearchByName("LAP".to_string()),
        );
        match result {
            ProductQueryResult::SearchByName(found) => {
                assert_eq!(found.len(), 1);
                assert_eq!(found[0].name, "Laptop");
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_search_matches_inner_substring() {
        let result = Product::handle_query(
            &sample_catalog(),
            ProductQuery::SearchByName("maker".to_string()),
        );
        assert!(matches!(
            result,
            ProductQueryResult::SearchByName(ref found) if found.len() == 1 && found[0].id == "3"
        ));
    }

    #[test]
    fn test_category_counts_partition_catalog() {
        let catalog = sample_catalog();
        let result = Product::handle_query(&catalog, ProductQuery::CountByCategory);
        let ProductQueryResult::CountByCategory(counts) = result else {
            panic!("Unexpected result");
        };
        assert_eq!(counts.get("electronics"), Some(&2));
        assert_eq!(counts.get("kitchen"), Some(&1));
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.values().sum::<usize>(), catalog.len());
    }

    #[test]
    fn test_category_counts_empty_catalog() {
        let result = Product::handle_query(&[], ProductQuery::CountByCategory);
        assert_eq!(result, ProductQueryResult::CountByCategory(BTreeMap::new()));
    }
}
