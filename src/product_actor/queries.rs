use std::collections::BTreeMap;

/// Read-only queries over the whole product catalog.
///
/// These run inside the actor against the current collection, so their
/// results always reflect every mutation acknowledged before them.
#[derive(Debug, Clone)]
pub enum ProductQuery {
    /// Case-insensitive substring match against product names.
    ///
    /// # Arguments
    /// * `String` - The needle; matched after lowercasing both sides
    SearchByName(String),
    /// Counts products per category value.
    CountByCategory,
}

/// Results from ProductQuery - variants match 1:1 with ProductQuery
#[derive(Debug, Clone, PartialEq)]
pub enum ProductQueryResult {
    /// Result from SearchByName - matches in catalog order
    SearchByName(Vec<crate::domain::Product>),
    /// Result from CountByCategory - every category present maps to its count
    CountByCategory(BTreeMap<String, usize>),
}
