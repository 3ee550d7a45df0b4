//! Free text and price search over transactions.

use super::model::Transaction;

/// Matches transactions against a search query.
///
/// A transaction matches if the query appears, ignoring case, in its title,
/// description or category, or if the query is a number equal to its price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    /// The lowercase query text. `None` matches everything.
    text: Option<String>,
    /// The query as a price, if it is a number.
    price: Option<f64>,
}

impl SearchFilter {
    /// Create a filter from a search query.
    ///
    /// A missing or empty query matches every transaction.
    pub fn new(query: Option<&str>) -> Self {
        match query {
            Some(query) if !query.is_empty() => Self {
                text: Some(query.to_lowercase()),
                price: query
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|price| price.is_finite()),
            },
            _ => Self::default(),
        }
    }

    /// Whether `transaction` matches the query.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let Some(text) = &self.text else {
            return true;
        };

        self.price == Some(transaction.price)
            || [
                &transaction.title,
                &transaction.description,
                &transaction.category,
            ]
            .into_iter()
            .any(|field| field.to_lowercase().contains(text.as_str()))
    }
}
