//! Counts the transactions in a month by category.

use std::collections::BTreeMap;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time_tz::Tz;

use crate::{
    Error,
    transaction::{MonthFilter, SearchFilter, Transaction, get_matching_transactions},
};

/// The number of transactions in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// The category name as stored on the transactions.
    pub category: String,
    /// The number of transactions in the category.
    pub count: u64,
}

/// Count `transactions` per category, sorted by category name.
///
/// Only categories that appear in `transactions` are included.
pub fn count_by_category(transactions: &[Transaction]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();

    for transaction in transactions {
        *counts.entry(transaction.category.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_owned(),
            count,
        })
        .collect()
}

/// Get the category breakdown for the transactions that pass `month`.
///
/// # Errors
/// Returns [Error::SqlError] if the transactions cannot be read.
pub fn get_category_breakdown(
    month: &MonthFilter,
    timezone: &Tz,
    connection: &Connection,
) -> Result<Vec<CategoryCount>, Error> {
    let transactions =
        get_matching_transactions(month, &SearchFilter::default(), timezone, connection)?;

    Ok(count_by_category(&transactions))
}
