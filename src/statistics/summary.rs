//! Sale totals for a month.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time_tz::Tz;

use crate::{
    Error,
    transaction::{MonthFilter, SearchFilter, Transaction, get_matching_transactions},
};

/// The sale totals for a month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of the prices of every transaction in the month, sold or not.
    pub total_sale_amount: f64,
    /// The number of transactions that were sold.
    pub sold_items_count: u64,
    /// The number of transactions that were not sold.
    pub not_sold_items_count: u64,
}

/// Total up `transactions`.
///
/// `total_sale_amount` includes unsold items.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    transactions
        .iter()
        .fold(Summary::default(), |mut summary, transaction| {
            summary.total_sale_amount += transaction.price;

            if transaction.sold {
                summary.sold_items_count += 1;
            } else {
                summary.not_sold_items_count += 1;
            }

            summary
        })
}

/// Get the sale totals for the transactions that pass `month`.
///
/// # Errors
/// Returns [Error::SqlError] if the transactions cannot be read.
pub fn get_summary(
    month: &MonthFilter,
    timezone: &Tz,
    connection: &Connection,
) -> Result<Summary, Error> {
    let transactions =
        get_matching_transactions(month, &SearchFilter::default(), timezone, connection)?;

    Ok(summarize(&transactions))
}
