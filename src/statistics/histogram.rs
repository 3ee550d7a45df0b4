//! Counts the transactions in a month by price range.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time_tz::Tz;

use crate::{
    Error,
    transaction::{MonthFilter, SearchFilter, Transaction, get_matching_transactions},
};

/// A price range of the histogram, including `min` and excluding `max`.
struct PriceBucket {
    label: &'static str,
    min: f64,
    max: f64,
}

impl PriceBucket {
    const fn new(label: &'static str, min: f64, max: f64) -> Self {
        Self { label, min, max }
    }

    fn contains(&self, price: f64) -> bool {
        price >= self.min && price < self.max
    }
}

/// The histogram's price ranges in display order.
///
/// Each range after the first starts one above the previous range's upper
/// bound, so prices such as 100, 100.5 or 200 are not in any range.
const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket::new("0-100", 0.0, 100.0),
    PriceBucket::new("101-200", 101.0, 200.0),
    PriceBucket::new("201-300", 201.0, 300.0),
    PriceBucket::new("301-400", 301.0, 400.0),
    PriceBucket::new("401-500", 401.0, 500.0),
    PriceBucket::new("501-600", 501.0, 600.0),
    PriceBucket::new("601-700", 601.0, 700.0),
    PriceBucket::new("701-800", 701.0, 800.0),
    PriceBucket::new("801-900", 801.0, 900.0),
    PriceBucket::new("901-above", 901.0, f64::INFINITY),
];

/// The number of transactions in one price range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucketCount {
    /// The price range label, e.g. "101-200".
    pub range: String,
    /// The number of transactions priced in the range.
    pub count: u64,
}

/// Count `transactions` into the ten fixed price ranges.
///
/// Always returns all ten ranges in order, empty ranges have a count of zero.
pub fn count_by_price_bucket(transactions: &[Transaction]) -> Vec<PriceBucketCount> {
    PRICE_BUCKETS
        .iter()
        .map(|bucket| PriceBucketCount {
            range: bucket.label.to_owned(),
            count: transactions
                .iter()
                .filter(|transaction| bucket.contains(transaction.price))
                .count() as u64,
        })
        .collect()
}

/// Get the price histogram for the transactions that pass `month`.
///
/// # Errors
/// Returns [Error::SqlError] if the transactions cannot be read.
pub fn get_price_histogram(
    month: &MonthFilter,
    timezone: &Tz,
    connection: &Connection,
) -> Result<Vec<PriceBucketCount>, Error> {
    let transactions =
        get_matching_transactions(month, &SearchFilter::default(), timezone, connection)?;

    Ok(count_by_price_bucket(&transactions))
}
