//! Database query helpers shared by the listing and the statistics.

use std::sync::Mutex;

use rusqlite::Connection;
use time_tz::Tz;

use crate::Error;

use super::{
    model::{Transaction, get_all_transactions},
    month::MonthFilter,
    search::SearchFilter,
};

/// Get the transactions that pass both `month` and `search`, in insertion order.
///
/// # Errors
/// Returns [Error::SqlError] if the transactions cannot be read.
pub fn get_matching_transactions(
    month: &MonthFilter,
    search: &SearchFilter,
    timezone: &Tz,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    if *month == MonthFilter::Unmatched {
        return Ok(Vec::new());
    }

    let transactions = get_all_transactions(connection)?;

    Ok(filter_transactions(transactions, month, search, timezone))
}

/// Like [get_matching_transactions], but for a shared connection.
///
/// The lock on `db_connection` is only held while the transactions are read,
/// the filtering happens after it is released.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if the lock is poisoned, or
/// [Error::SqlError] if the transactions cannot be read.
pub fn read_matching_transactions(
    month: &MonthFilter,
    search: &SearchFilter,
    timezone: &Tz,
    db_connection: &Mutex<Connection>,
) -> Result<Vec<Transaction>, Error> {
    if *month == MonthFilter::Unmatched {
        return Ok(Vec::new());
    }

    let transactions = {
        let connection = db_connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;
        get_all_transactions(&connection)?
    };

    Ok(filter_transactions(transactions, month, search, timezone))
}

fn filter_transactions(
    transactions: Vec<Transaction>,
    month: &MonthFilter,
    search: &SearchFilter,
    timezone: &Tz,
) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|transaction| month.matches(&transaction.date_of_sale, timezone))
        .filter(|transaction| search.matches(transaction))
        .collect()
}
