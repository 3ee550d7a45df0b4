//! Loads the transaction data set into the database.
//!
//! The data set is a JSON array of transactions, either in a local file or
//! served over HTTP. Seeding replaces every existing transaction.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use rusqlite::Connection;

use crate::{
    Error,
    transaction::{Transaction, replace_all_transactions},
};

/// Where to read the seed data from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// A URL that serves JSON.
    Url(String),
}

impl From<&str> for SeedSource {
    /// Values starting with "http://" or "https://" are URLs, anything else is a file path.
    fn from(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_owned())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl Display for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Read the transactions from `source`.
///
/// # Errors
/// Returns an [Error::SeedReadError] if the file cannot be read, an
/// [Error::SeedFetchError] if the URL cannot be downloaded, or an
/// [Error::InvalidSeedData] if the data is not a JSON array of transactions.
pub async fn fetch_seed_transactions(source: &SeedSource) -> Result<Vec<Transaction>, Error> {
    let json = match source {
        SeedSource::File(path) => read_seed_file(path).await?,
        SeedSource::Url(url) => download_seed_data(url).await?,
    };

    parse_seed_data(&json)
}

async fn read_seed_file(path: &Path) -> Result<String, Error> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|error| Error::SeedReadError(format!("{}: {error}", path.display())))
}

async fn download_seed_data(url: &str) -> Result<String, Error> {
    tracing::debug!("Requesting seed data from {url}");

    let response = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|error| Error::SeedFetchError(error.to_string()))?;

    response
        .text()
        .await
        .map_err(|error| Error::SeedFetchError(error.to_string()))
}

fn parse_seed_data(json: &str) -> Result<Vec<Transaction>, Error> {
    serde_json::from_str(json).map_err(|error| Error::InvalidSeedData(error.to_string()))
}

/// Replace every transaction in the database with `transactions`.
///
/// Returns the number of transactions inserted.
///
/// # Errors
/// Returns an [Error::SqlError] if the transactions cannot be saved. The
/// existing transactions are kept in that case.
pub fn seed_transactions(
    transactions: &[Transaction],
    connection: &Connection,
) -> Result<usize, Error> {
    let inserted = replace_all_transactions(transactions, connection)
        .inspect_err(|error| tracing::error!("could not seed transactions: {error}"))?;

    tracing::info!("Seeded {inserted} transactions");

    Ok(inserted)
}
