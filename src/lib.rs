//! Transaction dashboard is a backend for browsing product sale transactions.
//!
//! This library provides a JSON API for listing and searching transactions and
//! for computing monthly statistics (sale totals, a price histogram and a
//! breakdown by category) over the transactions stored in a SQLite database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod db;
mod endpoints;
mod logging;
mod not_found;
mod pagination;
mod routing;
mod seed;
mod statistics;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use pagination::{PageRequest, PaginationConfig};
pub use routing::build_router;
pub use seed::{SeedSource, fetch_seed_transactions, seed_transactions};
pub use statistics::{
    CategoryCount, CombinedStatistics, PriceBucketCount, Summary, get_category_breakdown,
    get_combined_statistics, get_price_histogram, get_summary,
};
pub use transaction::{
    MonthFilter, SearchFilter, Transaction, TransactionBuilder, TransactionPage,
    count_transactions, create_transaction, get_all_transactions, list_transactions,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested page number or page size was zero.
    ///
    /// Pages are numbered from one and must hold at least one transaction.
    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The seed data could not be read from a file.
    #[error("could not read seed data: {0}")]
    SeedReadError(String),

    /// The seed data could not be downloaded.
    #[error("could not download seed data: {0}")]
    SeedFetchError(String),

    /// The seed data was not a JSON array of transactions.
    #[error("could not parse seed data: {0}")]
    InvalidSeedData(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidPagination(reason) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid pagination parameters", "error": reason })),
            )
                .into_response(),
            Error::InvalidTimezoneError(timezone) => {
                tracing::error!("Could not resolve the configured timezone \"{timezone}\"");
                aggregation_failed_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                aggregation_failed_response()
            }
        }
    }
}

fn aggregation_failed_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Failed to aggregate transactions" })),
    )
        .into_response()
}
