//! Route handlers for the monthly statistics.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    timezone::get_timezone,
    transaction::{MonthFilter, SearchFilter, Transaction, read_matching_transactions},
};

use super::{
    categories::{CategoryCount, count_by_category},
    combined::{CombinedStatistics, combine},
    histogram::{PriceBucketCount, count_by_price_bucket},
    summary::{Summary, summarize},
};

/// The state needed for the statistics routes.
#[derive(Debug, Clone)]
pub struct StatisticsState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The timezone sale months are read in, e.g. "Etc/UTC".
    pub local_timezone: String,
}

impl FromRef<AppState> for StatisticsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query parameters for the statistics routes.
#[derive(Debug, Default, Deserialize)]
pub struct StatisticsQuery {
    /// A month name or number. Missing or unrecognised months give empty statistics.
    pub month: Option<String>,
}

/// Read the transactions for the request's month and run `statistic` over them.
///
/// The database lock is released before `statistic` runs.
fn compute<T>(
    state: &StatisticsState,
    query: &StatisticsQuery,
    statistic: impl FnOnce(&[Transaction]) -> T,
) -> Result<T, Error> {
    let month = MonthFilter::for_statistics(query.month.as_deref());
    let timezone = get_timezone(&state.local_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(state.local_timezone.clone()))?;

    tracing::debug!("Computing statistics for {month:?}");

    let transactions = read_matching_transactions(
        &month,
        &SearchFilter::default(),
        timezone,
        &state.db_connection,
    )?;

    Ok(statistic(&transactions))
}

/// A route handler for the monthly sale totals.
pub async fn get_statistics_endpoint(
    State(state): State<StatisticsState>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<Summary>, Error> {
    compute(&state, &query, summarize).map(Json)
}

/// A route handler for the monthly price histogram.
pub async fn get_bar_chart_endpoint(
    State(state): State<StatisticsState>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<Vec<PriceBucketCount>>, Error> {
    compute(&state, &query, count_by_price_bucket).map(Json)
}

/// A route handler for the monthly category breakdown.
pub async fn get_pie_chart_endpoint(
    State(state): State<StatisticsState>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<Vec<CategoryCount>>, Error> {
    compute(&state, &query, count_by_category).map(Json)
}

/// A route handler for all three monthly statistics at once.
pub async fn get_combined_data_endpoint(
    State(state): State<StatisticsState>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<CombinedStatistics>, Error> {
    compute(&state, &query, combine).map(Json)
}
