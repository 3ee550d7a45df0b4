//! Lists transactions one page at a time, optionally filtered by month and a search query.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time_tz::Tz;

use crate::{
    AppState, Error,
    pagination::{PageRequest, PaginationConfig},
    timezone::get_timezone,
};

use super::{
    model::Transaction,
    month::MonthFilter,
    query::{get_matching_transactions, read_matching_transactions},
    search::SearchFilter,
};

/// One page of transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    /// The transactions on the requested page.
    pub transactions: Vec<Transaction>,
    /// The number of transactions that matched the filters across all pages.
    pub total: u64,
}

impl TransactionPage {
    /// Take `page` out of the matching transactions.
    fn new(matching: Vec<Transaction>, page: PageRequest) -> Self {
        let total = matching.len() as u64;

        Self {
            transactions: page.slice(matching),
            total,
        }
    }
}

/// Get one page of the transactions that pass `month` and `search`.
///
/// Transactions are kept in the order they were inserted. A page past the
/// last matching transaction is empty, but `total` is still reported.
///
/// # Errors
/// Returns [Error::SqlError] if the transactions cannot be read.
pub fn list_transactions(
    month: &MonthFilter,
    search: &SearchFilter,
    page: PageRequest,
    timezone: &Tz,
    connection: &Connection,
) -> Result<TransactionPage, Error> {
    let matching = get_matching_transactions(month, search, timezone, connection)?;

    Ok(TransactionPage::new(matching, page))
}

/// The state needed for listing transactions.
#[derive(Debug, Clone)]
pub struct TransactionsState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The timezone sale months are read in, e.g. "Etc/UTC".
    pub local_timezone: String,
    /// The default page and page size.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for TransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// The query parameters for listing transactions.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsQuery {
    /// A month name or number. Missing or unrecognised months do not filter.
    pub month: Option<String>,
    /// Text to look for, or a price to match exactly.
    pub search: Option<String>,
    /// The page number, starting from one.
    pub page: Option<u64>,
    /// The number of transactions per page.
    pub per_page: Option<u64>,
}

/// A route handler for listing transactions.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionsState>,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<TransactionPage>, Error> {
    let page = PageRequest::new(query.page, query.per_page, &state.pagination_config)?;
    let month = MonthFilter::for_listing(query.month.as_deref());
    let search = SearchFilter::new(query.search.as_deref());
    let timezone = get_timezone(&state.local_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(state.local_timezone.clone()))?;

    tracing::debug!(
        "Listing transactions for {month:?} and {search:?} on page {} of size {}",
        page.page(),
        page.per_page()
    );

    let matching = read_matching_transactions(&month, &search, timezone, &state.db_connection)?;

    Ok(Json(TransactionPage::new(matching, page)))
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        sync::{Arc, Mutex},
    };

    use axum::{
        Json,
        extract::{Query, State},
    };
    use time::Month;

    use crate::{
        Error,
        pagination::{PageRequest, PaginationConfig},
        timezone::get_timezone,
        transaction::{
            MonthFilter, SearchFilter, Transaction, create_transaction,
            test_utils::{get_test_connection, insert_march_fixture},
        },
    };

    use super::{
        ListTransactionsQuery, TransactionsState, list_transactions, list_transactions_endpoint,
    };

    fn page(page: u64, per_page: u64) -> PageRequest {
        PageRequest::new(Some(page), Some(per_page), &PaginationConfig::default()).unwrap()
    }

    #[test]
    fn total_ignores_pagination() {
        let conn = get_test_connection();
        let utc = get_timezone("Etc/UTC").unwrap();
        insert_march_fixture(&conn);
        let month = MonthFilter::Month(Month::March);
        let search = SearchFilter::default();

        for (page_number, per_page) in [(1, 1), (1, 10), (2, 2), (3, 2), (9, 4)] {
            let got = list_transactions(&month, &search, page(page_number, per_page), utc, &conn)
                .unwrap();

            assert_eq!(got.total, 5, "for page {page_number} of size {per_page}");
        }
    }

    #[test]
    fn concatenated_pages_rebuild_the_filtered_set() {
        let conn = get_test_connection();
        let utc = get_timezone("Etc/UTC").unwrap();
        for i in 0..23 {
            create_transaction(
                &Transaction::build(i, i as f64, &format!("2022-{:02}-10", i % 12 + 1)).finish(),
                &conn,
            )
            .unwrap();
        }
        let search = SearchFilter::default();
        let per_page = 4;

        let mut got = Vec::new();
        for page_number in 1.. {
            let result = list_transactions(
                &MonthFilter::Any,
                &search,
                page(page_number, per_page),
                utc,
                &conn,
            )
            .unwrap();
            let page_len = result.transactions.len() as u64;
            got.extend(result.transactions);

            if page_len < per_page {
                break;
            }
        }

        let ids: Vec<i64> = got.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, (0..23).collect::<Vec<_>>());
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 23);
    }

    #[test]
    fn page_past_the_end_is_empty_with_total() {
        let conn = get_test_connection();
        let utc = get_timezone("Etc/UTC").unwrap();
        insert_march_fixture(&conn);

        let got = list_transactions(
            &MonthFilter::Month(Month::March),
            &SearchFilter::default(),
            page(2, 5),
            utc,
            &conn,
        )
        .unwrap();

        assert!(got.transactions.is_empty());
        assert_eq!(got.total, 5);
    }

    #[test]
    fn numeric_search_without_month() {
        let conn = get_test_connection();
        let utc = get_timezone("Etc/UTC").unwrap();
        let records = [
            Transaction::build(1, 42.0, "2022-01-01").title("Hat").finish(),
            Transaction::build(2, 10.0, "2022-02-01").title("Model 42 speaker").finish(),
            Transaction::build(3, 10.0, "2022-03-01").description("Size 42").finish(),
            Transaction::build(4, 10.0, "2022-04-01").category("42nd street").finish(),
            Transaction::build(5, 142.0, "2022-05-01").title("Scarf").finish(),
            Transaction::build(6, 4.2, "2022-06-01").title("Gloves").finish(),
        ];
        for record in &records {
            create_transaction(record, &conn).unwrap();
        }

        let got = list_transactions(
            &MonthFilter::Any,
            &SearchFilter::new(Some("42")),
            page(1, 10),
            utc,
            &conn,
        )
        .unwrap();

        let ids: Vec<i64> = got.transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
        assert_eq!(got.total, 4);
    }

    #[test]
    fn listing_without_month_includes_unparseable_dates() {
        let conn = get_test_connection();
        let utc = get_timezone("Etc/UTC").unwrap();
        create_transaction(&Transaction::build(1, 1.0, "not a date").finish(), &conn).unwrap();
        create_transaction(&Transaction::build(2, 1.0, "2022-03-01").finish(), &conn).unwrap();

        let all = list_transactions(
            &MonthFilter::Any,
            &SearchFilter::default(),
            page(1, 10),
            utc,
            &conn,
        )
        .unwrap();
        let march = list_transactions(
            &MonthFilter::Month(Month::March),
            &SearchFilter::default(),
            page(1, 10),
            utc,
            &conn,
        )
        .unwrap();

        assert_eq!(all.total, 2);
        assert_eq!(march.total, 1);
        assert_eq!(march.transactions[0].id, 2);
    }

    fn get_test_state() -> TransactionsState {
        let conn = get_test_connection();
        insert_march_fixture(&conn);

        TransactionsState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
            pagination_config: PaginationConfig::default(),
        }
    }

    #[tokio::test]
    async fn endpoint_uses_default_pagination() {
        let Json(got) = list_transactions_endpoint(
            State(get_test_state()),
            Query(ListTransactionsQuery::default()),
        )
        .await
        .unwrap();

        assert_eq!(got.total, 12);
        assert_eq!(got.transactions.len(), 10);
    }

    #[tokio::test]
    async fn endpoint_treats_unknown_month_as_no_filter() {
        let Json(got) = list_transactions_endpoint(
            State(get_test_state()),
            Query(ListTransactionsQuery {
                month: Some("Smarch".to_owned()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(got.total, 12);
    }

    #[tokio::test]
    async fn endpoint_rejects_zero_page_size() {
        let result = list_transactions_endpoint(
            State(get_test_state()),
            Query(ListTransactionsQuery {
                per_page: Some(0),
                ..Default::default()
            }),
        )
        .await;

        assert!(matches!(result, Err(Error::InvalidPagination(_))));
    }

    #[tokio::test]
    async fn endpoint_reports_bad_timezone() {
        let mut state = get_test_state();
        state.local_timezone = "Mars/Olympus_Mons".to_owned();

        let result =
            list_transactions_endpoint(State(state), Query(ListTransactionsQuery::default()))
                .await;

        assert_eq!(
            result.map(|Json(page)| page),
            Err(Error::InvalidTimezoneError("Mars/Olympus_Mons".to_owned()))
        );
    }
}
