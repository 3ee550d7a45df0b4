//! All three monthly statistics computed from one read of the transactions.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time_tz::Tz;

use crate::{
    Error,
    transaction::{MonthFilter, SearchFilter, Transaction, get_matching_transactions},
};

use super::{
    categories::{CategoryCount, count_by_category},
    histogram::{PriceBucketCount, count_by_price_bucket},
    summary::{Summary, summarize},
};

/// The sale totals, price histogram and category breakdown for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedStatistics {
    /// The sale totals.
    pub statistics: Summary,
    /// The price histogram.
    pub bar_chart: Vec<PriceBucketCount>,
    /// The category breakdown.
    pub pie_chart: Vec<CategoryCount>,
}

/// Get every statistic for the transactions that pass `month`.
///
/// The transactions are read once, so the three statistics always describe
/// the same data.
///
/// # Errors
/// Returns [Error::SqlError] if the transactions cannot be read. No partial
/// statistics are returned.
pub fn get_combined_statistics(
    month: &MonthFilter,
    timezone: &Tz,
    connection: &Connection,
) -> Result<CombinedStatistics, Error> {
    let transactions =
        get_matching_transactions(month, &SearchFilter::default(), timezone, connection)?;

    Ok(combine(&transactions))
}

/// Compute every statistic over `transactions`.
pub fn combine(transactions: &[Transaction]) -> CombinedStatistics {
    CombinedStatistics {
        statistics: summarize(transactions),
        bar_chart: count_by_price_bucket(transactions),
        pie_chart: count_by_category(transactions),
    }
}

#[cfg(test)]
mod tests {
    use time::Month;

    use crate::{
        statistics::{
            get_category_breakdown, get_combined_statistics, get_price_histogram, get_summary,
        },
        timezone::get_timezone,
        transaction::{
            MonthFilter,
            test_utils::{get_test_connection, insert_march_fixture},
        },
    };

    #[test]
    fn matches_the_individual_statistics() {
        let conn = get_test_connection();
        let utc = get_timezone("Etc/UTC").unwrap();
        insert_march_fixture(&conn);
        let month = MonthFilter::Month(Month::March);

        let got = get_combined_statistics(&month, utc, &conn).unwrap();

        assert_eq!(got.statistics, get_summary(&month, utc, &conn).unwrap());
        assert_eq!(got.bar_chart, get_price_histogram(&month, utc, &conn).unwrap());
        assert_eq!(got.pie_chart, get_category_breakdown(&month, utc, &conn).unwrap());
    }

    #[test]
    fn fails_as_a_whole_when_the_store_fails() {
        let conn = get_test_connection();
        let utc = get_timezone("Etc/UTC").unwrap();
        conn.execute("DROP TABLE \"transaction\"", ()).unwrap();

        let got = get_combined_statistics(&MonthFilter::Month(Month::March), utc, &conn);

        assert!(got.is_err());
    }
}
