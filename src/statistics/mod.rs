//! Monthly statistics for the dashboard charts.
//!
//! Every statistic is computed over the transactions sold in one month, see
//! [MonthFilter](crate::MonthFilter::for_statistics).

mod categories;
mod combined;
mod handlers;
mod histogram;
mod summary;

pub use categories::{CategoryCount, get_category_breakdown};
pub use combined::{CombinedStatistics, get_combined_statistics};
pub use handlers::{
    get_bar_chart_endpoint, get_combined_data_endpoint, get_pie_chart_endpoint,
    get_statistics_endpoint,
};
pub use histogram::{PriceBucketCount, get_price_histogram};
pub use summary::{Summary, get_summary};
