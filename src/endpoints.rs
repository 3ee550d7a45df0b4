//! The API endpoints URIs.

/// The route for listing and searching transactions.
pub const LIST_TRANSACTIONS: &str = "/data/list-transactions";
/// The route for the monthly sale totals.
pub const STATISTICS: &str = "/stats/statistics";
/// The route for the monthly price histogram.
pub const BAR_CHART: &str = "/stats/bar-chart";
/// The route for the monthly category breakdown.
pub const PIE_CHART: &str = "/stats/pie-chart";
/// The route for all three monthly statistics in one response.
pub const COMBINED_DATA: &str = "/stats/combined-data";
