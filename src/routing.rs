//! Application router configuration.

use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    statistics::{
        get_bar_chart_endpoint, get_combined_data_endpoint, get_pie_chart_endpoint,
        get_statistics_endpoint,
    },
    transaction::list_transactions_endpoint,
};

/// Return a router with all the app's routes.
///
/// Any origin may call the API since the dashboard is served separately.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::LIST_TRANSACTIONS, get(list_transactions_endpoint))
        .route(endpoints::STATISTICS, get(get_statistics_endpoint))
        .route(endpoints::BAR_CHART, get(get_bar_chart_endpoint))
        .route(endpoints::PIE_CHART, get(get_pie_chart_endpoint))
        .route(endpoints::COMBINED_DATA, get(get_combined_data_endpoint))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
