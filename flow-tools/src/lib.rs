//! Search and glue tools that run as nodes of a prompt workflow.
//!
//! The interesting part lives in [`search`]: a retriever that either sends a
//! hybrid vector + semantic query to Azure Cognitive Search or a keyword query
//! to Bing, and normalizes what comes back into [`models::NormalizedResult`]s.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod search;
pub mod tools;

use warp::{Filter, Rejection, Reply};

/// All routes the tool server exposes, including health and metrics.
pub fn server_routes(
    state: api::ToolState,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let hybrid_enabled = state.retriever.has_hybrid();

    let health = warp::path("health")
        .and(warp::get())
        .map(move || {
            warp::reply::json(&serde_json::json!({
                "status": "healthy",
                "hybrid_search": hybrid_enabled,
            }))
        });

    let metrics_route = warp::path("metrics").and(warp::get()).map(|| {
        let (buffer, content_type) = metrics::render();
        warp::reply::with_header(buffer, "Content-Type", content_type)
    });

    health
        .or(metrics_route)
        .or(api::routes(state))
        .recover(error::handle_rejection)
        .recover(|err: Rejection| async move {
            let code = if err.is_not_found() {
                warp::http::StatusCode::NOT_FOUND
            } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
                warp::http::StatusCode::METHOD_NOT_ALLOWED
            } else {
                warp::http::StatusCode::BAD_REQUEST
            };
            Ok::<_, std::convert::Infallible>(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({"error": code.canonical_reason()})),
                code,
            ))
        })
        .with(middleware::cors())
}
