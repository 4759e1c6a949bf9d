use tracing::info;
use warp::{Rejection, Reply};

use super::ToolState;
use crate::metrics;
use crate::models::{
    BingRawRequest, HybridSearchRequest, ProcessResultsRequest, SearchQuery, WebSearchRequest,
};

pub async fn handle_web_search(
    request: WebSearchRequest,
    state: ToolState,
) -> Result<impl Reply, Rejection> {
    metrics::record_invocation("web_search");

    let mut query = SearchQuery::new(request.query).with_refinement(request.refine_query);
    query.count = request.count;

    let results = state.retriever.get_search_results(&query).await;
    Ok(warp::reply::json(&results))
}

pub async fn handle_hybrid_search(
    request: HybridSearchRequest,
    state: ToolState,
) -> Result<impl Reply, Rejection> {
    metrics::record_invocation("hybrid_search");

    let query = SearchQuery {
        query_text: request.search_query,
        vector: Some(request.search_vector),
        count: request.top,
        language: request.query_language,
        index_name: request.index_name,
        ..Default::default()
    };

    let results = state
        .retriever
        .search_k_best_results(&query)
        .await
        .map_err(warp::reject::custom)?;
    Ok(warp::reply::json(&results))
}

pub async fn handle_retrieve(
    query: SearchQuery,
    state: ToolState,
) -> Result<impl Reply, Rejection> {
    metrics::record_invocation("retrieve");

    let results = state
        .retriever
        .retrieve(&query)
        .await
        .map_err(warp::reject::custom)?;
    Ok(warp::reply::json(&results))
}

pub async fn handle_bing_raw(
    request: BingRawRequest,
    state: ToolState,
) -> Result<impl Reply, Rejection> {
    metrics::record_invocation("bing_raw");

    let body = state
        .bing
        .raw_search(&request.query, request.top_k)
        .await
        .map_err(warp::reject::custom)?;
    Ok(warp::reply::json(&body))
}

pub async fn handle_process_results(
    request: ProcessResultsRequest,
    state: ToolState,
) -> Result<impl Reply, Rejection> {
    metrics::record_invocation("process_results");
    info!("Processing {} search results", request.results.len());

    let results = state.retriever.process_search_results(&request.results);
    Ok(warp::reply::json(&results))
}
