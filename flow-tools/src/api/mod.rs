use std::sync::Arc;

use warp::{Filter, Rejection, Reply};

use crate::config::ToolsConfig;
use crate::error::Result;
use crate::search::{
    build_http_client, AzureSearchClient, BingSearchClient, HybridSearchBackend,
    SearchResultRetriever,
};

mod search;
mod tools;

/// Everything the handlers share. Cloned into each request.
#[derive(Clone)]
pub struct ToolState {
    pub retriever: SearchResultRetriever,
    pub bing: BingSearchClient,
}

impl ToolState {
    pub fn from_config(config: &ToolsConfig) -> Result<Self> {
        let http_client = build_http_client(config)?;

        let bing = BingSearchClient::new(&config.bing, http_client.clone());
        let hybrid = config.azure_search.as_ref().map(|azure| {
            Arc::new(AzureSearchClient::new(azure, http_client.clone()))
                as Arc<dyn HybridSearchBackend>
        });
        let retriever = SearchResultRetriever::new(Arc::new(bing.clone()), hybrid);

        Ok(Self { retriever, bing })
    }
}

pub fn routes(state: ToolState) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let tools = warp::path("api").and(warp::path("v1")).and(warp::path("tools"));

    let web_search_route = tools
        .and(warp::path("web_search"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .and_then(search::handle_web_search);

    let hybrid_search_route = tools
        .and(warp::path("hybrid_search"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .and_then(search::handle_hybrid_search);

    let retrieve_route = tools
        .and(warp::path("retrieve"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .and_then(search::handle_retrieve);

    let bing_raw_route = tools
        .and(warp::path("bing_raw"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .and_then(search::handle_bing_raw);

    let process_results_route = tools
        .and(warp::path("process_results"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .and_then(search::handle_process_results);

    let process_sources_route = tools
        .and(warp::path("process_sources"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(tools::handle_process_sources);

    let format_output_route = tools
        .and(warp::path("format_output"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(tools::handle_format_output);

    let generate_id_route = tools
        .and(warp::path("generate_id"))
        .and(warp::path::end())
        .and(warp::get())
        .and_then(tools::handle_generate_id);

    let filter_context_route = tools
        .and(warp::path("filter_context"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(tools::handle_filter_context);

    web_search_route
        .or(hybrid_search_route)
        .or(retrieve_route)
        .or(bing_raw_route)
        .or(process_results_route)
        .or(process_sources_route)
        .or(format_output_route)
        .or(generate_id_route)
        .or(filter_context_route)
}

fn with_state(
    state: ToolState,
) -> impl Filter<Extract = (ToolState,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || state.clone())
}
