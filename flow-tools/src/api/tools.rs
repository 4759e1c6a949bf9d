use warp::{Rejection, Reply};

use crate::metrics;
use crate::models::{
    FilterContextRequest, FormatOutputRequest, FormatOutputResponse, IdResponse,
    ProcessResultsRequest,
};
use crate::tools;

pub async fn handle_process_sources(
    request: ProcessResultsRequest,
) -> Result<impl Reply, Rejection> {
    metrics::record_invocation("process_sources");
    let sources = tools::process_search_results_sources(&request.results);
    Ok(warp::reply::json(&sources))
}

pub async fn handle_format_output(
    request: FormatOutputRequest,
) -> Result<impl Reply, Rejection> {
    metrics::record_invocation("format_output");

    let output = tools::format_output(
        request.safety_result_input.as_deref(),
        request.safety_result_output.as_deref(),
        request.llm_answer.as_deref(),
    );
    Ok(warp::reply::json(&FormatOutputResponse { output }))
}

pub async fn handle_generate_id() -> Result<impl Reply, Rejection> {
    metrics::record_invocation("generate_id");
    Ok(warp::reply::json(&IdResponse {
        id: tools::generate_unique_id(),
    }))
}

pub async fn handle_filter_context(
    request: FilterContextRequest,
) -> Result<impl Reply, Rejection> {
    metrics::record_invocation("filter_context");
    let context = tools::filter_and_transform_data(&request.data);
    Ok(warp::reply::json(&context))
}
