use serde_json::Value;
use tracing::info;

use crate::models::RawResult;

/// Hands back each document's metadata as-is.
pub fn process_search_results_sources(results: &[RawResult]) -> Vec<Value> {
    let sources: Vec<Value> = results
        .iter()
        .map(|doc| doc.metadata.clone().unwrap_or(Value::Null))
        .collect();

    info!("sources_from_k_search: {:?}", sources);
    sources
}
