use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, IntCounterVec};

pub const KEYWORD_PATH: &str = "keyword";
pub const HYBRID_PATH: &str = "hybrid";

pub static TOOL_INVOCATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "flow_tools_invocations_total",
        "Tool invocations by tool name",
        &["tool"]
    )
    .expect("tool invocation counter registers once")
});

pub static SEARCH_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "flow_tools_search_failures_total",
        "Failed search calls by retrieval path",
        &["path"]
    )
    .expect("search failure counter registers once")
});

pub static RESULTS_RETURNED: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "flow_tools_results_returned_total",
        "Normalized results handed back by retrieval path",
        &["path"]
    )
    .expect("results counter registers once")
});

pub fn record_invocation(tool: &str) {
    TOOL_INVOCATIONS.with_label_values(&[tool]).inc();
}

pub fn record_failure(path: &str) {
    SEARCH_FAILURES.with_label_values(&[path]).inc();
}

pub fn record_results(path: &str, count: usize) {
    RESULTS_RETURNED
        .with_label_values(&[path])
        .inc_by(count as u64);
}

pub fn render() -> (Vec<u8>, String) {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
    }
    (buffer, encoder.format_type().to_string())
}
