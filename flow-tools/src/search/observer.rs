use tracing::info;

use crate::models::{NormalizedResult, RawResult};

/// Receives every result as it is normalized. Keeps logging out of the
/// normalization code itself.
pub trait ResultObserver: Send + Sync {
    fn on_hybrid_result(&self, raw: &RawResult, result: &NormalizedResult);

    fn on_web_results(&self, results: &[NormalizedResult]);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ResultObserver for TracingObserver {
    fn on_hybrid_result(&self, raw: &RawResult, result: &NormalizedResult) {
        let reranker = raw
            .reranker_score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "none".to_string());
        info!("score: {}, reranker: {}. {}", raw.score, reranker, result.content);
        info!("source: {}", result.source);
    }

    fn on_web_results(&self, results: &[NormalizedResult]) {
        let sources: Vec<&str> = results.iter().map(|r| r.source.as_str()).collect();
        info!("sources_from_web_search: {:?}", sources);
    }
}
