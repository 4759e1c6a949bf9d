// Retriever: hybrid search with reranking, or keyword web search

use std::sync::Arc;

use tracing::{error, info};

use super::normalize::{normalize_page, normalize_raw};
use super::{
    HybridRequest, HybridSearchBackend, ResultObserver, TracingObserver, WebSearchBackend,
};
use crate::error::{Result, ToolError};
use crate::metrics::{self, HYBRID_PATH, KEYWORD_PATH};
use crate::models::{
    NormalizedResult, RawResult, SearchQuery, DEFAULT_HYBRID_TOP, DEFAULT_WEB_COUNT,
};

/// What the keyword path actually saw. `into_results` collapses it back to the
/// plain list the pipeline expects.
#[derive(Debug)]
pub enum SearchOutcome {
    Found(Vec<NormalizedResult>),
    NoMatches,
    Failed(ToolError),
}

impl SearchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SearchOutcome::Failed(_))
    }

    pub fn into_results(self) -> Vec<NormalizedResult> {
        match self {
            SearchOutcome::Found(results) => results,
            SearchOutcome::NoMatches | SearchOutcome::Failed(_) => vec![],
        }
    }
}

#[derive(Clone)]
pub struct SearchResultRetriever {
    web: Arc<dyn WebSearchBackend>,
    hybrid: Option<Arc<dyn HybridSearchBackend>>,
    observer: Arc<dyn ResultObserver>,
}

impl SearchResultRetriever {
    pub fn new(
        web: Arc<dyn WebSearchBackend>,
        hybrid: Option<Arc<dyn HybridSearchBackend>>,
    ) -> Self {
        Self {
            web,
            hybrid,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResultObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn has_hybrid(&self) -> bool {
        self.hybrid.is_some()
    }

    /// Dispatches on the query: a vector selects the hybrid path (errors
    /// propagate), otherwise the keyword path runs (errors become `[]`).
    pub async fn retrieve(&self, query: &SearchQuery) -> Result<Vec<NormalizedResult>> {
        if query.is_hybrid() {
            self.search_k_best_results(query).await
        } else {
            Ok(self.get_search_results(query).await)
        }
    }

    pub async fn search_k_best_results(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<NormalizedResult>> {
        let backend = self
            .hybrid
            .as_ref()
            .ok_or(ToolError::NotConfigured("Azure Cognitive Search"))?;

        let top = query.count.unwrap_or(DEFAULT_HYBRID_TOP);
        validate(query, top)?;

        let vector = match &query.vector {
            Some(vector) if !vector.is_empty() => vector.clone(),
            _ => return Err(ToolError::InvalidQuery("search vector is empty".to_string())),
        };

        info!("Retriever: hybrid search for: {}", query.query_text);

        let request = HybridRequest {
            index_name: query.index_name.clone(),
            search_text: query.query_text.clone(),
            vector,
            top,
            language: query.language().to_string(),
        };

        let raw = backend.search(&request).await.map_err(|e| {
            metrics::record_failure(HYBRID_PATH);
            e
        })?;

        let results = self.process_search_results(&raw[..raw.len().min(top)]);
        metrics::record_results(HYBRID_PATH, results.len());
        Ok(results)
    }

    pub async fn get_search_results(&self, query: &SearchQuery) -> Vec<NormalizedResult> {
        self.retrieve_web_outcome(query).await.into_results()
    }

    pub async fn retrieve_web_outcome(&self, query: &SearchQuery) -> SearchOutcome {
        let count = query.count.unwrap_or(DEFAULT_WEB_COUNT);
        if let Err(e) = validate(query, count) {
            error!("An error occurred: {}", e);
            return SearchOutcome::Failed(e);
        }

        info!("Retriever: web search for: {}", query.query_text);

        let pages = match self.web.search(&query.refined_text(), count).await {
            Ok(pages) => pages,
            Err(e) => {
                error!("An error occurred: {}", e);
                metrics::record_failure(KEYWORD_PATH);
                return SearchOutcome::Failed(e);
            }
        };

        let results: Vec<NormalizedResult> = pages
            .iter()
            .take(count)
            .map(|page| normalize_page(page, &query.query_text))
            .collect();

        self.observer.on_web_results(&results);
        metrics::record_results(KEYWORD_PATH, results.len());

        if results.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Found(results)
        }
    }

    /// Normalizes documents that were already fetched, reporting each one to
    /// the observer.
    pub fn process_search_results(&self, raw: &[RawResult]) -> Vec<NormalizedResult> {
        raw.iter()
            .map(|doc| {
                let result = normalize_raw(doc);
                self.observer.on_hybrid_result(doc, &result);
                result
            })
            .collect()
    }
}

fn validate(query: &SearchQuery, count: usize) -> Result<()> {
    if query.query_text.trim().is_empty() {
        return Err(ToolError::InvalidQuery("query text is empty".to_string()));
    }
    if count == 0 {
        return Err(ToolError::InvalidQuery("count must be positive".to_string()));
    }
    Ok(())
}
