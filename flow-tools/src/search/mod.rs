// Search backends and the retriever that drives them

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ToolsConfig;
use crate::error::Result;
use crate::models::{RawResult, WebPage};

pub mod azure;
pub mod bing;
pub mod normalize;
pub mod observer;
pub mod retriever;

pub use azure::AzureSearchClient;
pub use bing::BingSearchClient;
pub use observer::{ResultObserver, TracingObserver};
pub use retriever::{SearchOutcome, SearchResultRetriever};

/// A single hybrid (lexical + vector, semantically reranked) query.
#[derive(Debug, Clone, PartialEq)]
pub struct HybridRequest {
    pub index_name: Option<String>,
    pub search_text: String,
    pub vector: Vec<f32>,
    pub top: usize,
    pub language: String,
}

#[async_trait]
pub trait HybridSearchBackend: Send + Sync {
    async fn search(&self, request: &HybridRequest) -> Result<Vec<RawResult>>;
}

#[async_trait]
pub trait WebSearchBackend: Send + Sync {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<WebPage>>;
}

/// One HTTP client shared by every backend built from the same config.
pub fn build_http_client(config: &ToolsConfig) -> Result<Client> {
    Ok(Client::builder().timeout(config.http_timeout).build()?)
}
