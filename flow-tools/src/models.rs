use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_LANGUAGE: &str = "en-us";
pub const DEFAULT_HYBRID_TOP: usize = 5;
pub const DEFAULT_WEB_COUNT: usize = 10;
pub const TIME_NOT_AVAILABLE: &str = "Not available";

/// Everything a single retrieval needs. A present `vector` selects the hybrid
/// path, otherwise the keyword path is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub query_text: String,
    #[serde(default)]
    pub refinement: String,
    #[serde(default)]
    pub vector: Option<Vec<f32>>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub index_name: Option<String>,
}

impl SearchQuery {
    pub fn new(query_text: impl Into<String>) -> Self {
        Self {
            query_text: query_text.into(),
            ..Default::default()
        }
    }

    pub fn with_refinement(mut self, refinement: impl Into<String>) -> Self {
        self.refinement = refinement.into();
        self
    }

    pub fn with_vector(mut self, vector: Vec<f32>) -> Self {
        self.vector = Some(vector);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn is_hybrid(&self) -> bool {
        self.vector.is_some()
    }

    /// Query text with the refinement joined on by a single space.
    pub fn refined_text(&self) -> String {
        format!("{} {}", self.query_text, self.refinement)
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}

// One document as returned by Azure Cognitive Search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "@search.score", default)]
    pub score: f64,
    #[serde(
        rename = "@search.rerankerScore",
        alias = "@search.reranker_score",
        default
    )]
    pub reranker_score: Option<f64>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct HybridSearchResponse {
    #[serde(default)]
    pub value: Vec<RawResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub date_published: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BingResponse {
    #[serde(rename = "webPages", default)]
    pub web_pages: Option<WebPages>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebPages {
    #[serde(default)]
    pub value: Vec<WebPage>,
}

impl BingResponse {
    pub fn into_pages(self) -> Vec<WebPage> {
        self.web_pages.map(|p| p.value).unwrap_or_default()
    }
}

/// Record handed back to the pipeline. The keyword path also fills
/// `time_published` and `question`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub content: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasonContext {
    pub content: Value,
    pub question: Value,
}

// API Request/Response models
#[derive(Debug, Deserialize)]
pub struct WebSearchRequest {
    pub query: String,
    #[serde(default)]
    pub refine_query: String,
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct HybridSearchRequest {
    pub index_name: Option<String>,
    pub search_query: String,
    pub search_vector: Vec<f32>,
    pub top: Option<usize>,
    pub query_language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BingRawRequest {
    pub query: String,
    pub top_k: usize,
}

#[derive(Debug, Deserialize)]
pub struct ProcessResultsRequest {
    pub results: Vec<RawResult>,
}

#[derive(Debug, Deserialize)]
pub struct FormatOutputRequest {
    pub safety_result_input: Option<String>,
    pub safety_result_output: Option<String>,
    pub llm_answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FormatOutputResponse {
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterContextRequest {
    pub data: Vec<Value>,
}
