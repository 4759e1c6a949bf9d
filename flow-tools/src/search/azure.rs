// Azure Cognitive Search client: hybrid retrieval with semantic reranking

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use super::{HybridRequest, HybridSearchBackend};
use crate::config::AzureSearchConfig;
use crate::error::{Result, ToolError};
use crate::models::{HybridSearchResponse, RawResult};

pub const VECTOR_NEIGHBORS: usize = 50;
pub const VECTOR_FIELD: &str = "content_vector";
pub const SEMANTIC_CONFIGURATION: &str = "config";

const SERVICE: &str = "azure-search";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody<'a> {
    search: &'a str,
    top: usize,
    vector_queries: [VectorQuery<'a>; 1],
    query_type: &'static str,
    semantic_configuration: &'static str,
    query_language: &'a str,
}

#[derive(Debug, Serialize)]
struct VectorQuery<'a> {
    kind: &'static str,
    vector: &'a [f32],
    k: usize,
    fields: &'static str,
}

impl<'a> SearchBody<'a> {
    fn from_request(request: &'a HybridRequest) -> Self {
        Self {
            search: &request.search_text,
            top: request.top,
            vector_queries: [VectorQuery {
                kind: "vector",
                vector: &request.vector,
                k: VECTOR_NEIGHBORS,
                fields: VECTOR_FIELD,
            }],
            query_type: "semantic",
            semantic_configuration: SEMANTIC_CONFIGURATION,
            query_language: &request.language,
        }
    }
}

#[derive(Clone)]
pub struct AzureSearchClient {
    http_client: Client,
    endpoint: String,
    admin_key: String,
    default_index: Option<String>,
    api_version: String,
}

impl AzureSearchClient {
    pub fn new(config: &AzureSearchConfig, http_client: Client) -> Self {
        Self {
            http_client,
            endpoint: config.endpoint.clone(),
            admin_key: config.admin_key.clone(),
            default_index: config.index_name.clone(),
            api_version: config.api_version.clone(),
        }
    }

    fn search_url(&self, index_name: &str) -> String {
        format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.endpoint, index_name, self.api_version
        )
    }

    fn resolve_index<'a>(&'a self, request: &'a HybridRequest) -> Result<&'a str> {
        request
            .index_name
            .as_deref()
            .or(self.default_index.as_deref())
            .ok_or_else(|| ToolError::InvalidQuery("no search index name given".to_string()))
    }
}

#[async_trait]
impl HybridSearchBackend for AzureSearchClient {
    async fn search(&self, request: &HybridRequest) -> Result<Vec<RawResult>> {
        let index_name = self.resolve_index(request)?;
        info!("Azure Search: hybrid query on index {}", index_name);

        let response = self
            .http_client
            .post(self.search_url(index_name))
            .header("api-key", &self.admin_key)
            .json(&SearchBody::from_request(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::Status {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        let body: HybridSearchResponse = response.json().await?;
        Ok(body.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> HybridRequest {
        HybridRequest {
            index_name: None,
            search_text: "rust async".to_string(),
            vector: vec![0.25, 0.5],
            top: 5,
            language: "en-us".to_string(),
        }
    }

    #[test]
    fn body_carries_vector_clause_and_semantic_settings() {
        let request = request();
        let body = serde_json::to_value(SearchBody::from_request(&request)).unwrap();

        assert_eq!(
            body,
            json!({
                "search": "rust async",
                "top": 5,
                "vectorQueries": [{
                    "kind": "vector",
                    "vector": [0.25, 0.5],
                    "k": 50,
                    "fields": "content_vector"
                }],
                "queryType": "semantic",
                "semanticConfiguration": "config",
                "queryLanguage": "en-us"
            })
        );
    }

    #[test]
    fn request_index_overrides_configured_default() {
        let client = AzureSearchClient::new(
            &AzureSearchConfig {
                endpoint: "https://svc.search.windows.net".into(),
                admin_key: "key".into(),
                index_name: Some("default-index".into()),
                api_version: "2023-10-01-Preview".into(),
            },
            Client::new(),
        );

        let mut request = request();
        assert_eq!(client.resolve_index(&request).unwrap(), "default-index");

        request.index_name = Some("other".into());
        assert_eq!(client.resolve_index(&request).unwrap(), "other");
        assert_eq!(
            client.search_url("other"),
            "https://svc.search.windows.net/indexes/other/docs/search?api-version=2023-10-01-Preview"
        );
    }
}
