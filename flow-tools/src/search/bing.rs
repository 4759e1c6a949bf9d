// Bing Web Search client: keyword path

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use super::WebSearchBackend;
use crate::config::BingConfig;
use crate::error::{Result, ToolError};
use crate::models::{BingResponse, WebPage};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const SERVICE: &str = "bing";

#[derive(Clone)]
pub struct BingSearchClient {
    http_client: Client,
    endpoint: String,
    subscription_key: Option<String>,
}

impl BingSearchClient {
    pub fn new(config: &BingConfig, http_client: Client) -> Self {
        Self {
            http_client,
            endpoint: config.endpoint.clone(),
            subscription_key: config.subscription_key.clone(),
        }
    }

    /// Plain query with only `q` and `count`, returning Bing's body untouched.
    pub async fn raw_search(&self, query: &str, top_k: usize) -> Result<Value> {
        info!("Bing: raw search for: {}", query);

        let request = self
            .http_client
            .get(&self.endpoint)
            .query(&[("q", query.to_string()), ("count", top_k.to_string())]);

        self.send(request).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        // No key means no header; Bing answers 401 and the caller sees the failure.
        let request = match &self.subscription_key {
            Some(key) => request.header(SUBSCRIPTION_KEY_HEADER, key),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::Status {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl WebSearchBackend for BingSearchClient {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<WebPage>> {
        let params = [
            ("q", query.to_string()),
            ("mkt", "en-US".to_string()),
            ("setLang", "en-US".to_string()),
            ("count", count.to_string()),
            ("offset", "0".to_string()),
            ("textDecorations", "false".to_string()),
            ("textFormat", "Raw".to_string()),
            ("safeSearch", "Moderate".to_string()),
        ];

        let request = self.http_client.get(&self.endpoint).query(&params);
        let body = self.send(request).await?;
        let response: BingResponse = serde_json::from_value(body)?;

        Ok(response.into_pages())
    }
}
