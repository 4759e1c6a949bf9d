use std::collections::HashMap;
use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::Deserialize;

pub const DEFAULT_BING_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/search";
pub const DEFAULT_AZURE_API_VERSION: &str = "2023-10-01-Preview";

#[derive(Debug, Clone)]
pub struct ToolsConfig {
    pub port: u16,
    pub log_level: String,
    pub http_timeout: Duration,
    pub bing: BingConfig,
    pub azure_search: Option<AzureSearchConfig>,
}

#[derive(Debug, Clone)]
pub struct BingConfig {
    pub endpoint: String,
    pub subscription_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AzureSearchConfig {
    pub endpoint: String,
    pub admin_key: String,
    pub index_name: Option<String>,
    pub api_version: String,
}

// Flat view of the environment, keys lowercased by the `config` crate.
#[derive(Debug, Deserialize)]
struct Settings {
    port: u16,
    log_level: String,
    http_timeout_secs: u64,
    bing_search_api_endpoint: String,
    #[serde(default)]
    bing_search_api_subscription_key: Option<String>,
    #[serde(default)]
    azure_search_service_endpoint: Option<String>,
    #[serde(default)]
    azure_search_admin_key: Option<String>,
    #[serde(default)]
    azure_search_index_name: Option<String>,
    azure_search_api_version: String,
}

impl ToolsConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load(None)
    }

    /// Builds the configuration from an explicit variable map instead of the
    /// process environment.
    pub fn from_map(vars: HashMap<String, String>) -> Result<Self> {
        Self::load(Some(vars))
    }

    fn load(source: Option<HashMap<String, String>>) -> Result<Self> {
        let settings: Settings = ::config::Config::builder()
            .set_default("port", 8080)?
            .set_default("log_level", "info")?
            .set_default("http_timeout_secs", 30)?
            .set_default("bing_search_api_endpoint", DEFAULT_BING_ENDPOINT)?
            .set_default("azure_search_api_version", DEFAULT_AZURE_API_VERSION)?
            .add_source(::config::Environment::default().source(source))
            .build()?
            .try_deserialize()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: Settings) -> Result<Self> {
        let azure_search = match non_empty(settings.azure_search_service_endpoint) {
            Some(endpoint) => {
                let admin_key = non_empty(settings.azure_search_admin_key).ok_or_else(|| {
                    anyhow!("AZURE_SEARCH_ADMIN_KEY must be set when AZURE_SEARCH_SERVICE_ENDPOINT is configured")
                })?;
                Some(AzureSearchConfig {
                    endpoint: endpoint.trim_end_matches('/').to_string(),
                    admin_key,
                    index_name: non_empty(settings.azure_search_index_name),
                    api_version: settings.azure_search_api_version,
                })
            }
            None => None,
        };

        Ok(ToolsConfig {
            port: settings.port,
            log_level: settings.log_level,
            http_timeout: Duration::from_secs(settings.http_timeout_secs),
            bing: BingConfig {
                endpoint: settings.bing_search_api_endpoint,
                subscription_key: non_empty(settings.bing_search_api_subscription_key),
            },
            azure_search,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
