pub mod auth;
pub mod error;
pub mod executor;
pub mod normalize;
pub mod work_package;

use std::fmt;

use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::info;

use self::error::ApiError;
use self::executor::{HttpExecutor, RequestExecutor};
use self::normalize::ensure_collection;
use self::work_package::WorkPackageDraft;

/// Where and how to reach an OpenProject instance.
#[derive(Clone)]
pub struct ConnectionConfig {
    pub base_url: String,
    pub api_key: String,
    pub proxy: Option<String>,
}

impl ConnectionConfig {
    pub fn new(base_url: &str, api_key: &str, proxy: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            proxy,
        }
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("proxy", &self.proxy)
            .finish()
    }
}

/// One entry of an OpenProject `filters` query parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub operator: String,
    pub values: Vec<String>,
}

#[derive(Serialize)]
struct FilterCondition<'a> {
    operator: &'a str,
    values: &'a [String],
}

impl Filter {
    pub fn new(field: &str, operator: &str, values: &[&str]) -> Self {
        Self {
            field: field.to_string(),
            operator: operator.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn active_projects() -> Self {
        Self::new("active", "=", &["t"])
    }

    pub fn open_status() -> Self {
        Self::new("status", "open", &[])
    }

    pub fn closed_status() -> Self {
        Self::new("status", "closed", &[])
    }
}

/// Renders filters as the JSON array OpenProject expects, e.g.
/// `[{"status":{"operator":"open","values":[]}}]`.
pub fn filters_json(filters: &[Filter]) -> String {
    let entries: Vec<Value> = filters
        .iter()
        .map(|f| {
            let condition = FilterCondition {
                operator: &f.operator,
                values: &f.values,
            };
            let mut entry = Map::new();
            entry.insert(f.field.clone(), json!(condition));
            Value::Object(entry)
        })
        .collect();
    Value::Array(entries).to_string()
}

fn with_filters(endpoint: String, filters: &[Filter]) -> String {
    if filters.is_empty() {
        return endpoint;
    }
    format!(
        "{endpoint}?filters={}",
        urlencoding::encode(&filters_json(filters))
    )
}

/// The OpenProject operations exposed as tools.
pub struct OpenProjectClient {
    executor: Box<dyn RequestExecutor>,
}

impl OpenProjectClient {
    pub fn new(config: ConnectionConfig) -> Self {
        info!(base_url = %config.base_url, "OpenProject client initialized");
        if let Some(proxy) = &config.proxy {
            info!(%proxy, "Using proxy");
        }
        Self::with_executor(Box::new(HttpExecutor::new(config)))
    }

    pub fn with_executor(executor: Box<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    pub fn proxy(&self) -> Option<&str> {
        self.executor.proxy()
    }

    pub async fn test_connection(&self) -> Result<Value, ApiError> {
        info!("Testing API connection...");
        self.executor.execute(Method::GET, "", None).await
    }

    pub async fn get_projects(&self, filters: &[Filter]) -> Result<Value, ApiError> {
        let endpoint = with_filters("/projects".to_string(), filters);
        let result = self.executor.execute(Method::GET, &endpoint, None).await?;
        Ok(ensure_collection(result))
    }

    pub async fn get_work_packages(
        &self,
        project_id: Option<u64>,
        filters: &[Filter],
    ) -> Result<Value, ApiError> {
        let endpoint = match project_id {
            Some(id) => format!("/projects/{id}/work_packages"),
            None => "/work_packages".to_string(),
        };
        let endpoint = with_filters(endpoint, filters);
        let result = self.executor.execute(Method::GET, &endpoint, None).await?;
        Ok(ensure_collection(result))
    }

    pub async fn get_types(&self, project_id: Option<u64>) -> Result<Value, ApiError> {
        let endpoint = match project_id {
            Some(id) => format!("/projects/{id}/types"),
            None => "/types".to_string(),
        };
        let result = self.executor.execute(Method::GET, &endpoint, None).await?;
        Ok(ensure_collection(result))
    }

    pub async fn create_work_package(&self, draft: &WorkPackageDraft) -> Result<Value, ApiError> {
        work_package::create(self.executor.as_ref(), draft).await
    }
}
