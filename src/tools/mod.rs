pub mod catalog;
pub mod render;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::error;

use crate::client::error::ApiError;
use crate::client::work_package::WorkPackageDraft;
use crate::client::{Filter, OpenProjectClient};
use crate::model::project::Project;
use crate::model::work_package::WorkPackage;
use crate::model::work_package_type::WorkPackageType;
use crate::model::{decode, decode_elements};
use catalog::Tool;

pub const NOT_INITIALIZED: &str = "Error: OpenProject Client not initialized. Please set environment variables:\n\
- OPENPROJECT_URL=https://your-instance.openproject.com\n\
- OPENPROJECT_API_KEY=your-api-key";

// Optional arguments are `Option` so an explicit `null` means "use the default".
#[derive(Debug, Deserialize)]
struct ListProjectsArgs {
    active_only: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    Open,
    Closed,
    All,
}

impl StatusFilter {
    pub fn filters(self) -> Vec<Filter> {
        match self {
            StatusFilter::Open => vec![Filter::open_status()],
            StatusFilter::Closed => vec![Filter::closed_status()],
            StatusFilter::All => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListWorkPackagesArgs {
    project_id: Option<u64>,
    status: Option<StatusFilter>,
}

#[derive(Debug, Deserialize)]
struct ListTypesArgs {
    project_id: Option<u64>,
}

/// Tool arguments; a missing or `null` argument object counts as `{}`.
fn parse_args<T: DeserializeOwned>(tool: Tool, arguments: Value) -> Result<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    serde_json::from_value(arguments)
        .with_context(|| format!("Invalid arguments for {}", tool.name()))
}

/// Maps tool calls onto the OpenProject client and renders the results as text.
pub struct ToolRouter {
    client: Option<OpenProjectClient>,
}

impl ToolRouter {
    /// `None` leaves the router uninitialized: every call reports the missing settings.
    pub fn new(client: Option<OpenProjectClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> Option<&OpenProjectClient> {
        self.client.as_ref()
    }

    /// Runs a tool. Failures come back as text, never as `Err`.
    pub async fn invoke(&self, name: &str, arguments: Value) -> String {
        let Some(client) = &self.client else {
            return NOT_INITIALIZED.to_string();
        };
        let Some(tool) = Tool::from_name(name) else {
            return format!("Unknown tool: {name}");
        };

        match dispatch(client, tool, arguments).await {
            Ok(text) => text,
            Err(e) => {
                let api_error = e.downcast_ref::<ApiError>();
                let status = api_error.and_then(ApiError::status);
                let network = api_error.is_some_and(ApiError::is_network);
                error!(tool = name, ?status, network, error = %format!("{e:#}"), "Error executing tool");
                format!("❌ Error executing tool '{name}':\n\n{e:#}")
            }
        }
    }
}

async fn dispatch(client: &OpenProjectClient, tool: Tool, arguments: Value) -> Result<String> {
    match tool {
        Tool::TestConnection => {
            let root = client.test_connection().await?;
            Ok(render::connection(&root, client.proxy()))
        }
        Tool::ListProjects => {
            let args: ListProjectsArgs = parse_args(tool, arguments)?;
            let filters = if args.active_only.unwrap_or(true) {
                vec![Filter::active_projects()]
            } else {
                Vec::new()
            };
            let result = client.get_projects(&filters).await?;
            let projects: Vec<Project> = decode_elements(&result, "/projects")?;
            Ok(render::projects(&projects))
        }
        Tool::ListWorkPackages => {
            let args: ListWorkPackagesArgs = parse_args(tool, arguments)?;
            let result = client
                .get_work_packages(args.project_id, &args.status.unwrap_or_default().filters())
                .await?;
            let work_packages: Vec<WorkPackage> = decode_elements(&result, "/work_packages")?;
            Ok(render::work_packages(&work_packages))
        }
        Tool::ListTypes => {
            let args: ListTypesArgs = parse_args(tool, arguments)?;
            let result = client.get_types(args.project_id).await?;
            let types: Vec<WorkPackageType> = decode_elements(&result, "/types")?;
            Ok(render::types(&types))
        }
        Tool::CreateWorkPackage => {
            let draft: WorkPackageDraft = parse_args(tool, arguments)?;
            let created = client.create_work_package(&draft).await?;
            let created: WorkPackage = decode(created, "/work_packages")?;
            Ok(render::created(&created))
        }
    }
}
