use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    TestConnection,
    ListProjects,
    ListWorkPackages,
    ListTypes,
    CreateWorkPackage,
}

pub const ALL_TOOLS: &[Tool] = &[
    Tool::TestConnection,
    Tool::ListProjects,
    Tool::ListWorkPackages,
    Tool::ListTypes,
    Tool::CreateWorkPackage,
];

impl Tool {
    /// Looks up a tool by name. `list-projects` is accepted for `list_projects`.
    pub fn from_name(name: &str) -> Option<Self> {
        let canonical = name.trim().replace('-', "_");
        ALL_TOOLS.iter().copied().find(|t| t.name() == canonical)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::TestConnection => "test_connection",
            Tool::ListProjects => "list_projects",
            Tool::ListWorkPackages => "list_work_packages",
            Tool::ListTypes => "list_types",
            Tool::CreateWorkPackage => "create_work_package",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::TestConnection => "Test the connection to the OpenProject API",
            Tool::ListProjects => "List all OpenProject projects",
            Tool::ListWorkPackages => "List work packages",
            Tool::ListTypes => "List available work package types",
            Tool::CreateWorkPackage => "Create a new work package",
        }
    }

    pub fn input_schema(self) -> Value {
        match self {
            Tool::TestConnection => json!({
                "type": "object",
                "properties": {}
            }),
            Tool::ListProjects => json!({
                "type": "object",
                "properties": {
                    "active_only": {
                        "type": "boolean",
                        "description": "Show only active projects",
                        "default": true
                    }
                }
            }),
            Tool::ListWorkPackages => json!({
                "type": "object",
                "properties": {
                    "project_id": {
                        "type": "integer",
                        "description": "Project ID (optional, for project-specific work packages)"
                    },
                    "status": {
                        "type": "string",
                        "description": "Status filter (open, closed, all)",
                        "enum": ["open", "closed", "all"],
                        "default": "open"
                    }
                }
            }),
            Tool::ListTypes => json!({
                "type": "object",
                "properties": {
                    "project_id": {
                        "type": "integer",
                        "description": "Project ID (optional, for project-specific types)"
                    }
                }
            }),
            Tool::CreateWorkPackage => json!({
                "type": "object",
                "properties": {
                    "project_id": {
                        "type": "integer",
                        "description": "Project ID"
                    },
                    "subject": {
                        "type": "string",
                        "description": "Work package title"
                    },
                    "description": {
                        "type": "string",
                        "description": "Description (Markdown supported)"
                    },
                    "type_id": {
                        "type": "integer",
                        "description": "Type ID (e.g., 1 for Task, 2 for Bug)"
                    },
                    "priority_id": {
                        "type": "integer",
                        "description": "Priority ID (optional)"
                    },
                    "assignee_id": {
                        "type": "integer",
                        "description": "Assignee user ID (optional)"
                    }
                },
                "required": ["project_id", "subject", "type_id"]
            }),
        }
    }

    pub fn definition(self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        })
    }
}

/// The `tools/list` payload.
pub fn tool_definitions() -> Vec<Value> {
    ALL_TOOLS.iter().map(|t| t.definition()).collect()
}
