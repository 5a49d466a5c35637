use serde_json::Value;

use crate::model::project::Project;
use crate::model::work_package::WorkPackage;
use crate::model::work_package_type::WorkPackageType;
use crate::model::Named;

fn id_or_na(id: Option<u64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "N/A".into())
}

fn name_or_unknown(named: &Named) -> &str {
    named.name.as_deref().unwrap_or("Unknown")
}

/// String fields as-is, other values as JSON, missing or null as "Unknown".
fn root_field(root: &Value, key: &str) -> String {
    match root.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "Unknown".into(),
        Some(other) => other.to_string(),
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn connection(root: &Value, proxy: Option<&str>) -> String {
    let mut lines = vec!["✅ API connection successful!".to_string(), String::new()];
    if let Some(proxy) = proxy {
        lines.push(format!("Connected via proxy: {proxy}"));
    }
    lines.push(format!("API Version: {}", root_field(root, "_type")));
    lines.push(format!(
        "Instance Version: {}",
        root_field(root, "instanceVersion")
    ));
    finish(lines)
}

pub fn projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found.".into();
    }

    let mut lines = vec![format!("Found {} project(s):", projects.len()), String::new()];
    for project in projects {
        lines.push(format!(
            "- **{}** (ID: {})",
            project.name.as_deref().unwrap_or("Unnamed"),
            id_or_na(project.id)
        ));
        if let Some(description) = project.description_text() {
            lines.push(format!("  {description}"));
        }
        let status = if project.active.unwrap_or(false) {
            "Active"
        } else {
            "Inactive"
        };
        let public = if project.public.unwrap_or(false) {
            "Yes"
        } else {
            "No"
        };
        lines.push(format!("  Status: {status}"));
        lines.push(format!("  Public: {public}"));
        lines.push(String::new());
    }
    finish(lines)
}

pub fn work_packages(work_packages: &[WorkPackage]) -> String {
    if work_packages.is_empty() {
        return "No work packages found.".into();
    }

    let mut lines = vec![
        format!("Found {} work package(s):", work_packages.len()),
        String::new(),
    ];
    for wp in work_packages {
        lines.push(format!(
            "- **{}** (#{})",
            wp.subject.as_deref().unwrap_or("No title"),
            id_or_na(wp.id)
        ));

        if let Some(embedded) = &wp.embedded {
            if let Some(t) = &embedded.work_package_type {
                lines.push(format!("  Type: {}", name_or_unknown(t)));
            }
            if let Some(status) = &embedded.status {
                lines.push(format!("  Status: {}", name_or_unknown(status)));
            }
            if let Some(project) = &embedded.project {
                lines.push(format!("  Project: {}", name_or_unknown(project)));
            }
            if let Some(assignee) = &embedded.assignee {
                let name = assignee
                    .as_ref()
                    .and_then(|a| a.name.as_deref())
                    .unwrap_or("Unassigned");
                lines.push(format!("  Assignee: {name}"));
            }
        }

        if let Some(done) = wp.percentage_done {
            lines.push(format!("  Progress: {done}%"));
        }
        lines.push(String::new());
    }
    finish(lines)
}

pub fn types(types: &[WorkPackageType]) -> String {
    if types.is_empty() {
        return "No work package types found.".into();
    }

    let mut lines = vec!["Available work package types:".to_string(), String::new()];
    for t in types {
        lines.push(format!(
            "- **{}** (ID: {})",
            t.name.as_deref().unwrap_or("Unnamed"),
            id_or_na(t.id)
        ));
        if t.is_default.unwrap_or(false) {
            lines.push("  ✓ Default type".into());
        }
        if t.is_milestone.unwrap_or(false) {
            lines.push("  ✓ Milestone".into());
        }
        lines.push(String::new());
    }
    finish(lines)
}

pub fn created(wp: &WorkPackage) -> String {
    let mut lines = vec![
        "✅ Work package created successfully:".to_string(),
        String::new(),
        format!("- **Title**: {}", wp.subject.as_deref().unwrap_or("N/A")),
        format!("- **ID**: #{}", id_or_na(wp.id)),
    ];
    if let Some(embedded) = &wp.embedded {
        if let Some(t) = &embedded.work_package_type {
            lines.push(format!("- **Type**: {}", name_or_unknown(t)));
        }
        if let Some(status) = &embedded.status {
            lines.push(format!("- **Status**: {}", name_or_unknown(status)));
        }
        if let Some(project) = &embedded.project {
            lines.push(format!("- **Project**: {}", name_or_unknown(project)));
        }
    }
    finish(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wp(value: Value) -> WorkPackage {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn connection_with_missing_versions() {
        let text = connection(&json!({}), None);
        assert_eq!(
            text,
            "✅ API connection successful!\n\nAPI Version: Unknown\nInstance Version: Unknown\n"
        );
    }

    #[test]
    fn connection_mentions_proxy() {
        let text = connection(
            &json!({"_type": "Root", "instanceVersion": "14.2.1"}),
            Some("http://proxy:3128"),
        );
        assert!(text.contains("Connected via proxy: http://proxy:3128\n"));
        assert!(text.contains("API Version: Root\n"));
        assert!(text.contains("Instance Version: 14.2.1\n"));
    }

    #[test]
    fn project_listing() {
        let list: Vec<Project> = serde_json::from_value(json!([
            {"id": 1, "name": "Website", "description": {"raw": "Marketing site"}, "active": true, "public": false},
            {"id": 2, "name": "Archive", "description": {"raw": ""}, "active": false, "public": true}
        ]))
        .unwrap();

        assert_eq!(
            projects(&list),
            "Found 2 project(s):\n\n\
             - **Website** (ID: 1)\n  Marketing site\n  Status: Active\n  Public: No\n\n\
             - **Archive** (ID: 2)\n  Status: Inactive\n  Public: Yes\n\n"
        );
    }

    #[test]
    fn empty_listings() {
        assert_eq!(projects(&[]), "No projects found.");
        assert_eq!(work_packages(&[]), "No work packages found.");
        assert_eq!(types(&[]), "No work package types found.");
    }

    #[test]
    fn work_package_omits_missing_embedded_fields() {
        let text = work_packages(&[wp(json!({
            "id": 7,
            "subject": "Fix login",
            "_embedded": {"status": {"name": "In progress"}}
        }))]);
        assert_eq!(
            text,
            "Found 1 work package(s):\n\n- **Fix login** (#7)\n  Status: In progress\n\n"
        );
    }

    #[test]
    fn null_assignee_shows_unassigned() {
        let text = work_packages(&[wp(json!({
            "id": 7,
            "subject": "Fix login",
            "percentageDone": 40,
            "_embedded": {"type": {"name": "Bug"}, "assignee": null}
        }))]);
        assert!(text.contains("  Type: Bug\n"));
        assert!(text.contains("  Assignee: Unassigned\n"));
        assert!(text.contains("  Progress: 40%\n"));
    }

    #[test]
    fn work_package_without_subject_or_id() {
        let text = work_packages(&[wp(json!({}))]);
        assert!(text.contains("- **No title** (#N/A)\n"));
        assert!(!text.contains("Progress"));
        assert!(!text.contains("Assignee"));
    }

    #[test]
    fn type_flags() {
        let list: Vec<WorkPackageType> = serde_json::from_value(json!([
            {"id": 1, "name": "Task", "isDefault": true, "isMilestone": false},
            {"id": 2, "name": "Milestone", "isDefault": false, "isMilestone": true}
        ]))
        .unwrap();
        assert_eq!(
            types(&list),
            "Available work package types:\n\n\
             - **Task** (ID: 1)\n  ✓ Default type\n\n\
             - **Milestone** (ID: 2)\n  ✓ Milestone\n\n"
        );
    }

    #[test]
    fn created_summary() {
        let text = created(&wp(json!({
            "id": 101,
            "subject": "Fix bug",
            "_embedded": {
                "type": {"name": "Bug"},
                "status": {"name": "New"},
                "project": {"name": "Website"}
            }
        })));
        assert_eq!(
            text,
            "✅ Work package created successfully:\n\n\
             - **Title**: Fix bug\n- **ID**: #101\n\
             - **Type**: Bug\n- **Status**: New\n- **Project**: Website\n"
        );
    }
}
