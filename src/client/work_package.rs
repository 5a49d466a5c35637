use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use super::error::ApiError;
use super::executor::{RequestExecutor, API_PREFIX};

/// Caller-supplied fields for a new work package.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkPackageDraft {
    pub project_id: u64,
    pub subject: String,
    pub type_id: u64,
    pub description: Option<String>,
    pub priority_id: Option<u64>,
    pub assignee_id: Option<u64>,
}

impl WorkPackageDraft {
    #[cfg(test)]
    pub fn new(project_id: u64, subject: &str, type_id: u64) -> Self {
        Self {
            project_id,
            subject: subject.to_string(),
            type_id,
            description: None,
            priority_id: None,
            assignee_id: None,
        }
    }
}

/// A HAL link to another API resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn resource(collection: &str, id: u64) -> Self {
        Self {
            href: format!("{API_PREFIX}/{collection}/{id}"),
        }
    }
}

#[derive(Debug, Serialize)]
struct FormLinks {
    project: Link,
    #[serde(rename = "type")]
    work_package_type: Link,
}

/// Link-only body sent to `/work_packages/form`.
#[derive(Debug, Serialize)]
pub struct FormRequest {
    #[serde(rename = "_links")]
    links: FormLinks,
    subject: String,
}

impl FormRequest {
    pub fn from_draft(draft: &WorkPackageDraft) -> Self {
        Self {
            links: FormLinks {
                project: Link::resource("projects", draft.project_id),
                work_package_type: Link::resource("types", draft.type_id),
            },
            subject: draft.subject.clone(),
        }
    }

    pub fn into_value(self) -> Value {
        json!(self)
    }
}

/// Final body for `POST /work_packages`, seeded from the form response.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    payload: Map<String, Value>,
}

impl Submission {
    /// Takes the server's canonical `payload` and `lockVersion` from a form response.
    ///
    /// The `lockVersion` is copied as-is, whatever its JSON type. A form without a
    /// payload falls back to `initial`; an absent or `null` `lockVersion` falls back
    /// to `0`. Both fallbacks are logged.
    pub fn from_form(form: &Value, initial: Value) -> Self {
        let mut payload = match form.get("payload") {
            Some(Value::Object(payload)) => payload.clone(),
            _ => {
                warn!("Form response has no payload, submitting the initial draft instead");
                match initial {
                    Value::Object(map) => map,
                    _ => Map::new(),
                }
            }
        };

        let lock_version = match form.get("lockVersion") {
            Some(v) if !v.is_null() => v.clone(),
            _ => {
                warn!("Form response has no lockVersion, defaulting to 0");
                json!(0)
            }
        };
        payload.insert("lockVersion".to_string(), lock_version);

        Self { payload }
    }

    pub fn description(mut self, raw: &str) -> Self {
        self.payload
            .insert("description".to_string(), json!({ "raw": raw }));
        self
    }

    pub fn link(mut self, name: &str, link: Link) -> Self {
        let links = self
            .payload
            .entry("_links")
            .or_insert_with(|| Value::Object(Map::new()));
        if !links.is_object() {
            *links = Value::Object(Map::new());
        }
        if let Value::Object(links) = links {
            links.insert(name.to_string(), json!(link));
        }
        self
    }

    /// Overlays the draft's optional fields without touching anything else.
    pub fn with_optional_fields(mut self, draft: &WorkPackageDraft) -> Self {
        if let Some(description) = &draft.description {
            self = self.description(description);
        }
        if let Some(id) = draft.priority_id {
            self = self.link("priority", Link::resource("priorities", id));
        }
        if let Some(id) = draft.assignee_id {
            self = self.link("assignee", Link::resource("users", id));
        }
        self
    }

    pub fn lock_version(&self) -> Option<&Value> {
        self.payload.get("lockVersion")
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.payload)
    }
}

/// Creates a work package: negotiate the form, then submit its payload.
pub async fn create(
    executor: &dyn RequestExecutor,
    draft: &WorkPackageDraft,
) -> Result<Value, ApiError> {
    let initial = FormRequest::from_draft(draft).into_value();
    let form = executor
        .execute(Method::POST, "/work_packages/form", Some(&initial))
        .await?;

    let submission = Submission::from_form(&form, initial).with_optional_fields(draft);
    debug!(lock_version = ?submission.lock_version(), "Submitting work package");

    executor
        .execute(Method::POST, "/work_packages", Some(&submission.into_value()))
        .await
}
