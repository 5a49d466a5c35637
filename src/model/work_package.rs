use serde::Deserialize;

use super::{present, Named};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPackage {
    pub id: Option<u64>,
    pub subject: Option<String>,
    pub percentage_done: Option<f64>,
    #[serde(rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    #[serde(rename = "type")]
    pub work_package_type: Option<Named>,
    pub status: Option<Named>,
    pub project: Option<Named>,
    /// `Some(None)` when the server sent `"assignee": null`.
    #[serde(default, deserialize_with = "present")]
    pub assignee: Option<Option<Named>>,
}
