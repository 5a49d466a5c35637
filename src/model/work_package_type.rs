use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPackageType {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub is_default: Option<bool>,
    pub is_milestone: Option<bool>,
}
