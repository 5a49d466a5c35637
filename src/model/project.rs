use serde::Deserialize;

use super::Formattable;

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<Formattable>,
    pub active: Option<bool>,
    pub public: Option<bool>,
}

impl Project {
    /// Raw description text, if the project has a non-empty one.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_ref()
            .and_then(|d| d.raw.as_deref())
            .filter(|raw| !raw.is_empty())
    }
}
