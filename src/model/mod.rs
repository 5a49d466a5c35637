pub mod project;
pub mod work_package;
pub mod work_package_type;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::client::error::ApiError;
use crate::client::normalize::elements;

/// A HAL-embedded resource of which only the name is shown.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Named {
    pub name: Option<String>,
}

/// OpenProject's formattable text (`{format, raw, html}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Formattable {
    pub raw: Option<String>,
}

/// Decodes the `_embedded.elements` of a normalized collection.
pub fn decode_elements<T: DeserializeOwned>(
    body: &Value,
    endpoint: &str,
) -> Result<Vec<T>, ApiError> {
    elements(body)
        .iter()
        .map(|element| decode(element.clone(), endpoint))
        .collect()
}

pub fn decode<T: DeserializeOwned>(value: Value, endpoint: &str) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// Distinguishes a field that is present but `null` from one that is missing.
///
/// Use with `#[serde(default)]`: missing gives `None`, `null` gives `Some(None)`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
