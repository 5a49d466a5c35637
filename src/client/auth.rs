use base64::Engine;

/// Builds the value of the `Authorization` header for an OpenProject API key.
///
/// OpenProject accepts API keys as Basic credentials with the fixed user name `apikey`.
pub fn encode_api_key(api_key: &str) -> String {
    let creds = format!("apikey:{api_key}");
    base64::engine::general_purpose::STANDARD.encode(creds)
}

pub fn basic_auth_header(api_key: &str) -> String {
    format!("Basic {}", encode_api_key(api_key))
}
