use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status >= 400.
    #[error("API Error {status}: {body}{}", hint_suffix(*.hint))]
    Http {
        status: u16,
        body: String,
        hint: Option<&'static str>,
    },

    /// The server was never reached (DNS, connect, TLS, timeout).
    #[error("Network error accessing {url}: {cause}")]
    Network { url: String, cause: String },

    /// The HTTP client itself could not be set up, e.g. an unusable proxy URL.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Unexpected response shape from {endpoint}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// An HTTP failure with the hint for its status, if there is one.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            body: body.into(),
            hint: status_hint(status),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. } | ApiError::Client(_))
    }
}

pub fn status_hint(status: u16) -> Option<&'static str> {
    match status {
        401 => Some("Authentication failed. Please check your API key."),
        403 => Some("Access denied. The user lacks required permissions."),
        404 => Some("Resource not found. Please verify the URL and resource exists."),
        407 => Some("Proxy authentication required."),
        500 => Some("Internal server error. Please try again later."),
        502 => Some("Bad gateway. The server or proxy is not responding correctly."),
        503 => Some("Service unavailable. The server might be under maintenance."),
        _ => None,
    }
}

fn hint_suffix(hint: Option<&str>) -> String {
    hint.map(|h| format!("\n\n{h}")).unwrap_or_default()
}
