use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

pub const FALLBACK_DETAIL: &str = "Failed to parse resume";

/// Everything that can go wrong between pressing submit and showing a result.
/// `Display` is the text shown after `Error: ` in the status line.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Could not read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content type for {file_name}: {source}")]
    InvalidMime {
        file_name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Could not start the upload runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("The upload stopped before reporting a result")]
    Interrupted,
}

impl UploadError {
    /// Builds the rejection for a non-2xx response from whatever body came back.
    pub fn rejected(status: StatusCode, body: &[u8]) -> Self {
        UploadError::Rejected {
            status,
            detail: error_detail(body).unwrap_or_else(|| FALLBACK_DETAIL.to_string()),
        }
    }
}

/// Pulls a usable `detail` out of an error body. Bodies that are not JSON count
/// as an empty object. Falsy details (missing, null, false, 0, "") yield `None`.
pub fn error_detail(body: &[u8]) -> Option<String> {
    let body: serde_json::Value = serde_json::from_slice(body)
        .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()));

    match body.get("detail")? {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(detail) if detail.is_empty() => None,
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        // validation errors arrive as a list of objects
        other => Some(other.to_string()),
    }
}
