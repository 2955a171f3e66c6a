use thiserror::Error;

/// Failure to obtain a usable content document. Every variant names the
/// path that was requested so the page can tell the reader what is missing.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("network error fetching {path}: {message}")]
    Network { path: String, message: String },

    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("{path} is not valid JSON: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &str {
        match self {
            ContentError::Network { path, .. }
            | ContentError::Status { path, .. }
            | ContentError::InvalidJson { path, .. }
            | ContentError::Io { path, .. } => path,
        }
    }
}
