//! Photo fetch error type.

use thiserror::Error;

/// Why a single photo could not be fetched. None of these stop the scan.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The `2 FILE` value is not an absolute http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// Curl reported an error (DNS, connect, TLS, timeout, too many redirects...).
    #[error("{0}")]
    Network(#[source] curl::Error),
    /// Final response status was 4xx/5xx.
    #[error("HTTP {status}")]
    Http { status: u32 },
    /// Creating or writing the target file failed.
    #[error("write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Short tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl(_) => "invalid_url",
            FetchError::Network(_) => "network",
            FetchError::Http { .. } => "http",
            FetchError::Io { .. } => "io",
        }
    }
}
