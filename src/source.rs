pub mod file;
pub mod http;

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileSource;
pub use http::HttpSource;

/// Locations probed, in order, when no explicit state location is given.
pub const DEFAULT_STATE_FILES: &[&str] = &["terraform.tfstate", ".terraform/terraform.tfstate"];

#[derive(Debug, Error)]
pub enum SourceError {
    /// The location names a scheme this tool does not speak (s3, gs, ...).
    #[error("unsupported state location scheme: {0}")]
    UnsupportedScheme(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {location}: {source}")]
    Http {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned status {status} for {location}")]
    HttpStatus { location: String, status: u16 },

    /// The deadline elapsed before the source produced any usable bytes.
    #[error("timed out after {timeout:?} while fetching {location}")]
    Timeout { location: String, timeout: Duration },
}

/// Something that can hand over the raw bytes of a state document.
///
/// Implementations do a single attempt; retrying is the caller's decision.
#[async_trait]
pub trait StateSource: Send + Sync {
    /// Short scheme name, e.g. `file` or `http`.
    fn name(&self) -> &str;

    /// The location this source reads, for error messages and logs.
    fn location(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<u8>, SourceError>;

    /// Runs `fetch` under an optional deadline. On expiry the transfer is
    /// dropped where it stands and no partial bytes are returned.
    async fn fetch_with_timeout(&self, timeout: Option<Duration>) -> Result<Vec<u8>, SourceError> {
        let Some(limit) = timeout else {
            return self.fetch().await;
        };
        tokio::time::timeout(limit, self.fetch())
            .await
            .map_err(|_| SourceError::Timeout {
                location: self.location().to_string(),
                timeout: limit,
            })?
    }
}

/// Picks a source implementation for a location string.
///
/// `http://` and `https://` go over the network, `file://` and bare strings
/// are local paths. Every other scheme is rejected up front instead of being
/// misread as a relative path.
pub fn get_source(location: &str) -> Result<Box<dyn StateSource>, SourceError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else if let Some(path) = location.strip_prefix("file://") {
        Ok(Box::new(FileSource::new(path)))
    } else if let Some((scheme, _)) = location.split_once("://") {
        Err(SourceError::UnsupportedScheme(scheme.to_string()))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// Ordered fallback paths for the default state location, passed in
/// explicitly by the CLI rather than read from ambient process state.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub candidates: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_STATE_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SourceConfig {
    /// First candidate that exists on disk; otherwise the first candidate,
    /// whose read failure will then explain what was looked for.
    pub fn resolve(&self) -> String {
        for candidate in &self.candidates {
            if Path::new(candidate).exists() {
                return candidate.clone();
            }
        }
        self.candidates
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_STATE_FILES[0].to_string())
    }
}
