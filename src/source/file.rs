use std::path::PathBuf;

use async_trait::async_trait;

use super::{SourceError, StateSource};

/// Reads a state document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl StateSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::Io {
                location: self.location.clone(),
                source: e,
            })?;
        tracing::debug!(path = %self.location, bytes = bytes.len(), "state document read");
        Ok(bytes)
    }
}
