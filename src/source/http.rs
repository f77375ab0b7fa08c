use async_trait::async_trait;

use super::{SourceError, StateSource};

/// Fetches a state document over HTTP(S) with a single unauthenticated GET.
///
/// Authenticated remote backends (S3, GCS, Terraform Cloud) are out of
/// scope; anything that serves the raw document over plain HTTP works.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(SourceError::Client)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl StateSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Http {
                location: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                location: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| SourceError::Http {
            location: self.url.clone(),
            source: e,
        })?;
        tracing::debug!(url = %self.url, bytes = body.len(), "state document fetched");
        Ok(body.to_vec())
    }
}
