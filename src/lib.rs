//! TSQ - Terraform State Query
//!
//! A library for reading Terraform state documents and resolving resource
//! attribute addresses against them.

pub mod cli;
pub mod error;
pub mod output;
pub mod source;
pub mod tfstate;

use std::time::Duration;

pub use error::TsqError;
pub use source::{SourceConfig, SourceError, StateSource, get_source};
pub use tfstate::{LookupResult, StateDocument, StateError, TfState};

/// Fetches the state document at `location` and builds its address index.
///
/// `location` may be a local path, a `file://` path, or an `http(s)://`
/// URL. When `timeout` is set the fetch is abandoned once it elapses; the
/// parser never sees a partial document.
pub async fn load(location: &str, timeout: Option<Duration>) -> Result<TfState, TsqError> {
    let source = source::get_source(location)?;
    let bytes = source.fetch_with_timeout(timeout).await?;
    Ok(TfState::parse(&bytes)?)
}
