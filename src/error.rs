use thiserror::Error;

/// Unified error for fetching and querying state documents.
///
/// Source failures (I/O, HTTP, timeout) stay distinguishable from document
/// problems so callers can retry a fetch without re-parsing garbage.
#[derive(Debug, Error)]
pub enum TsqError {
    #[error(transparent)]
    Source(#[from] crate::source::SourceError),

    #[error(transparent)]
    State(#[from] crate::tfstate::StateError),
}
