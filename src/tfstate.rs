mod address;
mod document;
mod error;
mod index;

pub use document::{Instance, Output, Resource, ResourceMode, StateDocument};
pub use error::StateError;
pub use index::{AddressIndex, LookupResult};

/// A parsed Terraform state document together with its address index.
///
/// Construction is the only fallible step; afterwards `list` and `lookup`
/// answer queries without touching the document again.
#[derive(Debug)]
pub struct TfState {
    document: StateDocument,
    index: AddressIndex,
}

impl TfState {
    /// Parses raw state-file bytes and builds the address index.
    ///
    /// Anything that is not a valid tfstate v4 document (bad JSON, missing
    /// `version`/`terraform_version`/`resources`, wrong version number)
    /// fails with [`StateError::Format`] and leaves nothing half-built.
    pub fn parse(bytes: &[u8]) -> Result<Self, StateError> {
        let document: StateDocument =
            serde_json::from_slice(bytes).map_err(|e| StateError::Format(e.to_string()))?;

        if document.version != 4 {
            return Err(StateError::Format(format!(
                "unsupported state version {} (expected 4)",
                document.version
            )));
        }

        let index = AddressIndex::build(&document)?;
        Ok(Self { document, index })
    }

    /// Every resolvable address, sorted lexicographically.
    pub fn list(&self) -> Vec<&str> {
        self.index.addresses()
    }

    /// Resolves one exact address. No fuzzy matching: an absent address is
    /// [`StateError::NotFound`] carrying the queried address.
    pub fn lookup(&self, address: &str) -> Result<LookupResult<'_>, StateError> {
        self.index
            .get(address)
            .map(LookupResult::new)
            .ok_or_else(|| StateError::NotFound(address.to_string()))
    }

    /// Number of resolvable addresses.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn document(&self) -> &StateDocument {
        &self.document
    }
}
