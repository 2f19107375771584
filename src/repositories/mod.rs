//! Storage abstraction for application metadata records.
//!
//! Implemented by:
//! - [`in_memory::InMemoryMetadataRepository`] (the service's store)
//! - [`failing::FailingMetadataRepository`] (test double, every call fails)

pub mod failing;
pub mod in_memory;

use crate::models::metadata::ApplicationMetadata;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No entry exists under the given identifier.
    #[error("application id `{id}` not found")]
    NotFound { id: String },
    #[error("storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Keyed store of application metadata.
///
/// Absence is not an error for reads: `get` returns `Ok(None)` and `get_all`
/// returns an empty vector. Mutations against a missing key fail with
/// [`RepositoryError::NotFound`].
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Insert or overwrite the record stored under `id`.
    async fn create(&self, id: &str, record: ApplicationMetadata) -> RepositoryResult<()>;

    /// Overwrite an existing record. Never inserts.
    async fn update(&self, id: &str, record: ApplicationMetadata) -> RepositoryResult<()>;

    async fn get(&self, id: &str) -> RepositoryResult<Option<ApplicationMetadata>>;

    /// Every stored record, in no particular order.
    async fn get_all(&self) -> RepositoryResult<Vec<ApplicationMetadata>>;

    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}
