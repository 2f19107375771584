//! Repository double whose every operation fails with a storage error.
//!
//! Used by tests to drive the 500 paths of the service and the HTTP layer.
//! Never wired into the binary.

use super::{MetadataRepository, RepositoryError, RepositoryResult};
use crate::models::metadata::ApplicationMetadata;
use async_trait::async_trait;

#[derive(Clone, Copy, Debug, Default)]
pub struct FailingMetadataRepository;

impl FailingMetadataRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetadataRepository for FailingMetadataRepository {
    async fn create(&self, _id: &str, _record: ApplicationMetadata) -> RepositoryResult<()> {
        Err(RepositoryError::Storage("error in create".into()))
    }

    async fn update(&self, _id: &str, _record: ApplicationMetadata) -> RepositoryResult<()> {
        Err(RepositoryError::Storage("error in update".into()))
    }

    async fn get(&self, _id: &str) -> RepositoryResult<Option<ApplicationMetadata>> {
        Err(RepositoryError::Storage("error in get".into()))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<ApplicationMetadata>> {
        Err(RepositoryError::Storage("error in get all".into()))
    }

    async fn delete(&self, _id: &str) -> RepositoryResult<()> {
        Err(RepositoryError::Storage("error in delete".into()))
    }
}
