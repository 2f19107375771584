//! MetadataService: validation, identifier assignment and repository
//! delegation for application metadata. Handlers decode and encode; every
//! decision about what a request means lives here.

use crate::{
    models::metadata::{ApplicationMetadata, ValidationMessage},
    repositories::{MetadataRepository, RepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum MetadataError {
    /// Payload could not be decoded into a record.
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("{0}")]
    Invalid(ValidationMessage),
    #[error("application id is missing")]
    MissingId,
    /// Mutation against an identifier with no entry.
    #[error(transparent)]
    Conflict(RepositoryError),
    #[error(transparent)]
    Storage(RepositoryError),
}

impl From<ValidationMessage> for MetadataError {
    fn from(msg: ValidationMessage) -> Self {
        MetadataError::Invalid(msg)
    }
}

/// Mutations: a missing key is a conflict, anything else is opaque.
impl From<RepositoryError> for MetadataError {
    fn from(err: RepositoryError) -> Self {
        if err.is_not_found() {
            MetadataError::Conflict(err)
        } else {
            MetadataError::Storage(err)
        }
    }
}

pub type MetadataResult<T> = Result<T, MetadataError>;

/// Shared handle over the metadata store, cloned into every handler.
#[derive(Clone)]
pub struct MetadataService {
    repository: Arc<dyn MetadataRepository>,
}

impl MetadataService {
    pub fn new(repository: Arc<dyn MetadataRepository>) -> Self {
        Self { repository }
    }

    /// Decode a request body into a record.
    pub fn decode(body: &[u8]) -> MetadataResult<ApplicationMetadata> {
        serde_json::from_slice(body).map_err(|err| {
            warn!("rejecting malformed payload: {}", err);
            MetadataError::Malformed(err.to_string())
        })
    }

    /// Validate and store a new record under a freshly generated id.
    ///
    /// Any client-supplied `applicationID` is discarded.
    pub async fn create(
        &self,
        mut record: ApplicationMetadata,
    ) -> MetadataResult<ApplicationMetadata> {
        Self::check(&record)?;

        let id = Uuid::new_v4().to_string();
        record.application_id = id.clone();

        self.repository
            .create(&id, record.clone())
            .await
            .map_err(|err| {
                warn!("create {} failed: {}", id, err);
                MetadataError::Storage(err)
            })?;

        info!("created application metadata {}", id);
        Ok(record)
    }

    /// Replace the record stored under `id`. The path id overrides whatever
    /// the body carries.
    pub async fn update(
        &self,
        id: &str,
        mut record: ApplicationMetadata,
    ) -> MetadataResult<ApplicationMetadata> {
        Self::check(&record)?;
        let id = require_id(id)?;

        record.application_id = id.to_string();
        self.repository
            .update(id, record.clone())
            .await
            .inspect_err(|err| warn!("update {} failed: {}", id, err))?;

        info!("updated application metadata {}", id);
        Ok(record)
    }

    /// Look up one record. `Ok(None)` when nothing is stored under `id`.
    pub async fn get(&self, id: &str) -> MetadataResult<Option<ApplicationMetadata>> {
        let id = require_id(id)?;
        debug!("fetching application metadata {}", id);
        self.repository.get(id).await.map_err(|err| {
            warn!("get {} failed: {}", id, err);
            MetadataError::Storage(err)
        })
    }

    pub async fn get_all(&self) -> MetadataResult<Vec<ApplicationMetadata>> {
        let records = self.repository.get_all().await.map_err(|err| {
            warn!("listing application metadata failed: {}", err);
            MetadataError::Storage(err)
        })?;
        debug!("listed {} application metadata records", records.len());
        Ok(records)
    }

    pub async fn delete(&self, id: &str) -> MetadataResult<()> {
        let id = require_id(id)?;
        self.repository
            .delete(id)
            .await
            .inspect_err(|err| warn!("delete {} failed: {}", id, err))?;

        info!("deleted application metadata {}", id);
        Ok(())
    }

    fn check(record: &ApplicationMetadata) -> MetadataResult<()> {
        record.validate().map_err(|msg| {
            warn!("rejecting invalid application metadata: {}", msg);
            MetadataError::from(msg)
        })
    }
}

/// Blank ids are missing; anything else is used as the key verbatim.
fn require_id(id: &str) -> MetadataResult<&str> {
    if id.trim().is_empty() {
        return Err(MetadataError::MissingId);
    }
    Ok(id)
}
