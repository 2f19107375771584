//! Volatile in-process store.

use super::{MetadataRepository, RepositoryError, RepositoryResult};
use crate::models::metadata::ApplicationMetadata;
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use tracing::debug;

/// Thread-safe map from application id to record.
///
/// A single mutex guards the map; every operation touches one key and
/// completes under one lock acquisition, so a mutation either fully applies
/// or leaves the entry untouched.
#[derive(Clone, Default)]
pub struct InMemoryMetadataRepository {
    inner: Arc<Mutex<HashMap<String, ApplicationMetadata>>>,
}

impl InMemoryMetadataRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records. Lets callers holding the concrete store
    /// inspect it without going through the trait.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MetadataRepository for InMemoryMetadataRepository {
    async fn create(&self, id: &str, mut record: ApplicationMetadata) -> RepositoryResult<()> {
        record.application_id = id.to_string();
        let mut inner = self.inner.lock().await;
        if inner.insert(id.to_string(), record).is_some() {
            debug!("overwrote existing record {}", id);
        }
        Ok(())
    }

    async fn update(&self, id: &str, mut record: ApplicationMetadata) -> RepositoryResult<()> {
        let mut inner = self.inner.lock().await;
        let slot = inner
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })?;
        record.application_id = id.to_string();
        *slot = record;
        Ok(())
    }

    async fn get(&self, id: &str) -> RepositoryResult<Option<ApplicationMetadata>> {
        Ok(self.inner.lock().await.get(id).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<ApplicationMetadata>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .iter()
            .map(|(id, record)| ApplicationMetadata {
                application_id: id.clone(),
                ..record.clone()
            })
            .collect())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.inner
            .lock()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ApplicationMetadata {
        ApplicationMetadata {
            title: title.into(),
            version: "1.0.1".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_stores_under_key_and_stamps_id() {
        let repo = InMemoryMetadataRepository::new();
        let mut input = record("one");
        input.application_id = "client-supplied".into();
        repo.create("appID1", input).await.unwrap();

        let stored = repo.get("appID1").await.unwrap().unwrap();
        assert_eq!(stored.application_id, "appID1");
        assert_eq!(stored.title, "one");
        assert!(repo.get("client-supplied").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_overwrites_existing_entry() {
        let repo = InMemoryMetadataRepository::new();
        repo.create("appID1", record("one")).await.unwrap();
        repo.create("appID1", record("two")).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.get("appID1").await.unwrap().unwrap().title, "two");
    }

    #[tokio::test]
    async fn get_missing_is_not_an_error() {
        let repo = InMemoryMetadataRepository::new();
        assert_eq!(repo.get("unknown-id").await, Ok(None));
    }

    #[tokio::test]
    async fn get_all_empty_store_is_empty_vec() {
        let repo = InMemoryMetadataRepository::new();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_all_returns_every_record() {
        let repo = InMemoryMetadataRepository::new();
        repo.create("appID1", record("one")).await.unwrap();
        repo.create("appID2", record("two")).await.unwrap();

        let mut all = repo.get_all().await.unwrap();
        all.sort_by(|a, b| a.application_id.cmp(&b.application_id));
        let ids: Vec<_> = all.iter().map(|r| r.application_id.as_str()).collect();
        assert_eq!(ids, ["appID1", "appID2"]);
    }

    #[tokio::test]
    async fn update_missing_fails_without_inserting() {
        let repo = InMemoryMetadataRepository::new();
        repo.create("appID1", record("one")).await.unwrap();

        let err = repo.update("appID2", record("two")).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(repo.get("appID2").await.unwrap().is_none());
        assert_eq!(repo.get("appID1").await.unwrap().unwrap().title, "one");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn update_overwrites_and_keeps_key_as_id() {
        let repo = InMemoryMetadataRepository::new();
        repo.create("appID1", record("one")).await.unwrap();

        let mut changed = record("one");
        changed.company = "updated company".into();
        changed.application_id = "something-else".into();
        repo.update("appID1", changed).await.unwrap();

        let stored = repo.get("appID1").await.unwrap().unwrap();
        assert_eq!(stored.company, "updated company");
        assert_eq!(stored.application_id, "appID1");
    }

    #[tokio::test]
    async fn delete_twice_is_success_then_not_found() {
        let repo = InMemoryMetadataRepository::new();
        repo.create("appID1", record("one")).await.unwrap();

        assert_eq!(repo.delete("appID1").await, Ok(()));
        assert_eq!(
            repo.delete("appID1").await,
            Err(RepositoryError::NotFound {
                id: "appID1".into()
            })
        );
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn clones_share_one_store() {
        let repo = InMemoryMetadataRepository::new();
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(&format!("app-{i}"), record("concurrent"))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(repo.len().await, 16);
    }
}
