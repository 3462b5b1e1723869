use std::{path::PathBuf, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// JSON file-backed collection: a `Vec<T>` persisted as one JSON array blob.
///
/// A missing or unreadable file opens as an empty collection, never an
/// error. Mutations go through [`Collection::update`], which holds the
/// write lock for the read-modify-write and persists afterwards.
pub struct Collection<T> {
    inner: Arc<RwLock<Vec<T>>>,
    file_path: PathBuf,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Open the collection at the given path. Creates the file with an
    /// empty array if missing; malformed content is treated as empty.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let items: Vec<T> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: Vec<T> = Vec::new();
                fs::write(
                    &file_path,
                    serde_json::to_vec(&empty).map_err(|e| ServiceError::Storage(e.to_string()))?,
                )
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        Ok(Self { inner: Arc::new(RwLock::new(items)), file_path })
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let items = self.inner.read().await;
        let data =
            serde_json::to_vec(&*items).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Snapshot of the full collection.
    pub async fn all(&self) -> Vec<T> {
        let items = self.inner.read().await;
        items.clone()
    }

    pub async fn is_empty(&self) -> bool {
        let items = self.inner.read().await;
        items.is_empty()
    }

    /// Replace the whole collection and persist.
    pub async fn replace(&self, new_items: Vec<T>) -> Result<(), ServiceError> {
        let mut items = self.inner.write().await;
        *items = new_items;
        drop(items);
        self.save().await
    }

    /// Apply a mutation under the write lock and persist. If the closure
    /// fails nothing is written.
    pub async fn update<F>(&self, f: F) -> Result<(), ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<(), ServiceError>,
    {
        let mut items = self.inner.write().await;
        f(&mut items)?;
        drop(items);
        self.save().await
    }
}
