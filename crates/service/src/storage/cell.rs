use std::{path::PathBuf, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Single-record JSON file, used for the persisted session. An absent or
/// malformed file reads as `None`; clearing removes the file.
pub struct Cell<T> {
    inner: Arc<RwLock<Option<T>>>,
    file_path: PathBuf,
}

impl<T> Cell<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let value: Option<T> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).ok(),
            Err(_) => None,
        };

        Ok(Self { inner: Arc::new(RwLock::new(value)), file_path })
    }

    pub async fn get(&self) -> Option<T> {
        let value = self.inner.read().await;
        value.clone()
    }

    pub async fn set(&self, new_value: T) -> Result<(), ServiceError> {
        let data =
            serde_json::to_vec(&new_value).map_err(|e| ServiceError::Storage(e.to_string()))?;
        let mut value = self.inner.write().await;
        fs::write(&self.file_path, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        *value = Some(new_value);
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), ServiceError> {
        let mut value = self.inner.write().await;
        match fs::remove_file(&self.file_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ServiceError::Storage(e.to_string())),
        }
        *value = None;
        Ok(())
    }
}
