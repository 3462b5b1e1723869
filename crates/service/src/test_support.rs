#![cfg(test)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::seed;
use crate::store::Store;

/// Fresh data directory under the system temp dir, unique per test.
pub fn temp_data_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("portal_{}_{}", tag, Uuid::new_v4()))
}

/// Open a store on a fresh directory and seed the default fixtures.
pub async fn open_seeded() -> Result<(Arc<Store>, PathBuf), anyhow::Error> {
    let dir = temp_data_dir("seeded");
    let store = Store::open(&dir).await?;
    seed::ensure_seed(&store).await?;
    Ok((store, dir))
}

pub async fn cleanup(dir: &Path) {
    let _ = tokio::fs::remove_dir_all(dir).await;
}
