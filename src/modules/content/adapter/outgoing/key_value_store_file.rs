use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::modules::content::application::ports::outgoing::{KeyValueStore, KeyValueStoreError};

/// One file per key under a data directory. Writes go to a temporary file
/// that is renamed over the target.
#[derive(Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, KeyValueStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(KeyValueStoreError::StorageError(format!(
                "invalid key: {key:?}"
            )));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn storage_err(path: &Path, e: std::io::Error) -> KeyValueStoreError {
    KeyValueStoreError::StorageError(format!("{}: {}", path.display(), e))
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_err(&path, e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueStoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| storage_err(&self.dir, e))?;
        fs::write(&tmp, value)
            .await
            .map_err(|e| storage_err(&tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| storage_err(&path, e))?;

        debug!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> (FileKeyValueStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("kv-test-{}", Uuid::new_v4()));
        (FileKeyValueStore::new(&dir), dir)
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let (store, _dir) = temp_store();

        assert_eq!(store.get("portfolio_site_data").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_and_overwrite() {
        let (store, dir) = temp_store();

        store.set("portfolio_site_data", "{\"a\":1}".to_string()).await.unwrap();
        store.set("portfolio_site_data", "{\"a\":2}".to_string()).await.unwrap();

        assert_eq!(
            store.get("portfolio_site_data").await.unwrap().as_deref(),
            Some("{\"a\":2}")
        );
        assert!(!dir.join("portfolio_site_data.json.tmp").exists());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_path_like_keys_are_rejected() {
        let (store, _dir) = temp_store();

        assert!(store.get("../etc/passwd").await.is_err());
        assert!(store.set("", "x".to_string()).await.is_err());
    }
}
