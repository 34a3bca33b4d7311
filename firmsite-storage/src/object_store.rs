//! Disk-backed media object store.
//!
//! Objects live under `object_store.root_dir` and are served by the web
//! layer under `object_store.public_base_url`. The trait contract matches a
//! hosted bucket (`put`/`remove`/`public_url`) so swapping the backend does
//! not touch callers.

use async_trait::async_trait;
use firmsite_error::{
    init::InitContextError, object_store::ObjectStoreError, FSResult, ObjectStoreResult,
};
use firmsite_models::{settings::Settings, ObjectStore, StoredObject};
use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tracing::{info, instrument};

pub struct FSLocalObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl FSLocalObjectStore {
    /// Resolve `key` under the store root, rejecting anything that would
    /// escape it.
    fn path_for(&self, key: &str) -> ObjectStoreResult<PathBuf> {
        let relative = Path::new(key);
        let escapes = relative.components().any(|component| {
            !matches!(component, Component::Normal(_))
        });
        if key.is_empty() || escapes {
            return Err(ObjectStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ObjectStore for FSLocalObjectStore {
    #[instrument(name = "init-object-store", skip_all)]
    async fn init(settings: &Settings) -> FSResult<Arc<Self>, InitContextError> {
        let root = PathBuf::from(&settings.object_store.root_dir);
        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            InitContextError::Primitive(format!(
                "Failed to create object store root {}: {e}",
                root.display()
            ))
        })?;

        info!("Object store rooted at {}", root.display());
        Ok(Arc::new(FSLocalObjectStore {
            root,
            public_base_url: settings
                .object_store
                .public_base_url
                .trim_end_matches('/')
                .to_string(),
        }))
    }

    async fn put(&self, key: &str, bytes: Vec<u8>) -> ObjectStoreResult<StoredObject> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ObjectStoreError::Store {
                    key: key.to_string(),
                    source,
                })?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| ObjectStoreError::Store {
                key: key.to_string(),
                source,
            })?;

        Ok(StoredObject {
            key: key.to_string(),
            public_url: self.public_url(key),
        })
    }

    async fn remove(&self, key: &str) -> ObjectStoreResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ObjectStoreError::NotFound(key.to_string()))
            }
            Err(source) => Err(ObjectStoreError::Remove {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(root: &Path) -> FSLocalObjectStore {
        FSLocalObjectStore {
            root: root.to_path_buf(),
            public_base_url: "/uploads".to_string(),
        }
    }

    #[tokio::test]
    async fn put_then_remove_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());

        let stored = store.put("bg/1_abc.jpg", vec![1, 2, 3]).await.unwrap();
        assert_eq!(stored.public_url, "/uploads/bg/1_abc.jpg");
        assert!(dir.path().join("bg/1_abc.jpg").exists());

        store.remove("bg/1_abc.jpg").await.unwrap();
        assert!(!dir.path().join("bg/1_abc.jpg").exists());
    }

    #[tokio::test]
    async fn removing_a_missing_object_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        let err = store.remove("bg/ghost.jpg").await.unwrap_err();
        assert!(matches!(err, ObjectStoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        let err = store.put("../escape.jpg", vec![0]).await.unwrap_err();
        assert!(matches!(err, ObjectStoreError::InvalidKey(_)));
        let err = store.put("/abs.jpg", vec![0]).await.unwrap_err();
        assert!(matches!(err, ObjectStoreError::InvalidKey(_)));
    }
}
