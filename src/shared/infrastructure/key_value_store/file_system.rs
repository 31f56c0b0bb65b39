// File backed slots: one `<slot>.json` file per slot under a data directory.
//
// Writes go to a sibling temporary file first and are renamed into place,
// so a reader never sees a half written slot.

use crate::shared::infrastructure::key_value_store::{KeyValueError, KeyValueStore};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileSystemKeyValueStore {
    root: PathBuf,
}

impl FileSystemKeyValueStore {
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, KeyValueError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|source| KeyValueError::Io {
                slot: root.display().to_string(),
                source,
            })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileSystemKeyValueStore {
    async fn get(&self, slot: &str) -> Result<Option<String>, KeyValueError> {
        match tokio::fs::read_to_string(self.slot_path(slot)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(KeyValueError::Io {
                slot: slot.to_string(),
                source,
            }),
        }
    }

    async fn set(&self, slot: &str, value: String) -> Result<(), KeyValueError> {
        let target = self.slot_path(slot);
        let staging = self.root.join(format!("{slot}.json.tmp"));
        let io_error = |source| KeyValueError::Io {
            slot: slot.to_string(),
            source,
        };
        tokio::fs::write(&staging, value).await.map_err(io_error)?;
        tokio::fs::rename(&staging, &target).await.map_err(io_error)?;
        Ok(())
    }
}
