use std::{collections::HashMap, io::ErrorKind, path::PathBuf};

use super::TokenStore;
use crate::error::StoreError;

/// Store backed by a JSON object on disk, `{"key": "value", ...}`.
///
/// Writes land in a sibling temp file which is then renamed over the store,
/// so a concurrent reader sees either the old or the new content.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "store.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TokenStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load().await?.remove(key))
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let mut values = self.load().await?;
        values.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&values)?;
        let tmp = self.tmp_path();
        async_fs::write(&tmp, json).await?;
        async_fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
