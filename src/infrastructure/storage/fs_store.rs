use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::Manifest;
use crate::error::Result;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<PathBuf> {
        self.ensure_dir(&self.data_dir)?;

        let path = self.data_dir.join(format!("{}.json", key));
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&path, content)?;
        Ok(path)
    }
}

impl Storage for FileSystemStore {
    fn save_manifest(&self, manifest: &Manifest) -> Result<PathBuf> {
        let key = format!("{}_{}", StorageKeys::MANIFEST_PREFIX, Utc::now().timestamp());
        let path = self.write_json_file(&key, manifest)?;
        info!("Saved {} records to {}", manifest.total_records, path.display());
        Ok(path)
    }
}
