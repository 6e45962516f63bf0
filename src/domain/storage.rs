use super::Manifest;
use crate::error::Result;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    /// Persists the manifest and returns where it landed.
    fn save_manifest(&self, manifest: &Manifest) -> Result<PathBuf>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const MANIFEST_PREFIX: &'static str = "rankings";
}
