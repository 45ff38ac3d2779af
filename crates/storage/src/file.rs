//! File-backed byte store: one file per key under a base directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::kv::KeyValueStore;

/// Byte store persisting each key as a flat file.
///
/// Keys are fixed identifiers chosen by this workspace (no user input), so
/// they are used as file names directly.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at an explicit directory (created lazily on first write).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `{app_data_dir}/storefront`.
    pub fn in_app_data_dir() -> anyhow::Result<Self> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

        let mut dir = base;
        dir.push("storefront");
        Ok(Self::new(dir))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn try_write(&self, path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create store directory at {:?}", self.dir))?;
        fs::write(path, bytes).with_context(|| format!("failed to write {:?}", path))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::error!("failed to read {:?} from file store: {err:?}", path);
                None
            }
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) {
        let path = self.path_for(key);
        if let Err(err) = self.try_write(&path, bytes) {
            tracing::error!("failed to write {:?} to file store: {err:?}", path);
        }
    }
}
