use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::ClientStorage;
use crate::config::HomeConfig;
use crate::{hlog_debug, Result};

/// Storage backed by a JSON object of string values on disk.
///
/// Every write rewrites the whole file through a temp file and a rename,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the default storage file at `~/.dev-home/storage.json`.
    pub fn open_default() -> Result<Self> {
        Self::open(&HomeConfig::storage_path()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        hlog_debug!("FileStorage::open path={}", path.display());

        let items = if path.exists() {
            let contents = fs::read_to_string(path)?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&contents)?
            }
        } else {
            hlog_debug!("Storage file not found, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            items,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, serde_json::to_string_pretty(items)?)?;
        fs::rename(&temp_path, &self.path)?;
        hlog_debug!("Storage flushed: {}", self.path.display());
        Ok(())
    }
}

impl ClientStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    /// The in-memory map only changes once the file write succeeded.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.clone();
        items.insert(key.to_string(), value.to_string());
        self.flush(&items)?;
        self.items = items;
        Ok(())
    }
}
