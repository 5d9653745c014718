#![forbid(unsafe_code)]

use std::{
    collections::HashMap,
    io::Write,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::CacheResult,
    key::cache_key,
};

/// Persisted index shape.
///
/// Stored as pretty-printed JSON so a stray entry can be inspected or removed
/// by hand. `version` guards future layout changes.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
struct IndexFile {
    version: u32,
    entries: HashMap<String, PathBuf>,
}

const INDEX_VERSION: u32 = 1;

/// Durable mapping from resource identifier to local cache path.
///
/// ## Normative
/// - `lookup` returns a path only if the mapping exists AND the file exists.
/// - `store` flushes synchronously (write-temp, fsync, rename) before
///   returning, so a crash immediately after `store` keeps the mapping.
/// - A missing or unreadable index degrades to empty; entries are rebuilt by
///   the next successful fetch.
#[derive(Debug)]
pub struct CacheIndex {
    path: PathBuf,
    entries: Mutex<HashMap<String, PathBuf>>,
}

impl CacheIndex {
    /// Open (or lazily create) the index persisted at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<IndexFile>(&bytes) {
                Ok(file) if file.version == INDEX_VERSION => file.entries,
                Ok(file) => {
                    tracing::warn!(version = file.version, "unknown index version, starting empty");
                    HashMap::new()
                }
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "corrupt index, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "unreadable index, starting empty");
                HashMap::new()
            }
        };
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Look up the local copy of `url`.
    ///
    /// Returns the mapped path only if the file still exists on disk; a stale
    /// mapping (file deleted externally) is a miss.
    #[must_use]
    pub fn lookup(&self, url: &Url) -> Option<PathBuf> {
        let key = cache_key(url);
        let path = self.entries.lock().get(&key).cloned()?;
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!(%url, path = %path.display(), "stale index entry, treating as miss");
            None
        }
    }

    /// Record `path` as the local copy of `url` and flush durably.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CacheError`] if the index file cannot be written.
    /// Callers that already placed the file may log and continue; the entry
    /// will be recreated by the next fetch.
    pub fn store(&self, url: &Url, path: &Path) -> CacheResult<()> {
        let snapshot = {
            let mut entries = self.entries.lock();
            entries.insert(cache_key(url), path.to_path_buf());
            entries.clone()
        };
        self.persist(snapshot)
    }

    fn persist(&self, entries: HashMap<String, PathBuf>) -> CacheResult<()> {
        let file = IndexFile {
            version: INDEX_VERSION,
            entries,
        };
        let json = serde_json::to_vec_pretty(&file)?;

        // Same-directory temp file, so the rename stays on one filesystem.
        let parent = self
            .path
            .parent()
            .ok_or_else(|| std::io::Error::other("index path has no parent"))?;
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
