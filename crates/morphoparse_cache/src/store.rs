use crate::error::CacheError;
use crate::ParseCache;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A [`ParseCache`] backed by an in-memory map with single-blob bincode
/// persistence. Without a path, it behaves as a pure in-memory cache (no
/// persistence is attempted, the same as the original's path-less mode).
#[derive(Debug)]
pub struct BlobParseCache {
    store: HashMap<String, Option<String>>,
    path: Option<PathBuf>,
    dirty: bool,
}

impl BlobParseCache {
    /// Loads the cache from `path` if it exists and decodes cleanly. A
    /// missing or corrupt blob is treated as an empty cache — a corrupt
    /// blob is logged as a warning rather than surfaced as an error, the
    /// one explicitly-recovered failure kind in this crate.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = Self::try_load(&path).unwrap_or_else(|| {
            log::debug!("no usable parse cache at {}, starting empty", path.display());
            HashMap::new()
        });
        Self { store, path: Some(path), dirty: false }
    }

    /// A cache with no backing file; `flush` is always a no-op.
    pub fn in_memory() -> Self {
        Self { store: HashMap::new(), path: None, dirty: false }
    }

    fn try_load(path: &Path) -> Option<HashMap<String, Option<String>>> {
        if !path.is_file() {
            return None;
        }
        let bytes = std::fs::read(path).ok()?;
        match bincode::deserialize(&bytes) {
            Ok(store) => Some(store),
            Err(e) => {
                log::warn!("parse cache at {} is corrupt, discarding: {e}", path.display());
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl ParseCache for BlobParseCache {
    fn get(&self, transcription: &str) -> Option<Option<String>> {
        self.store.get(transcription).cloned()
    }

    fn put(&mut self, transcription: String, parse: Option<String>) {
        if self.store.get(&transcription) != Some(&parse) {
            self.dirty = true;
        }
        self.store.insert(transcription, parse);
    }

    fn flush(&mut self) -> Result<(), CacheError> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(path) = &self.path {
            let bytes = bincode::serialize(&self.store).map_err(CacheError::Corrupt)?;
            std::fs::write(path, bytes).map_err(CacheError::Io)?;
        }
        self.dirty = false;
        Ok(())
    }

    fn clear(&mut self, persist: bool) -> Result<(), CacheError> {
        self.store.clear();
        self.dirty = true;
        if persist {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn never_attempted_and_no_valid_parse_are_distinct() {
        let mut cache = BlobParseCache::in_memory();
        assert_eq!(cache.get("chien"), None);
        cache.put("chien".to_string(), None);
        assert_eq!(cache.get("chien"), Some(None));
        cache.put("chiens".to_string(), Some("chien|dog|N-s|PL|Phi".to_string()));
        assert_eq!(cache.get("chiens"), Some(Some("chien|dog|N-s|PL|Phi".to_string())));
    }

    #[test]
    fn flush_is_a_no_op_when_not_dirty() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("cache.pickle");
        let mut cache = BlobParseCache::load(&path);
        cache.flush().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn flush_persists_and_reload_round_trips() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("cache.pickle");
        let mut cache = BlobParseCache::load(&path);
        cache.put("chien".to_string(), Some("chien|dog|N".to_string()));
        cache.flush().unwrap();
        assert!(path.exists());

        let reloaded = BlobParseCache::load(&path);
        assert_eq!(reloaded.get("chien"), Some(Some("chien|dog|N".to_string())));
    }

    #[test]
    fn clear_without_persist_leaves_the_on_disk_blob_untouched() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("cache.pickle");
        let mut cache = BlobParseCache::load(&path);
        cache.put("chien".to_string(), Some("chien|dog|N".to_string()));
        cache.flush().unwrap();

        cache.clear(false).unwrap();
        assert!(cache.is_empty());

        let reloaded = BlobParseCache::load(&path);
        assert_eq!(reloaded.get("chien"), Some(Some("chien|dog|N".to_string())));
    }

    #[test]
    fn clear_with_persist_flushes_the_empty_cache_to_disk() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("cache.pickle");
        let mut cache = BlobParseCache::load(&path);
        cache.put("chien".to_string(), Some("chien|dog|N".to_string()));
        cache.flush().unwrap();

        cache.clear(true).unwrap();

        let reloaded = BlobParseCache::load(&path);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn corrupt_blob_is_recovered_as_empty() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("cache.pickle");
        std::fs::write(&path, b"not a valid bincode blob").unwrap();
        let cache = BlobParseCache::load(&path);
        assert!(cache.is_empty());
    }
}
