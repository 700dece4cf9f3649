//! Cached remote payloads, keyed by file name.
//!
//! Presence of a key is a cache hit; there is no expiry. The trait exists so
//! pipelines can be exercised in tests without touching the filesystem.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait PayloadCache {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, payload: &str) -> Result<()>;
}

/// One file per key under a fixed directory.
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl PayloadCache for FileCache {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key)).ok()
    }

    fn put(&self, key: &str, payload: &str) -> Result<()> {
        fs::write(self.dir.join(key), payload)?;
        Ok(())
    }
}

/// Map-backed cache for tests and dry runs.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PayloadCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn put(&self, key: &str, payload: &str) -> Result<()> {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key.to_string(), payload.to_string());
        }
        Ok(())
    }
}
