//! This module provides a filesystem backend that keeps its whole tree in memory.

use std::collections::BTreeMap;

use anyhow::anyhow;

use crate::core::{FsBackend, Result, utils};
use crate::{Child, Entry, EntryType};

/// A filesystem backend that stores file and directory entries in memory.
///
/// ### Internal state
///
/// * `entries` — The storage map that holds all file and directory entries.
///   - Key: absolute path with forward slashes and no trailing separator (root is `/`).
///   - Value: `Entry` containing type and (for files) content.
///   - `BTreeMap` gives ordered, deterministic iteration.
///
/// ### Invariants
///
/// 1. **Root existence**: `/` is always present and has type `Directory`.
/// 2. **Parent consistency**: for any entry at `/a/b/c` there is a `Directory` entry `/a/b`.
/// 3. **Uniqueness**: each path maps to exactly one `Entry`.
///
/// ### Thread Safety
///
/// Not thread‑safe. Wrap in `Mutex` at the application level if needed.
///
/// ### Example
///
/// ```
/// use fs_navigator::{FsBackend, MapFS};
///
/// let mut fs = MapFS::new();
/// fs.mkdir_all("/docs").unwrap();
/// fs.write("/docs/note.txt", b"Hello").unwrap();
///
/// assert!(fs.exists("/docs/note.txt"));
/// assert_eq!(fs.read("/docs/note.txt").unwrap(), b"Hello");
/// ```
#[derive(Debug, Clone)]
pub struct MapFS {
    entries: BTreeMap<String, Entry>,
}

impl MapFS {
    /// Creates new MapFS instance containing only the root directory.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("/".to_string(), Entry::new(EntryType::Directory));
        Self { entries }
    }

    fn key(path: &str) -> Result<String> {
        if !path.starts_with('/') {
            return Err(anyhow!("path must be absolute: {}", path));
        }
        // `/a//b/` and `/a/b` share one key
        let mut key = String::new();
        for component in path.split(['/', '\\']).filter(|c| !c.is_empty()) {
            key.push('/');
            key.push_str(component);
        }
        if key.is_empty() {
            key.push('/');
        }
        Ok(key)
    }

    fn get(&self, path: &str) -> Option<&Entry> {
        Self::key(path).ok().and_then(|key| self.entries.get(&key))
    }

    /// Checks if `path` is a directory.
    pub fn is_dir(&self, path: &str) -> Result<bool> {
        self.get(path)
            .map(Entry::is_dir)
            .ok_or_else(|| anyhow!("{} does not exist", path))
    }

    /// Checks if `path` is a regular file.
    pub fn is_file(&self, path: &str) -> Result<bool> {
        self.get(path)
            .map(Entry::is_file)
            .ok_or_else(|| anyhow!("{} does not exist", path))
    }

    /// Reads the entire contents of a file into a byte vector.
    /// Returns an empty vector for empty files.
    pub fn read(&self, path: &str) -> Result<Vec<u8>> {
        if self.is_dir(path)? {
            // checks for existent too
            return Err(anyhow!("{} is a directory", path));
        }
        Ok(self
            .get(path)
            .and_then(Entry::content)
            .cloned()
            .unwrap_or_default())
    }
}

impl Default for MapFS {
    fn default() -> Self {
        Self::new()
    }
}

impl FsBackend for MapFS {
    fn exists(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    fn is_absolute(&self, path: &str) -> bool {
        path.starts_with('/')
    }

    fn mkdir_all(&mut self, path: &str) -> Result<()> {
        let key = Self::key(path)?;

        // Walk down from the root creating every missing component
        let mut built = String::new();
        for component in key.split('/').filter(|c| !c.is_empty()) {
            built.push('/');
            built.push_str(component);
            match self.entries.get(&built) {
                Some(entry) if entry.is_file() => {
                    return Err(anyhow!("path '{}' exists but is not a directory", built));
                }
                Some(_) => {}
                None => {
                    self.entries
                        .insert(built.clone(), Entry::new(EntryType::Directory));
                }
            }
        }
        Ok(())
    }

    fn write(&mut self, path: &str, content: &[u8]) -> Result<()> {
        let key = Self::key(path)?;
        let parent = utils::parent(&key).map(utils::strip_trailing);
        match parent.and_then(|p| self.entries.get(p)) {
            Some(entry) if entry.is_dir() => {}
            Some(_) => return Err(anyhow!("parent of {} is not a directory", key)),
            None => return Err(anyhow!("parent directory of {} does not exist", key)),
        }

        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(|| Entry::new(EntryType::File));
        if entry.is_dir() {
            return Err(anyhow!("{} is a directory", key));
        }
        entry.set_content(content);
        Ok(())
    }

    fn ls(&self, path: &str) -> Result<Vec<Child>> {
        let key = Self::key(path)?;
        if !self.is_dir(&key)? {
            return Err(anyhow!("{} is not a directory", key));
        }
        let prefix = if key == "/" { key } else { format!("{}/", key) };
        Ok(self
            .entries
            .iter()
            .filter_map(|(entry_path, entry)| {
                let rest = entry_path.strip_prefix(&prefix)?;
                (!rest.is_empty() && !rest.contains('/'))
                    .then(|| Child::new(rest, entry.entry_type()))
            })
            .collect())
    }
}
