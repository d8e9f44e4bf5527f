//! This module provides a filesystem backend over the real host filesystem.
//!
//! ### Key Features:
//! - **Direct mapping**: paths are host paths; no virtual root or path translation.
//! - **Trailing separators**: `/a/b/` and `/a/b` address the same location.
//! - **Typed listing**: children are reported as files or directories; anything else is skipped.

use std::path::Path;

use anyhow::anyhow;
use log::debug;

use crate::core::{FsBackend, Result, utils};
use crate::{Child, EntryType};

/// A filesystem backend that delegates to `std::fs`.
///
/// ### Usage notes:
/// - Symlinks are followed when classifying listed children; a dangling link is skipped.
/// - Devices, sockets and FIFOs are skipped when listing.
/// - Permissions are not adjusted.
/// - Errors are returned via `anyhow::Result` with the offending path in the message.
///
/// ### Example:
/// ```
/// use fs_navigator::{FsBackend, HostFS};
///
/// let root = std::env::temp_dir().join("host_fs_doc");
/// let root = root.to_string_lossy().replace('\\', "/");
///
/// let mut fs = HostFS::new();
/// fs.mkdir_all(&format!("{root}/docs")).unwrap();
/// fs.write(&format!("{root}/docs/note.txt"), b"Hello").unwrap();
/// assert!(fs.exists(&format!("{root}/docs/note.txt")));
/// # std::fs::remove_dir_all(&root).unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFS;

impl HostFS {
    pub fn new() -> Self {
        Self
    }

    fn host_path(path: &str) -> &Path {
        let stripped = utils::strip_trailing(path);
        // `C:` alone is drive-relative
        if stripped.ends_with(':') {
            Path::new(path)
        } else {
            Path::new(stripped)
        }
    }
}

impl FsBackend for HostFS {
    fn exists(&self, path: &str) -> bool {
        std::fs::exists(Self::host_path(path)).unwrap_or(false)
    }

    /// Paths starting with a separator are absolute on every platform; drive and UNC prefixes
    /// are recognized where the host supports them.
    fn is_absolute(&self, path: &str) -> bool {
        path.starts_with(['/', '\\']) || Path::new(path).is_absolute()
    }

    fn mkdir_all(&mut self, path: &str) -> Result<()> {
        let host = Self::host_path(path);
        if host.exists() && !host.is_dir() {
            return Err(anyhow!("path '{}' exists but is not a directory", path));
        }
        std::fs::create_dir_all(host)
            .map_err(|e| anyhow!("unable to create directory '{}': {}", path, e))?;
        debug!("created directory {}", path);
        Ok(())
    }

    fn write(&mut self, path: &str, content: &[u8]) -> Result<()> {
        let host = Self::host_path(path);
        if host.is_dir() {
            return Err(anyhow!("{} is a directory", path));
        }
        std::fs::write(host, content)
            .map_err(|e| anyhow!("unable to write '{}': {}", path, e))?;
        Ok(())
    }

    fn ls(&self, path: &str) -> Result<Vec<Child>> {
        let host = Self::host_path(path);
        let mut children = Vec::new();
        for entry in std::fs::read_dir(host)
            .map_err(|e| anyhow!("unable to read directory '{}': {}", path, e))?
        {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();

            // follows symlinks
            let entry_type = match std::fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => EntryType::Directory,
                Ok(meta) if meta.is_file() => EntryType::File,
                Ok(_) => {
                    debug!("skipping special entry {}{}", utils::normalize(path), name);
                    continue;
                }
                Err(e) => {
                    debug!("skipping unreadable entry {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            children.push(Child::new(name, entry_type));
        }
        Ok(children)
    }
}
