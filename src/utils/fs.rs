//! File system inspection for the `fi` command
//!
//! Reads metadata and text contents only; nothing here writes to disk.

use serde::Serialize;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// What `fi` reports about an existing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    /// Last path component, or the path as typed when it has none
    pub name: String,
    /// Path made absolute against the current directory, not canonicalized
    pub absolute_path: PathBuf,
    /// Size in bytes
    pub length: u64,
    pub readable: bool,
    pub writable: bool,
    pub executable: bool,
}

/// Utility struct for inspecting file system entries
#[derive(Debug, Default)]
pub struct FileInspector;

impl FileInspector {
    /// Create a new file inspector
    pub fn new() -> Self {
        Self
    }

    /// Describe the entry at `path`, or `None` if it does not exist
    #[instrument(skip(self))]
    pub fn inspect<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Option<FileInfo> {
        let path = path.as_ref();

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("No entry at {}: {}", path.display(), e);
                return None;
            }
        };

        let (readable, writable, executable) = access_rights(path, &metadata);
        let info = FileInfo {
            name: base_name(path),
            absolute_path: self.absolute_path(path),
            length: metadata.len(),
            readable,
            writable,
            executable,
        };

        debug!("Inspected {}: {:?}", path.display(), info);
        Some(info)
    }

    /// Read the text lines of a file, without their line endings
    #[instrument(skip(self))]
    pub fn read_lines<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<Vec<String>> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());

        let content = fs::read_to_string(path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Join `path` onto the current directory unless it is already absolute
    pub fn absolute_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            return path.to_path_buf();
        }

        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                debug!("Current directory unavailable ({}), keeping relative path", e);
                path.to_path_buf()
            }
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read, write and execute rights of the current user, as access(2) reports them
#[cfg(unix)]
fn access_rights(path: &Path, _metadata: &Metadata) -> (bool, bool, bool) {
    use nix::unistd::{AccessFlags, access};

    let allowed = |mode| access(path, mode).is_ok();
    (
        allowed(AccessFlags::R_OK),
        allowed(AccessFlags::W_OK),
        allowed(AccessFlags::X_OK),
    )
}

#[cfg(not(unix))]
fn access_rights(path: &Path, metadata: &Metadata) -> (bool, bool, bool) {
    let readable = if metadata.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    };
    (readable, !metadata.permissions().readonly(), false)
}
