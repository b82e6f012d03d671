//! Filesystem abstraction used by the buffer store and the file tree
//!
//! The editor never touches `std::fs` directly outside of `StdFileSystem`, so
//! every component that reads from disk can be exercised against a temp
//! directory or a failure-injecting implementation.
//!
//! The trait is synchronous: file reads happen on the event loop and are
//! treated as atomic with respect to input handling.

use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// Directory Entry Types
// ============================================================================

/// Type of filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    File,
    Directory,
    Symlink,
}

/// A directory entry returned by `read_dir`
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Full path to the entry
    pub path: PathBuf,
    /// File/directory name (last component of path)
    pub name: String,
    /// Type of entry
    pub entry_type: EntryType,
    /// For symlinks, whether the target is a directory
    pub symlink_target_is_dir: bool,
}

impl DirEntry {
    /// Create a new directory entry
    pub fn new(path: PathBuf, name: String, entry_type: EntryType) -> Self {
        Self {
            path,
            name,
            entry_type,
            symlink_target_is_dir: false,
        }
    }

    /// Create a symlink entry with target info
    pub fn new_symlink(path: PathBuf, name: String, target_is_dir: bool) -> Self {
        Self {
            path,
            name,
            entry_type: EntryType::Symlink,
            symlink_target_is_dir: target_is_dir,
        }
    }

    /// Returns true if this entry is a directory OR a symlink pointing to a directory
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
            || (self.entry_type == EntryType::Symlink && self.symlink_target_is_dir)
    }

    /// Returns true if this is a regular file (or symlink to file)
    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
            || (self.entry_type == EntryType::Symlink && !self.symlink_target_is_dir)
    }

    /// Returns true if the name marks a hidden entry
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Metadata about a file or directory
#[derive(Debug, Clone, Default)]
pub struct FileMetadata {
    /// Size in bytes (0 for directories)
    pub size: u64,
    pub is_dir: bool,
    pub is_readonly: bool,
}

// ============================================================================
// FileSystem Trait
// ============================================================================

/// Filesystem operations needed by the editor shell
///
/// All methods are synchronous.
pub trait FileSystem: Send + Sync {
    /// Read entire file into memory
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Get file/directory metadata
    fn metadata(&self, path: &Path) -> io::Result<FileMetadata>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(self.metadata(path)?.is_dir)
    }

    /// List entries in a directory (non-recursive, unsorted)
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Get canonical (absolute, normalized) path
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

// ============================================================================
// StdFileSystem Implementation
// ============================================================================

/// Native filesystem backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let meta = std::fs::metadata(path)?;
        Ok(FileMetadata {
            size: meta.len(),
            is_dir: meta.is_dir(),
            is_readonly: meta.permissions().readonly(),
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry.file_type()?;

            let dir_entry = if file_type.is_symlink() {
                let target_is_dir = std::fs::metadata(&path)
                    .map(|m| m.is_dir())
                    .unwrap_or(false);
                DirEntry::new_symlink(path, name, target_is_dir)
            } else if file_type.is_dir() {
                DirEntry::new(path, name, EntryType::Directory)
            } else {
                DirEntry::new(path, name, EntryType::File)
            };

            entries.push(dir_entry);
        }
        Ok(entries)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}
