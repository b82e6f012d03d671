//! Buffer store: the sole owner of open file contents
//!
//! Buffers are keyed by canonical absolute path (or by an untitled counter),
//! never by display name, so two `README.md` files in different directories
//! get separate buffers.
//!
//! `load` does not re-read a path that is already open. A file changed on disk
//! after it was opened keeps showing the in-memory content until its tab is
//! closed and the file is opened again.

use super::filesystem::FileSystem;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Opaque identity of an open buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u64);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer({})", self.0)
    }
}

/// What a buffer stands for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BufferKey {
    /// Canonical absolute path of the backing file
    Path(PathBuf),
    /// Untitled buffer number (`Untitled-N`)
    Untitled(usize),
}

/// File type derived from the extension, used by the status line only
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// Extension including the leading dot, e.g. `.rs`
    Extension(String),
    PlainText,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if !ext.is_empty() => FileKind::Extension(format!(".{}", ext)),
            _ => FileKind::PlainText,
        }
    }

    /// Label shown in the status bar
    pub fn label(&self) -> &str {
        match self {
            FileKind::Extension(ext) => ext,
            FileKind::PlainText => "Plain Text",
        }
    }
}

/// One open file's in-memory state
#[derive(Debug, Clone)]
pub struct Buffer {
    pub id: BufferId,
    pub key: BufferKey,
    content: String,
    dirty: bool,
    file_kind: FileKind,
    display_name: String,
    /// Cursor (row, col) remembered when the surface was last flushed
    cursor: (usize, usize),
}

impl Buffer {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn file_kind(&self) -> &FileKind {
        &self.file_kind
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }
}

/// Why a file could not be loaded into a buffer
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{} is not valid UTF-8 text", path.display())]
    Encoding { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            io::ErrorKind::InvalidData => LoadError::Encoding { path },
            _ => LoadError::Io { path, source: err },
        }
    }
}

/// Mapping from buffer identity to content, dirty flag and backing path
#[derive(Debug, Default)]
pub struct BufferStore {
    buffers: HashMap<BufferId, Buffer>,
    /// Canonical path -> buffer, for de-duplicating opens
    path_index: HashMap<PathBuf, BufferId>,
    next_id: u64,
    untitled_count: usize,
}

impl BufferStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> BufferId {
        let id = BufferId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Allocate an empty untitled buffer. Never fails.
    pub fn new_buffer(&mut self) -> BufferId {
        self.untitled_count += 1;
        let number = self.untitled_count;
        let id = self.allocate_id();

        self.buffers.insert(
            id,
            Buffer {
                id,
                key: BufferKey::Untitled(number),
                content: String::new(),
                dirty: true,
                file_kind: FileKind::PlainText,
                display_name: format!("Untitled-{}", number),
                cursor: (0, 0),
            },
        );
        tracing::debug!("Created untitled buffer {} (Untitled-{})", id, number);
        id
    }

    /// Load a file, or return the buffer already open for it
    ///
    /// Nothing is created when the read fails.
    pub fn load(&mut self, fs: &dyn FileSystem, path: &Path) -> Result<BufferId, LoadError> {
        let canonical = fs
            .canonicalize(path)
            .map_err(|e| LoadError::from_io(path, e))?;

        if let Some(id) = self.find_by_path(&canonical) {
            tracing::debug!("{} already open as {}", canonical.display(), id);
            return Ok(id);
        }

        let bytes = fs
            .read_file(&canonical)
            .map_err(|e| LoadError::from_io(&canonical, e))?;
        let content = String::from_utf8(bytes).map_err(|_| LoadError::Encoding {
            path: canonical.clone(),
        })?;

        let id = self.allocate_id();
        let display_name = canonical
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| canonical.display().to_string());

        self.buffers.insert(
            id,
            Buffer {
                id,
                key: BufferKey::Path(canonical.clone()),
                content,
                dirty: false,
                file_kind: FileKind::from_path(&canonical),
                display_name,
                cursor: (0, 0),
            },
        );
        self.path_index.insert(canonical.clone(), id);
        tracing::debug!("Loaded {} as {}", canonical.display(), id);
        Ok(id)
    }

    /// Replace the stored content. Returns true if it changed.
    pub fn write_back(&mut self, id: BufferId, content: &str) -> bool {
        let Some(buffer) = self.buffers.get_mut(&id) else {
            tracing::warn!("write_back to unknown {}", id);
            return false;
        };

        if buffer.content == content {
            return false;
        }

        buffer.content.clear();
        buffer.content.push_str(content);
        buffer.dirty = true;
        true
    }

    /// Remember where the cursor was when the buffer left the surface
    pub fn remember_cursor(&mut self, id: BufferId, cursor: (usize, usize)) {
        if let Some(buffer) = self.buffers.get_mut(&id) {
            buffer.cursor = cursor;
        }
    }

    /// Remove a buffer. Unknown ids are ignored.
    pub fn close(&mut self, id: BufferId) {
        if let Some(buffer) = self.buffers.remove(&id) {
            if let BufferKey::Path(path) = &buffer.key {
                self.path_index.remove(path);
            }
            tracing::debug!("Closed {} ({})", id, buffer.display_name);
        }
    }

    /// Current content snapshot
    pub fn get(&self, id: BufferId) -> Option<&str> {
        self.buffers.get(&id).map(|b| b.content.as_str())
    }

    pub fn buffer(&self, id: BufferId) -> Option<&Buffer> {
        self.buffers.get(&id)
    }

    /// Buffer open for the given canonical path
    pub fn find_by_path(&self, canonical: &Path) -> Option<BufferId> {
        self.path_index.get(canonical).copied()
    }

    pub fn contains(&self, id: BufferId) -> bool {
        self.buffers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}
