//! Directory listing for the explorer
//!
//! Enumerates exactly one directory level per call. Nothing is cached: a
//! collapsed directory is listed again from disk when re-expanded.

use crate::model::filesystem::{DirEntry, FileSystem};
use std::cmp::Ordering;
use std::io;
use std::path::Path;

/// Order entries the way the explorer shows them: directories first, then
/// case-insensitive by name
pub fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    }
}

/// List the immediate children of `dir`, sorted for display
///
/// Names starting with `.` are dropped unless `show_hidden` is set.
pub fn list_children(
    fs: &dyn FileSystem,
    dir: &Path,
    show_hidden: bool,
) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<DirEntry> = fs
        .read_dir(dir)?
        .into_iter()
        .filter(|entry| show_hidden || !entry.is_hidden())
        .collect();

    entries.sort_by(compare_entries);
    tracing::trace!("Listed {} entries in {}", entries.len(), dir.display());
    Ok(entries)
}

/// Message shown in place of a directory's children when listing fails
pub fn listing_error_message(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        _ => err.to_string(),
    }
}
