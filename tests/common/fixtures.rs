// Test directory fixtures

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory populated with files
pub struct ProjectFixture {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl ProjectFixture {
    /// Create an empty project directory
    pub fn empty() -> anyhow::Result<Self> {
        Self::with_files(&[])
    }

    /// Create a project with `(relative path, content)` files.
    /// A path ending in `/` creates an empty directory.
    pub fn with_files(files: &[(&str, &str)]) -> anyhow::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let root = temp_dir.path().to_path_buf();

        for (relative, content) in files {
            let path = root.join(relative);
            if relative.ends_with('/') {
                fs::create_dir_all(&path)?;
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
        }

        Ok(ProjectFixture {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
