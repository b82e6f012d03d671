//! XDG-compliant log directory management
//!
//! Logs are stored in `$XDG_STATE_HOME/tabshell/logs/` (typically
//! `~/.local/state/tabshell/logs/`). Each instance writes a PID-named file so
//! concurrent runs do not clobber each other.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Cached log directory path
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

fn temp_log_dir() -> PathBuf {
    std::env::temp_dir().join("tabshell-logs")
}

/// Get the base log directory, creating it if necessary.
///
/// Falls back to the system temp directory when the XDG location is
/// unavailable or cannot be created.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let dir = xdg_log_dir(
            std::env::var_os("XDG_STATE_HOME").as_deref().map(Path::new),
            dirs::home_dir().as_deref(),
        )
        .unwrap_or_else(temp_log_dir);

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            let fallback = temp_log_dir();
            let _ = fs::create_dir_all(&fallback);
            return fallback;
        }

        dir
    })
}

/// Resolve the log directory from `XDG_STATE_HOME` and the home directory
fn xdg_log_dir(state_home: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    // XDG requires an absolute path; relative values are ignored
    if let Some(state_home) = state_home.filter(|p| p.is_absolute()) {
        return Some(state_home.join("tabshell").join("logs"));
    }

    home.map(|home| {
        home.join(".local")
            .join("state")
            .join("tabshell")
            .join("logs")
    })
}

/// Log file name for a process
fn log_file_name(pid: u32) -> String {
    format!("tabshell-{}.log", pid)
}

/// Path of this process's log file: `{log_dir}/tabshell-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(log_file_name(std::process::id()))
}
