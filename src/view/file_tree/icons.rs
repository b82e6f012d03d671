//! Icons shown in front of explorer entries

use std::path::Path;

pub const DIRECTORY_ICON: &str = "🗂️";
pub const DEFAULT_FILE_ICON: &str = "📄";
pub const ERROR_ICON: &str = "⚠️";

/// Icon for a file, chosen by extension
pub fn file_icon(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("py") => "🐍",
        Some("js" | "jsx") => "📜",
        Some("ts" | "tsx") => "📘",
        Some("html" | "htm") => "🌐",
        Some("css" | "scss" | "sass") => "🎨",
        Some("json") => "📋",
        Some("md") => "📝",
        Some("txt") => "📃",
        Some("yml" | "yaml" | "ini" | "cfg" | "conf") => "⚙️",
        Some("toml") => "🔧",
        Some("png" | "jpg" | "jpeg" | "gif" | "svg" | "ico") => "🖼️",
        Some("zip" | "tar" | "gz" | "rar") => "📦",
        Some("exe" | "sh" | "bat") => "⚡",
        _ => DEFAULT_FILE_ICON,
    }
}
