//! UI rendering modules
//!
//! This module contains all rendering logic for the editor UI,
//! separated into focused submodules:
//! - `menu_bar` - Menu bar and the Edit dropdown
//! - `tab_bar` - Tab bar for the navigation order
//! - `file_explorer` - File tree explorer rendering
//! - `status_bar` - Status line and notices

pub mod file_explorer;
pub mod menu_bar;
pub mod status_bar;
pub mod tab_bar;

// Re-export main types for convenience
pub use file_explorer::FileExplorerRenderer;
pub use menu_bar::{MenuBarLayout, MenuBarRenderer};
pub use status_bar::StatusBarRenderer;
pub use tab_bar::{TabBarLayout, TabBarRenderer};
