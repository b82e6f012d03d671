//! View and UI layer
//!
//! This module contains all presentation and rendering components.

pub mod file_tree;
pub mod status;
pub mod theme;
pub mod ui;
