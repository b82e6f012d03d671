//! Input pipeline
//!
//! This module handles the key-to-action translation.

pub mod keybindings;
