//! Services and external integrations
//!
//! This module contains all code that deals with external processes,
//! the terminal and log files.

pub mod clipboard;
pub mod log_dirs;
pub mod terminal_modes;
pub mod tracing_setup;
