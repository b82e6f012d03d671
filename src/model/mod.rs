//! Core data model for documents
//!
//! This module contains pure data structures with minimal external dependencies.

pub mod buffer_store;
pub mod filesystem;
pub mod surface;
