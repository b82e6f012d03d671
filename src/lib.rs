// Editor library - exposes all core modules for the binary and for testing

pub mod app;
pub mod config;
pub mod input;
pub mod model;
pub mod services;
pub mod view;
