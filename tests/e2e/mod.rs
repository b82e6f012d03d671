mod clipboard;
mod file_explorer;
mod menu;
mod status_bar;
mod tabs;
