//! The editor shell: focus, key and mouse dispatch, notifications
//!
//! `Editor` glues the explorer, the tab controller, the clipboard and the
//! status line together. It is driven by the event loop in `main.rs` (or by
//! the test harness) through `handle_key`, `handle_mouse`, `handle_paste` and
//! `tick`, and drawn with `render`.

mod clipboard_actions;
mod file_explorer;
pub mod menu;
pub mod notification;
mod render;
pub mod tab_controller;

pub use menu::MenuState;
pub use notification::{Notification, Severity};
pub use tab_controller::{CloseOutcome, TabController, TabLabel, WELCOME_INDEX};

use crate::config::Config;
use crate::input::keybindings::{Action, KeyContext, KeybindingResolver};
use crate::model::filesystem::FileSystem;
use crate::model::surface::SurfaceStyle;
use crate::services::clipboard::ClipboardProvider;
use crate::view::file_tree::{FileTree, FileTreeView};
use crate::view::status::{self, StatusLine};
use crate::view::theme::Theme;
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Which pane receives keys not claimed by a global binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FileExplorer,
    Editor,
}

/// Screen regions from the last render, used for mouse hit testing
#[derive(Debug, Clone, Default)]
pub(crate) struct LayoutCache {
    pub file_menu: Rect,
    pub edit_menu: Rect,
    pub edit_dropdown: Rect,
    pub explorer: Rect,
    pub editor: Rect,
    /// Hit area of each entry of the navigation order
    pub tabs: Vec<(Rect, usize)>,
    pub new_tab_button: Rect,
}

pub struct Editor {
    config: Config,
    theme: Theme,
    keybindings: KeybindingResolver,
    tabs: TabController,
    explorer: FileTreeView,
    focus: Focus,
    menu: MenuState,
    clipboard: Box<dyn ClipboardProvider>,
    status: StatusLine,
    notification: Option<Notification>,
    last_tick: Instant,
    layout: LayoutCache,
    should_quit: bool,
}

impl Editor {
    /// Build an editor rooted at `root`
    ///
    /// # Errors
    ///
    /// Fails if `root` does not exist or is not a directory.
    pub fn new(
        config: Config,
        root: PathBuf,
        fs: Arc<dyn FileSystem>,
        clipboard: Box<dyn ClipboardProvider>,
    ) -> io::Result<Self> {
        let theme = Theme::from_name(&config.theme);
        let tree = FileTree::new(root, Arc::clone(&fs), config.file_explorer.show_hidden)?;
        let explorer = FileTreeView::new(tree);

        let style = SurfaceStyle {
            line_numbers: config.editor.line_numbers,
            line_number_style: Style::default().fg(theme.line_number_fg),
            cursor_line_style: Style::default().bg(theme.current_line_bg),
            selection_style: Style::default().bg(theme.selection_bg),
        };
        let tabs = TabController::new(fs, config.editor.welcome_text.clone(), style);

        tracing::info!(
            "Editor started in {}",
            explorer.tree().root_path().display()
        );

        let mut editor = Self {
            config,
            theme,
            keybindings: KeybindingResolver::new(),
            tabs,
            explorer,
            focus: Focus::FileExplorer,
            menu: MenuState::default(),
            clipboard,
            status: StatusLine::default(),
            notification: None,
            last_tick: Instant::now(),
            layout: LayoutCache::default(),
            should_quit: false,
        };
        editor.refresh_status();
        Ok(editor)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn explorer(&self) -> &FileTreeView {
        &self.explorer
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            tracing::debug!("Focus {:?} -> {:?}", self.focus, focus);
            self.focus = focus;
        }
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Show a notice in the status bar, replacing any previous one
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let notification = Notification::new(message, severity);
        match severity {
            Severity::Error => tracing::warn!("Notice: {}", notification.message),
            _ => tracing::debug!("Notice: {}", notification.message),
        }
        self.notification = Some(notification);
    }

    /// Re-project the status line from the active buffer and surface cursor
    pub fn refresh_status(&mut self) {
        self.status = status::project(self.tabs.active_buffer(), self.tabs.surface().cursor());
    }

    /// Time left until the next status tick is due
    pub fn time_until_tick(&self) -> Duration {
        let interval = Duration::from_millis(self.config.editor.status_refresh_ms);
        interval.saturating_sub(self.last_tick.elapsed())
    }

    /// Periodic housekeeping, driven by the event loop timeout
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        let lifetime = Duration::from_millis(self.config.notifications.duration_ms);
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now, lifetime))
        {
            self.notification = None;
        }
        self.refresh_status();
        self.last_tick = now;
    }

    fn key_context(&self) -> KeyContext {
        if self.menu.is_open() {
            KeyContext::Menu
        } else {
            match self.focus {
                Focus::FileExplorer => KeyContext::FileExplorer,
                Focus::Editor => KeyContext::Editor,
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, event: KeyEvent) {
        if event.kind == KeyEventKind::Release {
            return;
        }

        let context = self.key_context();
        let action = self.keybindings.resolve(&event, context);
        tracing::trace!("Key {:?} in {:?} -> {:?}", event, context, action);

        match (context, action) {
            (
                KeyContext::Menu,
                Some(action @ (Action::MenuUp | Action::MenuDown | Action::MenuConfirm)),
            ) => self.handle_action(action),
            // Any other key dismisses the dropdown
            (KeyContext::Menu, _) => self.menu.close(),
            (_, Some(action)) => self.handle_action(action),
            (KeyContext::Editor, None) => {
                self.tabs.surface_mut().input(event);
            }
            (_, None) => {}
        }

        self.refresh_status();
    }

    /// Insert bracketed-paste text into the surface
    pub fn handle_paste(&mut self, text: &str) {
        if self.menu.is_open() {
            self.menu.close();
        }
        self.tabs.surface_mut().insert_str(text);
        self.set_focus(Focus::Editor);
        self.refresh_status();
    }

    pub fn handle_action(&mut self, action: Action) {
        tracing::debug!("Action {:?}", action);
        match action {
            Action::NewTab => {
                self.tabs.create_tab();
                self.set_focus(Focus::Editor);
            }
            Action::CloseTab => match self.tabs.close_active() {
                CloseOutcome::WelcomeReset => self.notify("Welcome tab cleared", Severity::Info),
                CloseOutcome::Closed { title } => {
                    self.notify(format!("Closed {}", title), Severity::Info)
                }
                CloseOutcome::Ignored => {}
            },
            Action::NextTab => self.tabs.navigate(1),
            Action::PrevTab => self.tabs.navigate(-1),
            Action::Undo => {
                if !self.tabs.surface_mut().undo() {
                    self.notify("Nothing to undo", Severity::Warning);
                }
            }
            Action::Redo => {
                if !self.tabs.surface_mut().redo() {
                    self.notify("Nothing to redo", Severity::Warning);
                }
            }
            Action::Cut => self.cut_selection(),
            Action::Copy => self.copy_selection(),
            Action::Paste => self.paste(),
            Action::SelectAll => self.select_all(),
            Action::Save => self.notify("Save functionality coming soon!", Severity::Info),
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Action::ToggleFocus => self.set_focus(match self.focus {
                Focus::FileExplorer => Focus::Editor,
                Focus::Editor => Focus::FileExplorer,
            }),
            Action::OpenFileMenu => {
                self.menu.close();
                self.notify("File menu - coming soon!", Severity::Info);
            }
            Action::OpenEditMenu => self.menu.open(),
            Action::MenuUp => self.menu.prev(),
            Action::MenuDown => self.menu.next(),
            Action::MenuConfirm => {
                if let Some(item) = self.menu.confirm() {
                    self.handle_action(item);
                }
            }
            Action::ExplorerUp
            | Action::ExplorerDown
            | Action::ExplorerPageUp
            | Action::ExplorerPageDown
            | Action::ExplorerFirst
            | Action::ExplorerLast
            | Action::ExplorerExpand
            | Action::ExplorerCollapse
            | Action::ExplorerActivate => self.handle_explorer_action(action),
        }
    }

    /// Handle a mouse event using the regions of the last render
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let position = Position::new(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(position),
            MouseEventKind::ScrollDown if self.layout.explorer.contains(position) => {
                self.file_explorer_navigate(Action::ExplorerDown)
            }
            MouseEventKind::ScrollUp if self.layout.explorer.contains(position) => {
                self.file_explorer_navigate(Action::ExplorerUp)
            }
            _ => return,
        }

        self.refresh_status();
    }

    fn handle_click(&mut self, position: Position) {
        if self.menu.is_open() {
            let dropdown = self.layout.edit_dropdown;
            if dropdown.contains(position) {
                // Rows inside the border map to items
                let row = position.y.saturating_sub(dropdown.y + 1) as usize;
                if position.y > dropdown.y && row < menu::EDIT_MENU_ITEMS.len() {
                    self.menu.highlight(row);
                    self.handle_action(Action::MenuConfirm);
                }
                return;
            }
            self.menu.close();
            if self.layout.edit_menu.contains(position) {
                return;
            }
        }

        let tab_hit = self
            .layout
            .tabs
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, index)| index);

        if self.layout.file_menu.contains(position) {
            self.handle_action(Action::OpenFileMenu);
        } else if self.layout.edit_menu.contains(position) {
            self.handle_action(Action::OpenEditMenu);
        } else if self.layout.new_tab_button.contains(position) {
            self.handle_action(Action::NewTab);
        } else if let Some(index) = tab_hit {
            self.tabs.switch_to(index);
            self.set_focus(Focus::Editor);
        } else if self.layout.explorer.contains(position) {
            self.file_explorer_click(position);
        } else if self.layout.editor.contains(position) {
            self.set_focus(Focus::Editor);
        }
    }
}
