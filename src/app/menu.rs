//! Menu bar state
//!
//! Only the Edit menu has a dropdown; File just reports that it is not
//! available yet.

use crate::input::keybindings::Action;

/// Items of the Edit dropdown, in display order
pub const EDIT_MENU_ITEMS: [Action; 6] = [
    Action::Undo,
    Action::Redo,
    Action::Cut,
    Action::Copy,
    Action::Paste,
    Action::SelectAll,
];

/// Title shown on the right of the menu bar
pub const APP_TITLE: &str = "Text Editor";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Highlighted item while the Edit dropdown is open
    open: Option<usize>,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.open
    }

    pub fn open(&mut self) {
        self.open = Some(0);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn next(&mut self) {
        if let Some(index) = self.open.as_mut() {
            *index = (*index + 1) % EDIT_MENU_ITEMS.len();
        }
    }

    pub fn prev(&mut self) {
        if let Some(index) = self.open.as_mut() {
            *index = (*index + EDIT_MENU_ITEMS.len() - 1) % EDIT_MENU_ITEMS.len();
        }
    }

    pub fn highlight(&mut self, index: usize) {
        if self.open.is_some() && index < EDIT_MENU_ITEMS.len() {
            self.open = Some(index);
        }
    }

    /// Close the menu, returning the highlighted action
    pub fn confirm(&mut self) -> Option<Action> {
        self.open.take().map(|index| EDIT_MENU_ITEMS[index])
    }
}
