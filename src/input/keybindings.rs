//! Key binding resolution
//!
//! Keys are resolved in two layers: global bindings (tab management,
//! clipboard, menus) apply in every context; context bindings apply only when
//! the explorer or the Edit menu has focus. Keys that resolve to nothing in
//! the editor context go to the editing surface.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Which part of the UI receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Editor,
    FileExplorer,
    Menu,
}

/// High-level actions that can be performed in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Tabs
    NewTab,
    CloseTab,
    NextTab,
    PrevTab,

    // Editing
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    Save,

    // Application
    Quit,
    ToggleFocus,
    OpenFileMenu,
    OpenEditMenu,

    // File explorer
    ExplorerUp,
    ExplorerDown,
    ExplorerPageUp,
    ExplorerPageDown,
    ExplorerFirst,
    ExplorerLast,
    ExplorerExpand,
    ExplorerCollapse,
    ExplorerActivate,

    // Edit menu
    MenuUp,
    MenuDown,
    MenuConfirm,
}

impl Action {
    /// Human-readable name, used in menus and logs
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewTab => "New",
            Action::CloseTab => "Close",
            Action::NextTab => "Next Tab",
            Action::PrevTab => "Previous Tab",
            Action::Undo => "Undo",
            Action::Redo => "Redo",
            Action::Cut => "Cut",
            Action::Copy => "Copy",
            Action::Paste => "Paste",
            Action::SelectAll => "Select All",
            Action::Save => "Save",
            Action::Quit => "Quit",
            Action::ToggleFocus => "Toggle Focus",
            Action::OpenFileMenu => "File",
            Action::OpenEditMenu => "Edit",
            Action::ExplorerUp => "Up",
            Action::ExplorerDown => "Down",
            Action::ExplorerPageUp => "Page Up",
            Action::ExplorerPageDown => "Page Down",
            Action::ExplorerFirst => "First",
            Action::ExplorerLast => "Last",
            Action::ExplorerExpand => "Expand",
            Action::ExplorerCollapse => "Collapse",
            Action::ExplorerActivate => "Open",
            Action::MenuUp => "Up",
            Action::MenuDown => "Down",
            Action::MenuConfirm => "Select",
        }
    }
}

type KeyCombo = (KeyCode, KeyModifiers);

/// Maps key events to actions
#[derive(Debug, Clone)]
pub struct KeybindingResolver {
    global: HashMap<KeyCombo, Action>,
    contextual: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl Default for KeybindingResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingResolver {
    pub fn new() -> Self {
        let ctrl = KeyModifiers::CONTROL;
        let none = KeyModifiers::NONE;

        let global = HashMap::from([
            ((KeyCode::Char('n'), ctrl), Action::NewTab),
            ((KeyCode::Char('w'), ctrl), Action::CloseTab),
            ((KeyCode::Char('l'), ctrl), Action::NextTab),
            ((KeyCode::Char('j'), ctrl), Action::PrevTab),
            ((KeyCode::Char('z'), ctrl), Action::Undo),
            ((KeyCode::Char('u'), ctrl), Action::Redo),
            ((KeyCode::Char('x'), ctrl), Action::Cut),
            ((KeyCode::Char('c'), ctrl), Action::Copy),
            ((KeyCode::Char('v'), ctrl), Action::Paste),
            ((KeyCode::Char('a'), ctrl), Action::SelectAll),
            ((KeyCode::Char('s'), ctrl), Action::Save),
            ((KeyCode::Char('q'), ctrl), Action::Quit),
            ((KeyCode::Char('b'), ctrl), Action::ToggleFocus),
            ((KeyCode::Char('f'), KeyModifiers::ALT), Action::OpenFileMenu),
            ((KeyCode::Char('e'), KeyModifiers::ALT), Action::OpenEditMenu),
            ((KeyCode::F(10), none), Action::OpenEditMenu),
        ]);

        let explorer = HashMap::from([
            ((KeyCode::Up, none), Action::ExplorerUp),
            ((KeyCode::Down, none), Action::ExplorerDown),
            ((KeyCode::PageUp, none), Action::ExplorerPageUp),
            ((KeyCode::PageDown, none), Action::ExplorerPageDown),
            ((KeyCode::Home, none), Action::ExplorerFirst),
            ((KeyCode::End, none), Action::ExplorerLast),
            ((KeyCode::Right, none), Action::ExplorerExpand),
            ((KeyCode::Left, none), Action::ExplorerCollapse),
            ((KeyCode::Enter, none), Action::ExplorerActivate),
        ]);

        let menu = HashMap::from([
            ((KeyCode::Up, none), Action::MenuUp),
            ((KeyCode::Down, none), Action::MenuDown),
            ((KeyCode::Enter, none), Action::MenuConfirm),
        ]);

        Self {
            global,
            contextual: HashMap::from([
                (KeyContext::FileExplorer, explorer),
                (KeyContext::Menu, menu),
            ]),
        }
    }

    /// Resolve a key event in `context`
    ///
    /// Context bindings win over global ones. Shift is ignored on
    /// Ctrl-letter combos so Ctrl+Shift+Z still means undo.
    pub fn resolve(&self, event: &KeyEvent, context: KeyContext) -> Option<Action> {
        let combo = normalize(event);

        let action = self
            .contextual
            .get(&context)
            .and_then(|bindings| bindings.get(&combo))
            .or_else(|| self.global.get(&combo))
            .copied();

        tracing::trace!("Resolved {:?} in {:?} to {:?}", combo, context, action);
        action
    }

    /// Display string for the global binding of `action`, e.g. `Ctrl+Z`
    pub fn get_keybinding_for_action(&self, action: Action) -> Option<String> {
        self.global
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|((code, modifiers), _)| format_keybinding(code, modifiers))
            // Several keys may map to one action; pick a stable one
            .min_by_key(|s| (s.len(), s.clone()))
    }
}

fn normalize(event: &KeyEvent) -> KeyCombo {
    let mut modifiers = event.modifiers;
    let code = match event.code {
        KeyCode::Char(c) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            modifiers.remove(KeyModifiers::SHIFT);
            KeyCode::Char(c.to_ascii_lowercase())
        }
        code => code,
    };
    (code, modifiers)
}

/// Format a key combination like `Ctrl+Z`
pub fn format_keybinding(code: &KeyCode, modifiers: &KeyModifiers) -> String {
    let mut parts = Vec::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }

    let key = match code {
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        other => format!("{:?}", other),
    };
    parts.push(key);
    parts.join("+")
}
