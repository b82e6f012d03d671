// Drives an Editor through ratatui's TestBackend

use super::fixtures::ProjectFixture;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::Arc;
use tabshell::app::Editor;
use tabshell::config::Config;
use tabshell::model::filesystem::StdFileSystem;
use tabshell::services::clipboard::{ClipboardProvider, MemoryClipboard};

/// Fixed rows of the screen layout
pub mod layout {
    pub const MENU_BAR_ROW: u16 = 0;
    pub const TAB_BAR_ROW: u16 = 1;
    /// First tree row, below the explorer border
    pub const FIRST_TREE_ROW: u16 = 2;
}

pub struct EditorTestHarness {
    editor: Editor,
    terminal: Terminal<TestBackend>,
    clipboard: MemoryClipboard,
    fixture: ProjectFixture,
}

impl EditorTestHarness {
    /// Editor over an empty project directory
    pub fn new(width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_files(width, height, &[])
    }

    /// Editor over a project with the given files
    pub fn with_files(width: u16, height: u16, files: &[(&str, &str)]) -> anyhow::Result<Self> {
        let fixture = ProjectFixture::with_files(files)?;
        let clipboard = MemoryClipboard::new();
        Self::build(width, height, fixture, Config::default(), Box::new(clipboard.clone()), clipboard)
    }

    pub fn with_config(
        width: u16,
        height: u16,
        files: &[(&str, &str)],
        config: Config,
    ) -> anyhow::Result<Self> {
        let fixture = ProjectFixture::with_files(files)?;
        let clipboard = MemoryClipboard::new();
        Self::build(width, height, fixture, config, Box::new(clipboard.clone()), clipboard)
    }

    /// Editor using `provider` as its clipboard
    pub fn with_clipboard(
        width: u16,
        height: u16,
        provider: Box<dyn ClipboardProvider>,
    ) -> anyhow::Result<Self> {
        let fixture = ProjectFixture::empty()?;
        Self::build(width, height, fixture, Config::default(), provider, MemoryClipboard::new())
    }

    fn build(
        width: u16,
        height: u16,
        fixture: ProjectFixture,
        config: Config,
        provider: Box<dyn ClipboardProvider>,
        clipboard: MemoryClipboard,
    ) -> anyhow::Result<Self> {
        super::tracing::init_tracing_from_env();

        let editor = Editor::new(
            config,
            fixture.root.clone(),
            Arc::new(StdFileSystem),
            provider,
        )?;
        let terminal = Terminal::new(TestBackend::new(width, height))?;

        Ok(Self {
            editor,
            terminal,
            clipboard,
            fixture,
        })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn clipboard(&self) -> &MemoryClipboard {
        &self.clipboard
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.fixture.path(relative)
    }

    pub fn should_quit(&self) -> bool {
        self.editor.should_quit()
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.editor.handle_key(KeyEvent::new(code, modifiers));
        Ok(())
    }

    /// Type `text` key by key; `\n` becomes Enter
    pub fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            self.send_key(code, KeyModifiers::NONE)?;
        }
        Ok(())
    }

    pub fn ctrl(&mut self, c: char) -> anyhow::Result<()> {
        self.send_key(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Left click at a screen cell. Hit areas come from the last render.
    pub fn click(&mut self, column: u16, row: u16) -> anyhow::Result<()> {
        self.editor.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        Ok(())
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let editor = &mut self.editor;
        self.terminal.draw(|frame| editor.render(frame))?;
        Ok(())
    }

    /// Text of the editing surface
    pub fn get_buffer_content(&self) -> String {
        self.editor.tabs().surface().text()
    }

    /// Current notice text, if any
    pub fn notice(&self) -> Option<String> {
        self.editor.notification().map(|n| n.message.clone())
    }

    fn row_symbols(&self, row: u16) -> Vec<String> {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol().to_string())
            .collect()
    }

    pub fn screen_row(&self, row: u16) -> String {
        self.row_symbols(row).concat()
    }

    pub fn screen_to_string(&self) -> String {
        let height = self.terminal.backend().buffer().area.height;
        (0..height)
            .map(|row| self.screen_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn get_menu_bar(&self) -> String {
        self.screen_row(layout::MENU_BAR_ROW)
    }

    pub fn get_tab_bar(&self) -> String {
        self.screen_row(layout::TAB_BAR_ROW)
    }

    pub fn get_status_bar(&self) -> String {
        let height = self.terminal.backend().buffer().area.height;
        self.screen_row(height - 1)
    }

    /// Screen cell where `text` starts, searching rows top to bottom
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        let needle: Vec<String> = text.chars().map(|c| c.to_string()).collect();
        let height = self.terminal.backend().buffer().area.height;

        for row in 0..height {
            let symbols = self.row_symbols(row);
            if symbols.len() < needle.len() {
                continue;
            }
            for x in 0..=(symbols.len() - needle.len()) {
                if symbols[x..x + needle.len()] == needle[..] {
                    return Some((x as u16, row));
                }
            }
        }
        None
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }
}
