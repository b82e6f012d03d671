//! Tab/view controller
//!
//! Owns the buffer store, the single editing surface and the ordered list of
//! file tabs. The navigation order is `[Welcome, tab_0, tab_1, ...]` and
//! `active_index` indexes into it, so index 0 is always the Welcome tab.
//!
//! Every switch runs the flush/load protocol: the surface text and cursor are
//! written back into the buffer being left, then the target buffer's content
//! is loaded into the surface. After every public operation the surface shows
//! exactly the stored content of the active buffer, or the Welcome text.

use crate::model::buffer_store::{Buffer, BufferId, BufferStore, LoadError};
use crate::model::filesystem::FileSystem;
use crate::model::surface::{EditingSurface, SurfaceStyle};
use std::path::Path;
use std::sync::Arc;

/// Index of the Welcome tab in the navigation order
pub const WELCOME_INDEX: usize = 0;

/// Title of the Welcome tab
pub const WELCOME_TITLE: &str = "Welcome";

/// A file tab. Label and dirty marker are derived from the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub buffer: BufferId,
}

/// What the tab bar shows for one entry of the navigation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    pub title: String,
    pub dirty: bool,
    pub active: bool,
}

impl TabLabel {
    /// Title with the ` *` dirty marker
    pub fn text(&self) -> String {
        if self.dirty {
            format!("{} *", self.title)
        } else {
            self.title.clone()
        }
    }
}

/// Result of a close request, used for user feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The Welcome tab cannot close; its placeholder was restored
    WelcomeReset,
    Closed { title: String },
    /// Index out of range, or Welcome while another tab was active
    Ignored,
}

pub struct TabController {
    store: BufferStore,
    surface: EditingSurface,
    tabs: Vec<Tab>,
    active_index: usize,
    welcome_text: String,
    fs: Arc<dyn FileSystem>,
}

impl std::fmt::Debug for TabController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabController")
            .field("tabs", &self.tabs)
            .field("active_index", &self.active_index)
            .field("surface", &self.surface)
            .finish()
    }
}

impl TabController {
    pub fn new(fs: Arc<dyn FileSystem>, welcome_text: String, style: SurfaceStyle) -> Self {
        let mut surface = EditingSurface::new(style);
        surface.set_text(&welcome_text);

        Self {
            store: BufferStore::new(),
            surface,
            tabs: Vec::new(),
            active_index: WELCOME_INDEX,
            welcome_text,
            fs,
        }
    }

    /// Create an untitled buffer in a new tab and switch to it
    pub fn create_tab(&mut self) -> BufferId {
        let id = self.store.new_buffer();
        self.tabs.push(Tab { buffer: id });
        self.switch_to(self.tabs.len());
        id
    }

    /// Open `path` in a tab, or switch to the tab that already shows it
    ///
    /// On failure nothing changes: no tab, no buffer, same active tab.
    pub fn open_tab(&mut self, path: &Path) -> Result<BufferId, LoadError> {
        let id = self.store.load(self.fs.as_ref(), path)?;

        match self.tab_index_of(id) {
            Some(index) => {
                tracing::debug!("{} already open in tab {}", path.display(), index);
                self.switch_to(index);
            }
            None => {
                self.tabs.push(Tab { buffer: id });
                self.switch_to(self.tabs.len());
            }
        }
        Ok(id)
    }

    /// Make the entry at `index` of the navigation order active
    pub fn switch_to(&mut self, index: usize) {
        if index > self.tabs.len() {
            tracing::warn!(
                "Ignoring switch to tab {} ({} tabs open)",
                index,
                self.tabs.len()
            );
            return;
        }
        if index == self.active_index {
            return;
        }

        self.flush();
        self.load_into_surface(index);
    }

    /// Move `direction` steps through the navigation order, wrapping around
    pub fn navigate(&mut self, direction: isize) {
        let len = self.tabs.len() + 1;
        if len < 2 {
            return;
        }
        let target = (self.active_index as isize + direction).rem_euclid(len as isize) as usize;
        self.switch_to(target);
    }

    pub fn close_active(&mut self) -> CloseOutcome {
        self.close_tab(self.active_index)
    }

    /// Close the entry at `index` of the navigation order
    ///
    /// Closing the active file tab activates the first remaining file tab, or
    /// Welcome when none remain. The closed buffer is never flushed.
    pub fn close_tab(&mut self, index: usize) -> CloseOutcome {
        if index == WELCOME_INDEX {
            if self.active_index != WELCOME_INDEX {
                return CloseOutcome::Ignored;
            }
            self.surface.set_text(&self.welcome_text);
            return CloseOutcome::WelcomeReset;
        }
        if index > self.tabs.len() {
            tracing::warn!("Ignoring close of tab {} ({} tabs open)", index, self.tabs.len());
            return CloseOutcome::Ignored;
        }

        let tab = self.tabs.remove(index - 1);
        let title = self
            .store
            .buffer(tab.buffer)
            .map(|b| b.display_name().to_string())
            .unwrap_or_default();
        self.store.close(tab.buffer);
        tracing::debug!("Closed tab {} ({})", index, title);

        if index == self.active_index {
            let successor = if self.tabs.is_empty() { WELCOME_INDEX } else { 1 };
            self.load_into_surface(successor);
        } else if index < self.active_index {
            self.active_index -= 1;
        }

        CloseOutcome::Closed { title }
    }

    /// Write the surface back into the active buffer. No-op on Welcome.
    pub fn flush(&mut self) {
        let Some(id) = self.active_buffer_id() else {
            return;
        };
        let text = self.surface.text();
        self.store.write_back(id, &text);
        self.store.remember_cursor(id, self.surface.cursor());
    }

    fn load_into_surface(&mut self, index: usize) {
        let buffer = index
            .checked_sub(1)
            .and_then(|i| self.tabs.get(i))
            .map(|tab| tab.buffer);

        match buffer.map(|id| (id, self.store.buffer(id))) {
            Some((_, Some(buffer))) => {
                self.surface.set_text(buffer.content());
                self.surface.set_cursor(buffer.cursor());
                self.active_index = index;
            }
            Some((id, None)) => {
                tracing::warn!("Tab {} refers to missing {}, showing Welcome", index, id);
                self.surface.set_text(&self.welcome_text);
                self.active_index = WELCOME_INDEX;
            }
            None => {
                self.surface.set_text(&self.welcome_text);
                self.active_index = WELCOME_INDEX;
            }
        }
        tracing::debug!("Active tab is now {}", self.active_index);
    }

    fn tab_index_of(&self, id: BufferId) -> Option<usize> {
        self.tabs
            .iter()
            .position(|tab| tab.buffer == id)
            .map(|pos| pos + 1)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_buffer_id(&self) -> Option<BufferId> {
        self.active_index
            .checked_sub(1)
            .and_then(|i| self.tabs.get(i))
            .map(|tab| tab.buffer)
    }

    /// Buffer shown in the surface, `None` on Welcome
    pub fn active_buffer(&self) -> Option<&Buffer> {
        self.active_buffer_id().and_then(|id| self.store.buffer(id))
    }

    /// Number of file tabs (Welcome not counted)
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// True when the surface holds edits not yet written back
    pub fn is_active_modified(&self) -> bool {
        self.active_buffer()
            .is_some_and(|buffer| buffer.content() != self.surface.text())
    }

    /// Labels in navigation order, Welcome first
    pub fn labels(&self) -> Vec<TabLabel> {
        let mut labels = Vec::with_capacity(self.tabs.len() + 1);
        labels.push(TabLabel {
            title: WELCOME_TITLE.to_string(),
            dirty: false,
            active: self.active_index == WELCOME_INDEX,
        });

        let surface_modified = self.is_active_modified();
        for (i, tab) in self.tabs.iter().enumerate() {
            let active = self.active_index == i + 1;
            let (title, dirty) = match self.store.buffer(tab.buffer) {
                Some(buffer) => (
                    buffer.display_name().to_string(),
                    buffer.is_dirty() || (active && surface_modified),
                ),
                None => (WELCOME_TITLE.to_string(), false),
            };
            labels.push(TabLabel {
                title,
                dirty,
                active,
            });
        }
        labels
    }

    pub fn surface(&self) -> &EditingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut EditingSurface {
        &mut self.surface
    }

    pub fn store(&self) -> &BufferStore {
        &self.store
    }

    pub fn welcome_text(&self) -> &str {
        &self.welcome_text
    }
}
