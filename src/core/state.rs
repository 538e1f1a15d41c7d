//! # Navigation State
//!
//! Where the viewer currently is in the deck and which overlays are shown.
//!
//! ```text
//! NavigationState
//! ├── current_index: usize   // 0..slide_count, always in range
//! ├── slide_count: usize     // fixed at creation, >= 1
//! ├── notes_visible: bool    // speaker notes panel
//! └── help_visible: bool     // help overlay replaces the slide view
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Fields are private so the index invariant cannot be broken from outside.

use crate::core::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub(super) current_index: usize,
    slide_count: usize,
    pub(super) notes_visible: bool,
    pub(super) help_visible: bool,
}

impl NavigationState {
    /// Start on the first slide with notes and help hidden.
    pub fn new(document: &Document) -> Self {
        Self {
            current_index: 0,
            slide_count: document.len(),
            notes_visible: false,
            help_visible: false,
        }
    }

    /// Start with the notes panel already open.
    pub fn with_notes_visible(mut self, visible: bool) -> Self {
        self.notes_visible = visible;
        self
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    pub fn notes_visible(&self) -> bool {
        self.notes_visible
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.last_index()
    }
}
