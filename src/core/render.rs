//! # Render Dispatcher
//!
//! Decides *what* to show for the current navigation state. It never touches
//! the terminal: the TUI adapter turns a [`RenderPlan`] into widgets.
//!
//! ```text
//! (Document, NavigationState) → dispatch() → RenderPlan
//!                                              ├── ShowHelp  { key_bindings }
//!                                              └── ShowSlide { body, notes, 1-based index }
//! ```

use crate::core::document::Document;
use crate::core::parser::{BodyPart, split_code_blocks};
use crate::core::state::NavigationState;

/// One row of the key-binding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
    /// Label for the footer hint line.
    pub short: &'static str,
}

/// Shared by the help overlay and the footer hint line.
pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        keys: "n, Right, Space, PgDn",
        description: "Next slide",
        short: "Next",
    },
    KeyBinding {
        keys: "p, Left, PgUp",
        description: "Previous slide",
        short: "Previous",
    },
    KeyBinding {
        keys: "f, Home",
        description: "First slide",
        short: "First",
    },
    KeyBinding {
        keys: "l, End",
        description: "Last slide",
        short: "Last",
    },
    KeyBinding {
        keys: "s",
        description: "Toggle speaker notes",
        short: "Notes",
    },
    KeyBinding {
        keys: "h, ?",
        description: "Toggle this help screen",
        short: "Help",
    },
    KeyBinding {
        keys: "q, Esc, Ctrl+C",
        description: "Quit the presentation",
        short: "Quit",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPlan<'a> {
    ShowSlide {
        title: &'a str,
        body: &'a str,
        /// Empty unless notes are toggled on.
        notes: &'a [String],
        /// 1-based.
        slide_index: usize,
        total_slides: usize,
    },
    ShowHelp {
        key_bindings: &'static [KeyBinding],
    },
}

/// Semantic tag the drawing layer styles by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind<'a> {
    Markdown,
    Code { lang: &'a str },
    Note,
    KeyBinding { keys: &'a str },
}

/// A plain string plus what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBlock<'a> {
    pub kind: BlockKind<'a>,
    pub text: &'a str,
}

pub fn dispatch<'a>(document: &'a Document, state: &NavigationState) -> RenderPlan<'a> {
    if state.help_visible() {
        return RenderPlan::ShowHelp {
            key_bindings: KEY_BINDINGS,
        };
    }

    // Clamp in case the state was built for a different deck.
    let index = state.current_index().min(document.last_index());
    let slide = &document.slides()[index];
    let notes: &[String] = if state.notes_visible() {
        &slide.notes
    } else {
        &[]
    };

    RenderPlan::ShowSlide {
        title: document.title(),
        body: &slide.body,
        notes,
        slide_index: index + 1,
        total_slides: document.len(),
    }
}

impl<'a> RenderPlan<'a> {
    /// Flatten the plan into tagged strings in display order.
    pub fn blocks(&self) -> Vec<ContentBlock<'a>> {
        match *self {
            RenderPlan::ShowHelp { key_bindings } => key_bindings
                .iter()
                .map(|binding| ContentBlock {
                    kind: BlockKind::KeyBinding {
                        keys: binding.keys,
                    },
                    text: binding.description,
                })
                .collect(),
            RenderPlan::ShowSlide { body, notes, .. } => {
                let mut blocks: Vec<ContentBlock<'a>> = split_code_blocks(body)
                    .into_iter()
                    .map(|part| match part {
                        BodyPart::Markdown(text) => ContentBlock {
                            kind: BlockKind::Markdown,
                            text,
                        },
                        BodyPart::Code { lang, code } => ContentBlock {
                            kind: BlockKind::Code { lang },
                            text: code,
                        },
                    })
                    .collect();
                blocks.extend(notes.iter().map(|note| ContentBlock {
                    kind: BlockKind::Note,
                    text: note.as_str(),
                }));
                blocks
            }
        }
    }

    /// `"Slide 2 / 7"`, or `None` on the help screen.
    pub fn counter(&self) -> Option<String> {
        match self {
            RenderPlan::ShowSlide {
                slide_index,
                total_slides,
                ..
            } => Some(format!("Slide {slide_index} / {total_slides}")),
            RenderPlan::ShowHelp { .. } => None,
        }
    }
}
