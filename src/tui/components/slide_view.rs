//! # SlideView Component
//!
//! Draws the body of the current slide: markdown blocks through
//! [`markdown::render`], fenced code through [`markdown::code_block`].
//! Note blocks are skipped here; they belong to `NotesPanel`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::render::{BlockKind, ContentBlock};
use crate::tui::component::Component;
use crate::tui::markdown::{self, MarkdownStyle};

pub struct SlideView<'a> {
    pub blocks: &'a [ContentBlock<'a>],
    pub style: &'a MarkdownStyle,
}

impl<'a> SlideView<'a> {
    pub fn new(blocks: &'a [ContentBlock<'a>], style: &'a MarkdownStyle) -> Self {
        Self { blocks, style }
    }

    /// Styled text for all body blocks, one blank line between blocks.
    fn text(&self) -> Text<'static> {
        let mut text = Text::default();
        for block in self.blocks {
            let rendered = match block.kind {
                BlockKind::Markdown => markdown::render(block.text, self.style),
                BlockKind::Code { lang } => markdown::code_block(block.text, lang, self.style),
                BlockKind::Note | BlockKind::KeyBinding { .. } => continue,
            };
            if !text.lines.is_empty() {
                text.lines.push(Line::default());
            }
            text.lines.extend(rendered.lines);
        }
        text
    }
}

impl Component for SlideView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.text())
            .block(Block::new().padding(Padding::new(4, 4, 1, 0)))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
