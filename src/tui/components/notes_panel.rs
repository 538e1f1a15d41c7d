//! # NotesPanel Component
//!
//! Bordered "Speaker Notes" box under the slide. Only built when notes are
//! visible and the slide has some.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

/// Upper bound so long notes never push the slide off screen.
const MAX_HEIGHT: u16 = 10;

pub struct NotesPanel<'a> {
    pub notes: Vec<&'a str>,
    pub accent: Color,
}

impl<'a> NotesPanel<'a> {
    pub fn new(notes: Vec<&'a str>, accent: Color) -> Self {
        Self { notes, accent }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let lines: Vec<Line<'a>> = self
            .notes
            .iter()
            .map(|note| {
                Line::from(vec![
                    Span::styled("› ", Style::default().fg(self.accent)),
                    Span::styled(*note, Style::default().add_modifier(Modifier::ITALIC)),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(" Speaker Notes ")
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title_style(Style::default().fg(self.accent))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: true })
    }

    /// Rows needed at `width`, borders included, capped at `MAX_HEIGHT`.
    pub fn required_height(&self, width: u16) -> u16 {
        let rows = self.paragraph().line_count(width);
        u16::try_from(rows).unwrap_or(u16::MAX).min(MAX_HEIGHT)
    }
}

impl Component for NotesPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(), area);
    }
}
