//! # Footer Component
//!
//! Two rows at the bottom of the slide view:
//!
//! ```text
//!  Ada Lovelace 2025-05-11                              Slide 3 / 12
//!  n:Next | p:Previous | f:First | l:Last | s:Notes | h:Help | q:Quit
//! ```
//!
//! The hint row is built from `KEY_BINDINGS`, same as the help screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::render::KeyBinding;
use crate::tui::component::Component;

pub const HEIGHT: u16 = 2;

pub struct Footer {
    /// Author and date, left-aligned
    pub byline: String,
    /// `"Slide i / n"`, right-aligned
    pub counter: String,
    pub hint: String,
    pub accent: Color,
}

impl Footer {
    pub fn new(byline: String, counter: String, bindings: &[KeyBinding], accent: Color) -> Self {
        Self {
            byline,
            counter,
            hint: hint_line(bindings),
            accent,
        }
    }
}

/// `"n:Next | p:Previous | ..."`, using the first key of each binding.
pub fn hint_line(bindings: &[KeyBinding]) -> String {
    bindings
        .iter()
        .map(|b| {
            let key = b.keys.split(',').next().unwrap_or(b.keys).trim();
            format!("{key}:{}", b.short)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [status, hint] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let counter_width = self.counter.width() as u16;
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(counter_width + 1)])
                .areas(status);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", self.byline),
                Style::default().fg(self.accent),
            )),
            left,
        );
        frame.render_widget(
            Paragraph::new(Line::from(self.counter.as_str()).right_aligned()),
            right,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", self.hint),
                Style::default().fg(Color::DarkGray),
            )),
            hint,
        );
    }
}
