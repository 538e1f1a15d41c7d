//! # HelpOverlay Component
//!
//! Full-screen key reference, drawn instead of the slide while help is
//! toggled on. Rows come from the shared `KEY_BINDINGS` table.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::render::{BlockKind, ContentBlock};
use crate::tui::component::Component;

const TITLE: &str = "TERMSLIDES HELP";
const DISMISS_HINT: &str = "Press h to return to the presentation";

pub struct HelpOverlay<'a> {
    /// `BlockKind::KeyBinding` rows; anything else is ignored.
    pub rows: &'a [ContentBlock<'a>],
    pub accent: Color,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(rows: &'a [ContentBlock<'a>], accent: Color) -> Self {
        Self { rows, accent }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let bindings: Vec<(&str, &str)> = self
            .rows
            .iter()
            .filter_map(|row| match row.kind {
                BlockKind::KeyBinding { keys } => Some((keys, row.text)),
                _ => None,
            })
            .collect();
        let key_width = bindings.iter().map(|(k, _)| k.width()).max().unwrap_or(0);

        let mut lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::default(),
            Line::from(Span::styled(
                "KEY CONTROLS:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for (keys, description) in bindings {
            let pad = " ".repeat(key_width - keys.width());
            lines.push(Line::from(vec![
                Span::styled(keys, Style::default().fg(self.accent)),
                Span::raw(format!("{pad} : ")),
                Span::raw(description),
            ]));
        }
        lines
    }
}

impl Component for HelpOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let height = lines.len() as u16;

        let [body, _, hint] = Layout::vertical([
            Constraint::Length(height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);
        let [body] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(body);

        frame.render_widget(Paragraph::new(lines), body);
        frame.render_widget(
            Paragraph::new(Span::styled(DISMISS_HINT, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
            hint,
        );
    }
}
