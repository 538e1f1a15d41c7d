//! # TitleBar Component
//!
//! One-line header with the presentation title, centred.
//!
//! Purely presentational: it receives all data as props and has no internal
//! state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Rust in Production", Color::LightCyan);
//! title_bar.render(frame, area);
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Presentation title (first `# Heading` of the deck)
    pub title: String,
    pub accent: Color,
}

impl TitleBar {
    pub fn new(title: impl Into<String>, accent: Color) -> Self {
        Self {
            title: title.into(),
            accent,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title.as_str(),
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::backend_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_new() {
        let title_bar = TitleBar::new("Deck", Color::Cyan);
        assert_eq!(title_bar.title, "Deck");
        assert_eq!(title_bar.accent, Color::Cyan);
    }

    #[test]
    fn test_title_is_centred() {
        let backend = TestBackend::new(20, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::new("Deck", Color::Cyan);

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let text = backend_text(terminal.backend());
        assert_eq!(text, "        Deck        ");
        let cell = &terminal.backend().buffer()[(8, 0)];
        assert_eq!(cell.fg, Color::Cyan);
        assert!(cell.modifier.contains(Modifier::BOLD));
    }
}
