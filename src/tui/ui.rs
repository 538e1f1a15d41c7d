use log::warn;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Color;

use crate::core::config::{DEFAULT_ACCENT, ResolvedConfig};
use crate::core::render::{BlockKind, KEY_BINDINGS, RenderPlan};
use crate::tui::component::Component;
use crate::tui::components::{Footer, HelpOverlay, NotesPanel, SlideView, TitleBar, footer};
use crate::tui::markdown::MarkdownStyle;

/// Presentation-wide drawing settings, resolved once from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub style: MarkdownStyle,
    /// Left side of the footer: author and date.
    pub byline: String,
    pub show_footer: bool,
}

impl Chrome {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let accent = parse_color(&config.accent);
        let byline = match &config.author {
            Some(author) => format!("{author} {}", config.date),
            None => config.date.clone(),
        };
        Self {
            style: MarkdownStyle::new(accent, &config.code_theme),
            byline,
            show_footer: config.show_footer,
        }
    }
}

fn parse_color(name: &str) -> Color {
    name.parse().unwrap_or_else(|_| {
        warn!("Unknown accent color {:?}, using {}", name, DEFAULT_ACCENT);
        Color::LightCyan
    })
}

pub fn draw_ui(frame: &mut Frame, plan: &RenderPlan<'_>, chrome: &Chrome) {
    let blocks = plan.blocks();
    let accent = chrome.style.accent;

    let (title, counter) = match plan {
        RenderPlan::ShowHelp { .. } => {
            HelpOverlay::new(&blocks, accent).render(frame, frame.area());
            return;
        }
        RenderPlan::ShowSlide { title, .. } => (*title, plan.counter().unwrap_or_default()),
    };

    let notes: Vec<&str> = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Note)
        .map(|b| b.text)
        .collect();
    let mut notes_panel = (!notes.is_empty()).then(|| NotesPanel::new(notes, accent));

    let area = frame.area();
    let notes_height = notes_panel
        .as_ref()
        .map_or(0, |panel| panel.required_height(area.width));
    let footer_height = if chrome.show_footer { footer::HEIGHT } else { 0 };

    let [title_area, body_area, notes_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(notes_height),
        Constraint::Length(footer_height),
    ])
    .areas(area);

    TitleBar::new(title, accent).render(frame, title_area);
    SlideView::new(&blocks, &chrome.style).render(frame, body_area);
    if let Some(panel) = notes_panel.as_mut() {
        panel.render(frame, notes_area);
    }
    if chrome.show_footer {
        Footer::new(chrome.byline.clone(), counter, KEY_BINDINGS, accent).render(frame, footer_area);
    }
}
