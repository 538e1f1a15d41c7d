//! Markdown → ratatui `Text` renderer.
//!
//! Thin wrapper around `pulldown_cmark` that converts a slide's markdown into
//! styled `Line`/`Span` values: headings, emphasis, inline code, lists,
//! blockquotes, links, and code blocks highlighted with syntect.
//!
//! Fenced code normally arrives here already split out by the render
//! dispatcher and goes through [`code_block`]; indented code blocks still
//! pass through the event writer and share the same box drawing.

use std::sync::LazyLock;

use log::warn;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::core::config::DEFAULT_CODE_THEME;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const H1_MARKER: &str = "■ ";
const TAB: &str = "    ";

/// Colors and code theme used for slide content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownStyle {
    pub base_fg: Color,
    pub accent: Color,
    /// Name of a syntect theme from the bundled defaults.
    pub code_theme: String,
}

impl Default for MarkdownStyle {
    fn default() -> Self {
        Self {
            base_fg: Color::Reset,
            accent: Color::LightCyan,
            code_theme: DEFAULT_CODE_THEME.to_string(),
        }
    }
}

impl MarkdownStyle {
    /// Builds a style, falling back to the default theme for unknown names.
    pub fn new(accent: Color, code_theme: &str) -> Self {
        let code_theme = if THEME_SET.themes.contains_key(code_theme) {
            code_theme.to_string()
        } else {
            warn!(
                "Unknown code theme {:?}, falling back to {}",
                code_theme, DEFAULT_CODE_THEME
            );
            DEFAULT_CODE_THEME.to_string()
        };
        Self {
            base_fg: Color::Reset,
            accent,
            code_theme,
        }
    }

    fn theme(&self) -> Option<&'static Theme> {
        THEME_SET.themes.get(&self.code_theme)
    }
}

/// Parse markdown content into styled `Text`.
///
/// Returns owned text (`'static`) so callers aren't constrained by input lifetime.
pub fn render(content: &str, style: &MarkdownStyle) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);

    let mut w = Writer::new(style);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.text
}

/// Render a fenced code block as a bordered, highlighted box.
pub fn code_block(code: &str, lang: &str, style: &MarkdownStyle) -> Text<'static> {
    Text::from(code_lines(code, lang, style))
}

/// Top border, `│ `-prefixed code lines, bottom border.
fn code_lines(code: &str, lang: &str, style: &MarkdownStyle) -> Vec<Line<'static>> {
    let bs = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    lines.push(if lang.is_empty() {
        Line::from(Span::styled("╭──", bs))
    } else {
        Line::from(vec![
            Span::styled("╭── ", bs),
            Span::styled(lang.to_owned(), bs.add_modifier(Modifier::BOLD)),
            Span::styled(" ──", bs),
        ])
    });

    let highlighter = (!lang.is_empty())
        .then(|| SYNTAX_SET.find_syntax_by_token(lang))
        .flatten()
        .zip(style.theme())
        .map(|(syntax, theme)| HighlightLines::new(syntax, theme));

    match highlighter {
        Some(mut hl) => {
            for line in LinesWithEndings::from(code) {
                let mut spans = vec![Span::styled("│ ", bs)];
                match hl.highlight_line(line, &SYNTAX_SET) {
                    Ok(ranges) => spans.extend(ranges.into_iter().filter_map(|(hl_style, frag)| {
                        let content = frag.trim_end_matches(['\n', '\r']).replace('\t', TAB);
                        if content.is_empty() {
                            return None;
                        }
                        let fg = hl_style.foreground;
                        Some(Span::styled(content, Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b))))
                    })),
                    Err(e) => {
                        warn!("Highlighting failed for {lang}: {e}");
                        spans.push(plain_code_span(line));
                    }
                }
                lines.push(Line::from(spans));
            }
        }
        None => {
            for line in code.lines() {
                lines.push(Line::from(vec![Span::styled("│ ", bs), plain_code_span(line)]));
            }
        }
    }

    lines.push(Line::from(Span::styled("╰──", bs)));
    lines
}

fn plain_code_span(line: &str) -> Span<'static> {
    let content = line.trim_end_matches(['\n', '\r']).replace('\t', TAB);
    Span::styled(content, Style::default().fg(Color::LightGreen))
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer<'s> {
    text: Text<'static>,
    style: &'s MarkdownStyle,
    /// Inline style stack (bold, italic, heading text, etc.). Styles compose
    /// via `patch` so nested bold+italic works.
    styles: Vec<Style>,
    /// Per-line prefix spans (blockquote `│`).
    line_prefixes: Vec<Span<'static>>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    /// Open code block: language and collected source.
    code: Option<(String, String)>,
    /// Stored link URL, appended after the link text closes.
    link_url: Option<String>,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl<'s> Writer<'s> {
    fn new(style: &'s MarkdownStyle) -> Self {
        Self {
            text: Text::default(),
            style,
            styles: vec![],
            line_prefixes: vec![],
            list_indices: vec![],
            code: None,
            link_url: None,
            needs_newline: false,
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────

    /// Current effective style: top of stack, or base foreground color.
    fn current_style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.style.base_fg))
    }

    /// Push a style that composes with the current one (inherits parent modifiers).
    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.current_style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    // ── Line/span helpers ───────────────────────────────────────────────

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        for pfx in self.line_prefixes.iter().rev().cloned() {
            out.spans.insert(0, pfx);
        }
        self.text.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    // ── Event dispatch ──────────────────────────────────────────────────

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => self.inline_code(c),
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_newline = true;
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.push_span(Span::raw(marker));
            }
            _ => {} // HTML, footnotes, math
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.blank_line_if_needed();
                let hs = heading_style(self.style, level);
                let line = if level == HeadingLevel::H1 {
                    Line::from(Span::styled(H1_MARKER, hs))
                } else {
                    Line::default()
                };
                self.push_line(line);
                self.push_style(hs);
            }
            Tag::BlockQuote(_) => {
                self.blank_line_if_needed();
                self.line_prefixes
                    .push(Span::styled("│ ", Style::default().fg(self.style.accent)));
                self.push_style(Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC));
            }
            Tag::CodeBlock(kind) => {
                self.blank_line_if_needed();
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .unwrap_or_default()
                        .to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code = Some((lang, String::new()));
            }
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                self.push_line(Line::default());
                let depth = self.list_indices.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                let accent = self.style.accent;
                if let Some(idx) = self.list_indices.last_mut() {
                    let marker = match idx {
                        None => format!("{indent}• "),
                        Some(n) => {
                            let s = format!("{indent}{n}. ");
                            *n += 1;
                            s
                        }
                    };
                    self.push_span(Span::styled(marker, Style::default().fg(accent)));
                }
            }

            // ── Inline elements ─────────────────────────────────────────
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            _ => {} // Tables, images, definitions
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.needs_newline = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::BlockQuote(_) => {
                self.line_prefixes.pop();
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                if let Some((lang, source)) = self.code.take() {
                    for line in code_lines(&source, &lang, self.style) {
                        self.push_line(line);
                    }
                }
                self.needs_newline = true;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                self.needs_newline = true;
            }
            TagEnd::Item => {}
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    self.push_span(Span::raw(" ("));
                    self.push_span(Span::styled(
                        url,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::UNDERLINED),
                    ));
                    self.push_span(Span::raw(")"));
                }
            }
            _ => {}
        }
    }

    // ── Content handlers ────────────────────────────────────────────────

    fn text(&mut self, cow: CowStr<'_>) {
        if let Some((_, source)) = self.code.as_mut() {
            source.push_str(&cow);
            return;
        }

        // ratatui renders \t as zero-width
        let text = cow.replace('\t', TAB);
        let style = self.current_style();
        self.push_span(Span::styled(text, style));
    }

    fn inline_code(&mut self, cow: CowStr<'_>) {
        let style = Style::default().fg(Color::LightGreen);
        self.push_span(Span::styled(cow.to_string(), style));
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn heading_style(style: &MarkdownStyle, level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(style.accent)
            .add_modifier(Modifier::BOLD),
        HeadingLevel::H2 => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        HeadingLevel::H3 => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(style.base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}
