//! # Slide Parser
//!
//! Splits raw markdown into a [`Document`].
//!
//! The scanner walks the source one line at a time with a two-state machine:
//!
//! ```text
//!            opening fence (``` / ~~~)
//!   Normal ───────────────────────────▶ InFence
//!     ▲                                    │
//!     └──────── matching closing fence ────┘
//! ```
//!
//! Only in `Normal` are separators (`---`) and note lines (`?> ...`)
//! recognised. Everything inside a fence, delimiters included, is body text.
//!
//! Blank lines touching a separator are part of the separator, so
//! `"# A\n\n---\n\n# B\n"` yields bodies `"# A\n"` and `"# B\n"`.

use std::fmt;

use log::{debug, info};

use crate::core::document::{DEFAULT_TITLE, Document, Slide};

const NOTE_MARKER: &str = "?>";
const MIN_FENCE_LEN: usize = 3;
const MIN_RULE_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source contains no non-blank segment.
    EmptyDocument,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyDocument => write!(f, "document contains no slides"),
        }
    }
}

impl std::error::Error for ParseError {}

/// An open code fence: which character opened it and how long the run was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InFence(Fence),
}

/// What a single line means given the current scan state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Separator,
    Note(&'a str),
    FenceOpen(Fence),
    FenceClose,
    Text,
}

/// A source line kept for slide assembly.
#[derive(Debug, Clone, Copy)]
struct ScannedLine<'a> {
    /// The line including its terminator.
    raw: &'a str,
    kind: LineKind<'a>,
    /// Inside a fence or a fence delimiter.
    fenced: bool,
}

impl ScannedLine<'_> {
    fn is_blank(&self) -> bool {
        !self.fenced && self.raw.trim().is_empty()
    }
}

type Segment<'a> = Vec<ScannedLine<'a>>;

/// Parse a markdown source into slides.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let segments = split_segments(source);

    // Drop blank segments produced by a leading or trailing separator.
    let first = segments.iter().position(|s| !is_blank_segment(s));
    let last = segments.iter().rposition(|s| !is_blank_segment(s));
    let (Some(first), Some(last)) = (first, last) else {
        return Err(ParseError::EmptyDocument);
    };
    let kept = &segments[first..=last];

    let title = kept
        .first()
        .and_then(find_title)
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let slides: Vec<Slide> = kept.iter().map(build_slide).collect();
    info!("Parsed {} slide(s), title {:?}", slides.len(), title);

    Document::new(title, slides).ok_or(ParseError::EmptyDocument)
}

/// Scan the source and cut it at separator lines.
///
/// Blank lines adjacent to a separator are dropped from both neighbours.
fn split_segments(source: &str) -> Vec<Segment<'_>> {
    let mut segments: Vec<Segment<'_>> = Vec::new();
    let mut current: Segment<'_> = Vec::new();
    let mut state = ScanState::Normal;
    let mut after_separator = false;

    for raw in source.split_inclusive('\n') {
        let (kind, next_state) = classify(strip_terminator(raw), state);
        let fenced = !matches!(state, ScanState::Normal) || matches!(kind, LineKind::FenceOpen(_));
        state = next_state;

        if kind == LineKind::Separator {
            trim_trailing_blanks(&mut current);
            segments.push(std::mem::take(&mut current));
            after_separator = true;
            continue;
        }

        let line = ScannedLine { raw, kind, fenced };
        if after_separator && line.is_blank() {
            continue;
        }
        after_separator = false;
        current.push(line);
    }
    segments.push(current);

    if let ScanState::InFence(fence) = state {
        // Best-effort recovery: the rest of the document stays fenced.
        debug!(
            "Unclosed code fence ({}x{:?}) at end of document",
            fence.len, fence.marker
        );
    }

    segments
}

/// Decide what a line is and which state the scanner moves to.
fn classify(line: &str, state: ScanState) -> (LineKind<'_>, ScanState) {
    match state {
        ScanState::InFence(fence) => {
            if closes_fence(line, fence) {
                (LineKind::FenceClose, ScanState::Normal)
            } else {
                (LineKind::Text, state)
            }
        }
        ScanState::Normal => {
            if let Some(fence) = detect_fence_start(line) {
                (LineKind::FenceOpen(fence), ScanState::InFence(fence))
            } else if is_separator(line) {
                (LineKind::Separator, state)
            } else if let Some(note) = note_text(line) {
                (LineKind::Note(note), state)
            } else {
                (LineKind::Text, state)
            }
        }
    }
}

fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

/// `^\s*-{3,}\s*$`
fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= MIN_RULE_LEN && trimmed.chars().all(|c| c == '-')
}

/// `^\s*\?>\s?(.*)$`, returning the captured note text.
fn note_text(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(NOTE_MARKER)?;
    Some(rest.strip_prefix([' ', '\t']).unwrap_or(rest))
}

fn indent_width(line: &str) -> (usize, &str) {
    let mut width = 0;
    for (idx, c) in line.char_indices() {
        match c {
            ' ' => width += 1,
            '\t' => width += 4,
            _ => return (width, &line[idx..]),
        }
    }
    (width, "")
}

/// Fences may be indented any amount so that code nested in list items
/// still protects its contents from the separator rule.
fn detect_fence_start(line: &str) -> Option<Fence> {
    let rest = line.trim_start();
    let marker = rest.chars().next()?;
    if marker != '`' && marker != '~' {
        return None;
    }

    let len = rest.chars().take_while(|&c| c == marker).count();
    if len < MIN_FENCE_LEN {
        return None;
    }

    // A backtick info string may not contain backticks (that is inline code).
    let info = &rest[len..];
    if marker == '`' && info.contains('`') {
        return None;
    }

    Some(Fence { marker, len })
}

fn closes_fence(line: &str, fence: Fence) -> bool {
    let rest = line.trim_start();
    let len = rest.chars().take_while(|&c| c == fence.marker).count();
    len >= fence.len && rest[len..].trim().is_empty()
}

fn trim_trailing_blanks(segment: &mut Segment<'_>) {
    while segment.last().is_some_and(ScannedLine::is_blank) {
        segment.pop();
    }
}

fn is_blank_segment(segment: &Segment<'_>) -> bool {
    segment.iter().all(|line| line.raw.trim().is_empty())
}

fn build_slide(segment: &Segment<'_>) -> Slide {
    let mut body = String::new();
    let mut notes = Vec::new();

    for line in segment {
        match line.kind {
            LineKind::Note(text) => notes.push(text.to_string()),
            _ => body.push_str(line.raw),
        }
    }

    Slide::new(body, notes)
}

/// A run of slide body text, tagged by whether it sits inside a code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart<'a> {
    Markdown(&'a str),
    /// Fence contents without the delimiter lines. `lang` is the first word
    /// of the info string, empty when absent.
    Code { lang: &'a str, code: &'a str },
}

/// Cut a slide body into markdown and fenced-code runs, using the same
/// fence rules as the slide scanner. Whitespace-only markdown runs are
/// dropped; an unclosed fence runs to the end of the body.
pub fn split_code_blocks(body: &str) -> Vec<BodyPart<'_>> {
    let mut parts = Vec::new();
    let mut open: Option<(Fence, &str, usize)> = None;
    let mut markdown_start = 0;
    let mut offset = 0;

    for raw in body.split_inclusive('\n') {
        let line = strip_terminator(raw);
        let next = offset + raw.len();
        match open {
            Some((fence, lang, code_start)) => {
                if closes_fence(line, fence) {
                    parts.push(BodyPart::Code {
                        lang,
                        code: &body[code_start..offset],
                    });
                    open = None;
                    markdown_start = next;
                }
            }
            None => {
                if let Some(fence) = detect_fence_start(line) {
                    push_markdown(&mut parts, &body[markdown_start..offset]);
                    open = Some((fence, info_lang(line, fence), next));
                }
            }
        }
        offset = next;
    }

    match open {
        Some((_, lang, code_start)) => parts.push(BodyPart::Code {
            lang,
            code: &body[code_start..],
        }),
        None => push_markdown(&mut parts, &body[markdown_start..]),
    }

    parts
}

fn push_markdown<'a>(parts: &mut Vec<BodyPart<'a>>, text: &'a str) {
    if !text.trim().is_empty() {
        parts.push(BodyPart::Markdown(text));
    }
}

fn info_lang(line: &str, fence: Fence) -> &str {
    line.trim_start()[fence.len..].split_whitespace().next().unwrap_or("")
}

/// First level-1 ATX heading outside any fence.
fn find_title<'a>(segment: &Segment<'a>) -> Option<&'a str> {
    segment
        .iter()
        .filter(|line| !line.fenced && line.kind == LineKind::Text)
        .find_map(|line| {
            let (indent, rest) = indent_width(strip_terminator(line.raw));
            if indent > 3 {
                return None;
            }
            let heading = rest.strip_prefix('#')?;
            if !heading.starts_with(char::is_whitespace) {
                return None;
            }
            let heading = heading.trim().trim_end_matches('#').trim_end();
            (!heading.is_empty()).then_some(heading)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies(doc: &Document) -> Vec<&str> {
        doc.slides().iter().map(|s| s.body.as_str()).collect()
    }

    #[test]
    fn test_reference_example() {
        let doc = parse("# A\n\n?> note A\n\n---\n\n# B\n").unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.slides()[0].body, "# A\n\n");
        assert_eq!(doc.slides()[0].notes, vec!["note A"]);
        assert_eq!(doc.slides()[1].body, "# B\n");
        assert!(doc.slides()[1].notes.is_empty());
    }

    #[test]
    fn test_no_separator_is_single_slide() {
        let src = "# Only\n\nSome text\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.slides()[0].body, src);
    }

    #[test]
    fn test_empty_and_whitespace_input_fail() {
        assert_eq!(parse(""), Err(ParseError::EmptyDocument));
        assert_eq!(parse("  \n\t\n"), Err(ParseError::EmptyDocument));
        assert_eq!(parse("---\n\n---\n"), Err(ParseError::EmptyDocument));
    }

    #[test]
    fn test_leading_and_trailing_separators_are_discarded() {
        let doc = parse("---\n# A\n---\n# B\n---\n").unwrap();
        assert_eq!(bodies(&doc), vec!["# A\n", "# B\n"]);
    }

    #[test]
    fn test_separator_with_surrounding_whitespace_and_long_rule() {
        let doc = parse("one\n  -----  \ntwo\n").unwrap();
        assert_eq!(bodies(&doc), vec!["one\n", "two\n"]);
    }

    #[test]
    fn test_two_dashes_is_not_a_separator() {
        let doc = parse("one\n--\ntwo\n").unwrap();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_separator_inside_fence_does_not_split() {
        let src = "# Code\n\n```yaml\n---\nkey: value\n```\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.slides()[0].body, src);
    }

    #[test]
    fn test_note_marker_inside_fence_is_body() {
        let src = "```\n?> not a note\n```\n?> a note\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.slides()[0].body, "```\n?> not a note\n```\n");
        assert_eq!(doc.slides()[0].notes, vec!["a note"]);
    }

    #[test]
    fn test_tilde_fence_and_longer_closer() {
        let src = "~~~\n---\n~~~~\n---\nnext\n";
        let doc = parse(src).unwrap();
        assert_eq!(bodies(&doc), vec!["~~~\n---\n~~~~\n", "next\n"]);
    }

    #[test]
    fn test_shorter_run_does_not_close_fence() {
        let src = "````\n```\n---\n````\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_fence_nested_in_list_does_not_split() {
        let src = "- item\n\n    ```\n    ---\n    ```\n";
        let doc = parse(src).unwrap();
        assert_eq!(bodies(&doc), vec![src]);
    }

    #[test]
    fn test_nested_list_fence_then_real_separator() {
        let src = "- item\n\n      ~~~yaml\n      ---\n      ~~~\n---\nnext\n";
        let doc = parse(src).unwrap();
        assert_eq!(
            bodies(&doc),
            vec!["- item\n\n      ~~~yaml\n      ---\n      ~~~\n", "next\n"]
        );
    }

    #[test]
    fn test_bare_backticks_do_not_close_longer_fence() {
        let doc = parse("````\n---\n```\n---\nafter\n").unwrap();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_interior_blank_segment_is_an_empty_slide() {
        let doc = parse("a\n---\n\n---\nb\n").unwrap();
        assert_eq!(bodies(&doc), vec!["a\n", "", "b\n"]);
        assert!(doc.slides()[1].notes.is_empty());
    }

    #[test]
    fn test_unclosed_fence_swallows_rest_of_document() {
        let src = "intro\n```\n---\n?> inert\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.slides()[0].body, src);
        assert!(doc.slides()[0].notes.is_empty());
    }

    #[test]
    fn test_note_marker_strips_exactly_one_space() {
        let doc = parse("?>  indented\n  ?>tight\n?>\n").unwrap();
        assert_eq!(doc.slides()[0].notes, vec![" indented", "tight", ""]);
        assert_eq!(doc.slides()[0].body, "");
    }

    #[test]
    fn test_notes_keep_encounter_order() {
        let doc = parse("?> first\nbody\n?> second\n").unwrap();
        assert_eq!(doc.slides()[0].notes, vec!["first", "second"]);
        assert_eq!(doc.slides()[0].body, "body\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let doc = parse("# A\r\n?> n\r\n---\r\n# B\r\n").unwrap();
        assert_eq!(bodies(&doc), vec!["# A\r\n", "# B\r\n"]);
        assert_eq!(doc.slides()[0].notes, vec!["n"]);
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        let src = "- item\n    nested   \n\n\ttabbed\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.slides()[0].body, src);
    }

    #[test]
    fn test_title_from_first_heading() {
        let doc = parse("Intro\n# My Talk #\n---\n# Other\n").unwrap();
        assert_eq!(doc.title(), "My Talk");
    }

    #[test]
    fn test_title_after_tab_and_not_from_h2_or_hashtag() {
        assert_eq!(parse("#\tTabbed Title\n").unwrap().title(), "Tabbed Title");
        assert_eq!(parse("#hashtag\n## Sub\n").unwrap().title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_split_code_blocks_nested_fence() {
        let body = "- item\n\n    ```sh\n    ls\n    ```\n";
        assert_eq!(
            split_code_blocks(body),
            vec![
                BodyPart::Markdown("- item\n\n"),
                BodyPart::Code {
                    lang: "sh",
                    code: "    ls\n"
                },
            ]
        );
    }

    #[test]
    fn test_title_ignores_fenced_heading_and_defaults() {
        let doc = parse("```sh\n# comment\n```\n## Sub\n").unwrap();
        assert_eq!(doc.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_split_code_blocks() {
        let body = "# Demo\n\n```rust\nfn main() {}\n```\nafter\n";
        assert_eq!(
            split_code_blocks(body),
            vec![
                BodyPart::Markdown("# Demo\n\n"),
                BodyPart::Code {
                    lang: "rust",
                    code: "fn main() {}\n"
                },
                BodyPart::Markdown("after\n"),
            ]
        );
    }

    #[test]
    fn test_split_code_blocks_unclosed_and_untagged() {
        let body = "```\nx = 1\n";
        assert_eq!(
            split_code_blocks(body),
            vec![BodyPart::Code {
                lang: "",
                code: "x = 1\n"
            }]
        );
    }

    #[test]
    fn test_split_code_blocks_plain_markdown() {
        assert_eq!(
            split_code_blocks("just text\n"),
            vec![BodyPart::Markdown("just text\n")]
        );
        assert!(split_code_blocks("").is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let src = "# A\n?> n\n---\n```\n---\n```\n";
        assert_eq!(parse(src), parse(src));
    }
}
