//! # Document Model
//!
//! The parsed presentation. Built once by [`crate::core::parser::parse`] and
//! read-only afterwards.
//!
//! ```text
//! Document
//! ├── title: String         // first `# Heading` of the first slide
//! └── slides: Vec<Slide>    // never empty
//!     ├── body: String      // markdown, note lines removed
//!     └── notes: Vec<String>
//! ```

/// Title used when the first slide has no level-1 heading.
pub const DEFAULT_TITLE: &str = "Presentation";

/// One displayable unit of the presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    /// Markdown source with speaker-note lines removed. Line terminators kept.
    pub body: String,
    /// Speaker notes in the order they appear in the source.
    pub notes: Vec<String>,
}

impl Slide {
    pub fn new(body: impl Into<String>, notes: Vec<String>) -> Self {
        Self {
            body: body.into(),
            notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    slides: Vec<Slide>,
}

impl Document {
    /// Builds a document from already-segmented slides.
    ///
    /// Returns `None` for an empty slide list: a document always has at
    /// least one slide, which is what keeps `NavigationState` indices valid.
    pub fn new(title: impl Into<String>, slides: Vec<Slide>) -> Option<Self> {
        let document = Self {
            title: title.into(),
            slides,
        };
        (!document.is_empty()).then_some(document)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }
}
