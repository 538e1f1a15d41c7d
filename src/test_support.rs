//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::core::document::{Document, Slide};

/// A deck of `n` slides titled "Slide 1".."Slide n", each with one note.
pub fn deck(n: usize) -> Document {
    let slides = (1..=n)
        .map(|i| Slide::new(format!("# Slide {i}\n"), vec![format!("note {i}")]))
        .collect();
    Document::new("Test Deck", slides).expect("deck needs at least one slide")
}

/// Flatten a rendered buffer into one string, rows joined with newlines.
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn backend_text(backend: &TestBackend) -> String {
    buffer_text(backend.buffer())
}
