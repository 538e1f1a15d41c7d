//! termslides library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::document::{Document, Slide};
pub use crate::core::loader::{LoadError, load};
pub use crate::core::parser::{ParseError, parse};
