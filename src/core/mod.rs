//! # Core Presentation Logic
//!
//! Everything termslides knows about slides and navigation.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!   raw markdown
//!        │
//!        ▼
//!   ┌──────────┐      ┌──────────────────────────┐
//!   │  parser  │ ───▶ │ Document (read-only)     │
//!   └──────────┘      └────────────┬─────────────┘
//!                                  │
//!   Action ─▶ update() ─▶ NavigationState
//!                                  │
//!                                  ▼
//!                     render::dispatch() ─▶ RenderPlan ─▶ TUI
//! ```
//!
//! No terminal I/O happens here. The only file access is in [`loader`] and
//! [`config`].
//!
//! ## Modules
//!
//! - [`document`]: `Document` and `Slide`
//! - [`parser`]: markdown → `Document`, fence-aware
//! - [`state`]: `NavigationState`, the current slide and overlays
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`render`]: pure selection of what to draw
//! - [`loader`]: file → `Document`
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod document;
pub mod loader;
pub mod parser;
pub mod render;
pub mod state;

// Re-export commonly used types for convenience
pub use action::{Action, Effect, update};
pub use document::{Document, Slide};
pub use render::{RenderPlan, dispatch};
pub use state::NavigationState;
