//! # TUI Components
//!
//! All widgets the viewer draws. Every component is stateless: props in,
//! pixels out. `ui::draw_ui` builds them fresh from the `RenderPlan` on each
//! frame.
//!
//! ```text
//! ┌──────────────── TitleBar ────────────────┐
//! │                                          │
//! │                SlideView                 │   or HelpOverlay
//! │                                          │   (whole area)
//! ├────────────── NotesPanel ────────────────┤   only when notes visible
//! └──────────────── Footer ──────────────────┘   unless show_footer = false
//! ```
//!
//! Components receive external data as props, not by reaching into global
//! state, so each one can be drawn against a `TestBackend` in isolation.

pub mod footer;
mod help_overlay;
mod notes_panel;
mod slide_view;
mod title_bar;

pub use footer::Footer;
pub use help_overlay::HelpOverlay;
pub use notes_panel::NotesPanel;
pub use slide_view::SlideView;
pub use title_bar::TitleBar;
