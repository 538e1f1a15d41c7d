//! # Actions
//!
//! Everything the viewer can be asked to do becomes an `Action`.
//! User presses `n`? That's `Action::Next`. `h`? `Action::ToggleHelp`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` telling the event loop
//! what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every transition is total: stepping past either end of the deck is a
//! no-op, never an error.

use log::debug;

use crate::core::state::NavigationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    First,
    Last,
    ToggleNotes,
    ToggleHelp,
    Quit,
}

/// What the event loop should do after an `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; draw a new frame.
    Redraw,
    /// Leave the event loop.
    Quit,
}

pub fn update(state: &mut NavigationState, action: Action) -> Effect {
    let before = *state;

    match action {
        Action::Next => {
            if !state.is_last() {
                state.current_index += 1;
            }
        }
        Action::Previous => {
            if !state.is_first() {
                state.current_index -= 1;
            }
        }
        Action::First => state.current_index = 0,
        Action::Last => state.current_index = state.last_index(),
        // Suppressed while the help overlay is up.
        Action::ToggleNotes if state.help_visible => {}
        Action::ToggleNotes => state.notes_visible = !state.notes_visible,
        Action::ToggleHelp => state.help_visible = !state.help_visible,
        Action::Quit => return Effect::Quit,
    }

    if *state == before {
        Effect::None
    } else {
        debug!(
            "{:?}: slide {}/{}, notes={}, help={}",
            action,
            state.current_index + 1,
            state.slide_count(),
            state.notes_visible,
            state.help_visible
        );
        Effect::Redraw
    }
}
