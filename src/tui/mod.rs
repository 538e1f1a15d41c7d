//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, reads keys, feeds them to
//! `core::update`, and draws whatever `core::dispatch` selects.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded and blocking: wait for one event, apply it, redraw if the
//! state changed, repeat. There is no animation, so nothing is drawn while
//! the presenter is idle.
//!
//! ## Terminal State
//!
//! Raw mode and the alternate screen are held by [`TerminalGuard`]. Dropping
//! the guard restores the terminal, so every exit path (quit, `?` error,
//! panic unwinding) leaves the shell usable.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::info;
use std::io;

use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::document::Document;
use crate::core::render::dispatch;
use crate::core::state::NavigationState;
use crate::tui::event::{TuiEvent, read_event};

pub use event::map_key;
pub use ui::{Chrome, draw_ui};

/// Raw mode + alternate screen for as long as it lives.
struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        // Also installs a panic hook that restores the terminal first.
        let terminal = ratatui::try_init()?;
        info!("Terminal initialised (raw mode, alternate screen)");
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
        info!("Terminal restored");
    }
}

/// Present `document` until the user quits.
pub fn run(document: &Document, config: &ResolvedConfig) -> io::Result<()> {
    let chrome = Chrome::from_config(config);
    let mut state = NavigationState::new(document).with_notes_visible(config.notes_on_start);

    let mut guard = TerminalGuard::acquire()?;
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            let plan = dispatch(document, &state);
            guard.terminal.draw(|f| draw_ui(f, &plan, &chrome))?;
            needs_redraw = false;
        }

        match read_event()? {
            Some(TuiEvent::Action(action)) => match update(&mut state, action) {
                Effect::Quit => break,
                Effect::Redraw => needs_redraw = true,
                Effect::None => {}
            },
            Some(TuiEvent::Resize) => needs_redraw = true,
            None => {}
        }
    }

    info!(
        "Presentation ended on slide {}/{}",
        state.current_index() + 1,
        state.slide_count()
    );
    Ok(())
}
