//! Renderer module: split into focused submodules.
//!
//! - `header`: Logo, tab strip, live summary
//! - `panels`: The five tab-selected detail panels
//! - `processes`: The static process table
//! - `status_bar`: Bottom status bar with keybinds and summary
//! - `overlays`: Help overlay
//! - `helpers`: Shared rendering utilities

mod header;
pub mod helpers;
mod overlays;
mod panels;
mod processes;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::state::AppState;

pub use header::tab_at_click;

/// Top-level render function. Delegates to sub-renderers.
pub fn render(frame: &mut Frame, state: &AppState) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header bar with tab strip
            Constraint::Length(10), // Active detail panel
            Constraint::Min(8),     // Process table
            Constraint::Length(1),  // Status bar
        ])
        .split(size);

    header::render_header(frame, main_chunks[0], state);
    panels::render_panel(frame, main_chunks[1], state);
    processes::render_processes(frame, main_chunks[2], state);
    status_bar::render_status_bar(frame, main_chunks[3], state);

    if state.show_help {
        overlays::render_help_overlay(frame, size, state);
    }
}
