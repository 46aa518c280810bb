//! Status bar at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::state::AppState;

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;

    // Helper to create a keybind badge
    let badge = |key: &str| -> Span {
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(t.bg_dark)
                .bg(t.accent)
                .add_modifier(Modifier::BOLD),
        )
    };
    let dim =
        |text: &str| -> Span { Span::styled(text.to_string(), Style::default().fg(t.text_dim)) };

    let mut spans = vec![
        Span::raw(" "),
        badge("q"),
        dim(" Quit "),
        badge("Tab"),
        dim(" Switch "),
        badge("1-5"),
        dim(" Panel "),
        badge("T"),
        dim(&format!(" Theme: {} ", t.name)),
        badge("?"),
        dim(" Help "),
    ];

    // Transient status message (e.g. theme change) -- auto-expires
    if let Some(msg) = state.active_status() {
        spans.push(Span::styled(
            format!("  {} ", msg),
            Style::default().fg(t.warning).add_modifier(Modifier::BOLD),
        ));
    }

    // Right-hand summary: process count + live readings
    spans.push(Span::styled(
        format!(
            "  {} processes │ CPU: {:.0}% │ Memory: {:.0}%",
            state.processes.len(),
            state.metrics.cpu_usage,
            state.metrics.memory_usage
        ),
        Style::default().fg(t.text_muted),
    ));

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
