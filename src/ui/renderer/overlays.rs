//! Popup overlays. Only the help overlay exists today.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{HELP_POPUP_HEIGHT, HELP_POPUP_WIDTH};
use crate::ui::state::AppState;

use super::helpers::centered_rect;

pub fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let popup = centered_rect(HELP_POPUP_WIDTH, HELP_POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let key = |k: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), Style::default().fg(t.accent)),
            Span::styled(desc.to_string(), Style::default().fg(t.text_primary)),
        ])
    };
    let section = |title: &str| -> Line {
        Line::from(Span::styled(
            format!(" {}", title),
            Style::default().fg(t.text_dim).add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![
        Line::default(),
        section("Panels"),
        key("1", "CPU"),
        key("2", "Memory"),
        key("3", "Energy"),
        key("4", "Disk"),
        key("5", "Network"),
        key("Tab", "Next panel"),
        key("Shift+Tab", "Previous panel"),
        key("Click", "Select panel on the tab strip"),
        Line::default(),
        section("Display"),
        key("T", "Cycle theme"),
        Line::default(),
        section("General"),
        key("?", "Toggle this help"),
        key("q / Esc", "Quit"),
        key("Ctrl+C", "Quit"),
    ];

    let visible = popup.height.saturating_sub(2) as usize;
    let scroll = state.help_scroll.min(lines.len().saturating_sub(visible));

    let help = Paragraph::new(lines)
        .scroll((scroll as u16, 0))
        .block(
            Block::default()
                .title(Span::styled(" Help ", t.header_style()))
                .borders(Borders::ALL)
                .border_style(t.border_style()),
        );
    frame.render_widget(help, popup);
}
