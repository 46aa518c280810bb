//! The five tab-selected detail panels.
//!
//! Exactly one renders per frame, picked by exhaustive match on the active
//! tab. Live readings come from the metric bundle; everything else is the
//! panel's fixed dressing.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::*;
use crate::ui::state::{AppState, Tab};
use crate::ui::widgets::{HistoryChart, UsageBar};

pub fn render_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.active_tab {
        Tab::Cpu => render_cpu_panel(frame, area, state),
        Tab::Memory => render_memory_panel(frame, area, state),
        Tab::Energy => render_energy_panel(frame, area, state),
        Tab::Disk => render_disk_panel(frame, area, state),
        Tab::Network => render_network_panel(frame, area, state),
    }
}

/// Bordered block for a panel, returning the interior area.
fn panel_block(frame: &mut Frame, area: Rect, state: &AppState, title: &str) -> Rect {
    let t = &state.theme;
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), t.header_style()))
        .borders(Borders::ALL)
        .border_style(t.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn render_cpu_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let m = &state.metrics;
    let inner = panel_block(frame, area, state, "CPU");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // headline
            Constraint::Length(1), // big value
            Constraint::Min(1),    // history chart
        ])
        .split(inner);

    let headline = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(30)])
        .split(chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "CPU Usage",
            Style::default().fg(t.text_primary).add_modifier(Modifier::BOLD),
        )),
        headline[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "System: {:>4.1}%  User: {:>4.1}%",
                m.system_cpu(),
                m.user_cpu()
            ),
            Style::default().fg(t.text_dim),
        ))
        .alignment(Alignment::Right),
        headline[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{:.1}%", m.cpu_usage),
            Style::default().fg(t.cpu_accent).add_modifier(Modifier::BOLD),
        )),
        chunks[1],
    );

    let samples: Vec<f32> = state.cpu_history.iter().collect();
    frame.render_widget(HistoryChart::new(&samples, t.cpu_accent, t), chunks[2]);
}

fn render_memory_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let m = &state.metrics;
    let inner = panel_block(frame, area, state, "Memory");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // headline
            Constraint::Length(1), // big value
            Constraint::Length(1), // spacer
            Constraint::Length(1), // app memory
            Constraint::Length(1), // wired memory
            Constraint::Length(1), // cached files
        ])
        .split(inner);

    let headline = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(40)])
        .split(chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Memory Pressure",
            Style::default().fg(t.text_primary).add_modifier(Modifier::BOLD),
        )),
        headline[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "Physical Memory: {:.0} GB  Used: {:.1} GB",
                PHYSICAL_MEMORY_GB,
                m.used_memory_gb()
            ),
            Style::default().fg(t.text_dim),
        ))
        .alignment(Alignment::Right),
        headline[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{:.0}%", m.memory_usage),
            Style::default().fg(t.mem_accent).add_modifier(Modifier::BOLD),
        )),
        chunks[1],
    );

    frame.render_widget(
        UsageBar::new(m.app_memory(), "App Memory  ", t.mem_accent, t),
        chunks[3],
    );
    frame.render_widget(
        UsageBar::new(m.wired_memory(), "Wired Memory", t.warning, t),
        chunks[4],
    );
    frame.render_widget(
        UsageBar::new(m.cached_files(), "Cached Files", t.success, t),
        chunks[5],
    );
}

fn render_energy_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let inner = panel_block(frame, area, state, "Energy");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // headline
            Constraint::Length(1), // impact badge
            Constraint::Length(1), // spacer
            Constraint::Length(1), // impact bar
            Constraint::Length(1), // battery remaining
        ])
        .split(inner);

    let headline = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Energy Impact",
            Style::default().fg(t.text_primary).add_modifier(Modifier::BOLD),
        )),
        headline[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Last 12 hours",
            Style::default().fg(t.text_dim),
        ))
        .alignment(Alignment::Right),
        headline[1],
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("⚡ ", Style::default().fg(t.energy_accent)),
            Span::styled(
                "Low",
                Style::default().fg(t.energy_accent).add_modifier(Modifier::BOLD),
            ),
        ])),
        chunks[1],
    );

    frame.render_widget(
        UsageBar::new(
            ENERGY_IMPACT_PCT,
            "Average Energy Impact",
            t.energy_accent,
            t,
        ),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Battery remaining: {}", BATTERY_REMAINING),
            Style::default().fg(t.text_muted),
        )),
        chunks[4],
    );
}

fn render_disk_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let m = &state.metrics;
    let inner = panel_block(frame, area, state, "Disk");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // headline
            Constraint::Length(1), // spacer
            Constraint::Length(1), // usage bar
            Constraint::Length(1), // capacity line
        ])
        .split(inner);

    let headline = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(34)])
        .split(chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Disk Activity",
            Style::default().fg(t.text_primary).add_modifier(Modifier::BOLD),
        )),
        headline[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "Read: {:.1} MB/s  Write: {:.1} MB/s",
                DISK_READ_MBPS, DISK_WRITE_MBPS
            ),
            Style::default().fg(t.text_dim),
        ))
        .alignment(Alignment::Right),
        headline[1],
    );

    frame.render_widget(
        UsageBar::new(m.disk_usage, "Disk Usage", t.disk_accent, t),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "{} GB available of {} GB",
                DISK_AVAILABLE_GB, DISK_TOTAL_GB
            ),
            Style::default().fg(t.text_muted),
        )),
        chunks[3],
    );
}

fn render_network_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let m = &state.metrics;
    let inner = panel_block(frame, area, state, "Network");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // headline
            Constraint::Length(1), // live rates
            Constraint::Length(1), // spacer
            Constraint::Length(2), // totals
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Network Activity",
            Style::default().fg(t.text_primary).add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("↓ {:.2} MB/s", m.network_in),
                Style::default().fg(t.net_down),
            ),
            Span::raw("   "),
            Span::styled(
                format!("↑ {:.2} MB/s", m.network_out),
                Style::default().fg(t.net_up),
            ),
        ])),
        chunks[1],
    );

    let totals = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Data Received",
                Style::default().fg(t.text_muted),
            )),
            Line::from(Span::styled(
                format!("{:.2} GB", DATA_RECEIVED_GB),
                Style::default().fg(t.net_down).add_modifier(Modifier::BOLD),
            )),
        ]),
        totals[0],
    );
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Data Sent", Style::default().fg(t.text_muted))),
            Line::from(Span::styled(
                format!("{} MB", DATA_SENT_MB),
                Style::default().fg(t.net_up).add_modifier(Modifier::BOLD),
            )),
        ]),
        totals[1],
    );
}
