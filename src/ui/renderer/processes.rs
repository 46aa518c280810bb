//! The static process table, sorted descending by CPU.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::ui::state::AppState;

pub fn render_processes(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let rows_data = state.table_rows();

    let header = Row::new(vec![
        Cell::from("PROCESS NAME").style(t.table_header_style()),
        Cell::from("PID").style(t.table_header_style()),
        Cell::from("% CPU ▼").style(t.table_header_style()),
        Cell::from("MEMORY").style(t.table_header_style()),
        Cell::from("THREADS").style(t.table_header_style()),
    ])
    .height(1);

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|p| {
            let cpu_color = t.cpu_load_color(p.cpu_load());
            Row::new(vec![
                Cell::from(p.name).style(Style::default().fg(t.text_primary)),
                Cell::from(format!("{}", p.pid)).style(Style::default().fg(t.text_dim)),
                Cell::from(format!("{:.1}", p.cpu)).style(Style::default().fg(cpu_color)),
                Cell::from(format!("{} MB", p.memory_mb)).style(Style::default().fg(t.text_dim)),
                Cell::from(format!("{}", p.threads)).style(Style::default().fg(t.text_muted)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(Span::styled(" Processes ", t.header_style()))
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );

    frame.render_widget(table, area);
}
