//! Header bar: logo, tab strip, live summary.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::TAB_BAR_X_OFFSET;
use crate::ui::state::{AppState, Tab};

/// Column inside the tab block where the first tab label starts
/// (block border plus one space of padding).
const TAB_STRIP_PAD: u16 = 2;
/// Separator drawn between tab labels.
const TAB_SEPARATOR: &str = " │ ";

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(TAB_BAR_X_OFFSET), // Logo
            Constraint::Min(20),                  // Tabs
            Constraint::Length(26),               // Live summary
        ])
        .split(area);

    // Logo with a tick pulse
    let pulse = if state.tick_count % 2 == 0 { "●" } else { "○" };
    let logo = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(pulse, Style::default().fg(t.success)),
        Span::styled(" actmon", t.header_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(logo, chunks[0]);

    // Tab strip
    let mut tab_spans = vec![Span::raw(" ")];
    for (i, tab) in Tab::all().iter().enumerate() {
        let style = if *tab == state.active_tab {
            t.tab_active_style()
        } else {
            t.tab_inactive_style()
        };
        tab_spans.push(Span::styled(tab.label(), style));
        if i < Tab::all().len() - 1 {
            tab_spans.push(Span::styled(TAB_SEPARATOR, Style::default().fg(t.text_muted)));
        }
    }
    let tab_line = Paragraph::new(Line::from(tab_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(tab_line, chunks[1]);

    // Live summary
    let summary = format!(
        "CPU {:>3.0}%  MEM {:>3.0}% ",
        state.metrics.cpu_usage, state.metrics.memory_usage
    );
    let sys_summary = Paragraph::new(Line::from(vec![Span::styled(
        summary,
        Style::default().fg(t.text_dim),
    )]))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(sys_summary, chunks[2]);
}

/// Map an absolute click column in the header row to a tab.
///
/// Mirrors the layout in `render_header`: labels start at
/// `TAB_BAR_X_OFFSET + TAB_STRIP_PAD` and are joined by `TAB_SEPARATOR`.
/// Clicks on a separator or past the last label return `None`.
pub fn tab_at_click(column: u16) -> Option<Tab> {
    let strip_start = TAB_BAR_X_OFFSET + TAB_STRIP_PAD;
    if column < strip_start {
        return None;
    }
    let mut x = (column - strip_start) as usize;
    for tab in Tab::all() {
        let w = tab.label().len();
        if x < w {
            return Some(*tab);
        }
        x -= w;
        if x < TAB_SEPARATOR.chars().count() {
            return None; // separator gap
        }
        x -= TAB_SEPARATOR.chars().count();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRIP: u16 = TAB_BAR_X_OFFSET + TAB_STRIP_PAD;

    #[test]
    fn click_before_strip_hits_nothing() {
        assert_eq!(tab_at_click(0), None);
        assert_eq!(tab_at_click(STRIP - 1), None);
    }

    #[test]
    fn click_on_each_label_start_hits_that_tab() {
        // Labels: CPU(3) │ Memory(6) │ Energy(6) │ Disk(4) │ Network(7)
        let mut x = STRIP;
        for tab in Tab::all() {
            assert_eq!(tab_at_click(x), Some(*tab));
            let last = x + tab.label().len() as u16 - 1;
            assert_eq!(tab_at_click(last), Some(*tab));
            x = last + 1 + TAB_SEPARATOR.chars().count() as u16;
        }
    }

    #[test]
    fn click_on_separator_hits_nothing() {
        // First separator sits right after "CPU".
        assert_eq!(tab_at_click(STRIP + 3), None);
        assert_eq!(tab_at_click(STRIP + 4), None);
        assert_eq!(tab_at_click(STRIP + 5), None);
    }

    #[test]
    fn click_past_last_label_hits_nothing() {
        // Total strip width: 3+6+6+4+7 labels + 4 separators of 3.
        let end = STRIP + 26 + 12;
        assert_eq!(tab_at_click(end), None);
        assert_eq!(tab_at_click(end + 40), None);
    }
}
