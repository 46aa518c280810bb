use std::time::Instant;

use crate::constants::*;
use crate::models::{sorted_by_cpu, HistoryBuffer, MetricSnapshot, ProcessRecord, PROCESS_CATALOG};
use crate::sim::TickUpdate;

use super::theme::Theme;

/// Which detail panel is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Cpu,
    Memory,
    Energy,
    Disk,
    Network,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Cpu, Tab::Memory, Tab::Energy, Tab::Disk, Tab::Network]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Cpu => "CPU",
            Tab::Memory => "Memory",
            Tab::Energy => "Energy",
            Tab::Disk => "Disk",
            Tab::Network => "Network",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Cpu => 0,
            Tab::Memory => 1,
            Tab::Energy => 2,
            Tab::Disk => 3,
            Tab::Network => 4,
        }
    }
}

/// Central application state - the single source of truth.
pub struct AppState {
    pub active_tab: Tab,
    pub metrics: MetricSnapshot,
    pub cpu_history: HistoryBuffer,
    pub processes: &'static [ProcessRecord],
    pub tick_count: u64,

    // ── Overlays ───────────────────────────────────────────────
    pub show_help: bool,
    pub help_scroll: usize,

    // ── Status message (shown in status bar) ───────────────────
    pub status_message: Option<(String, Instant)>,

    // ── Theme ──────────────────────────────────────────────────
    pub theme: Theme,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            active_tab: Tab::Cpu,
            metrics: MetricSnapshot::default(),
            cpu_history: HistoryBuffer::new(CPU_HISTORY_LEN),
            processes: PROCESS_CATALOG,
            tick_count: 0,
            show_help: false,
            help_scroll: 0,
            status_message: None,
            theme,
        }
    }

    /// Apply one ticker update: replace the metric bundle and roll the
    /// CPU history forward by one sample.
    pub fn apply(&mut self, update: TickUpdate) {
        self.metrics = update.metrics;
        self.cpu_history.push(update.cpu_sample);
        self.tick_count += 1;
    }

    /// Process table rows, sorted descending by CPU. The catalog itself
    /// keeps its storage order.
    pub fn table_rows(&self) -> Vec<&ProcessRecord> {
        sorted_by_cpu(self.processes)
    }

    pub fn next_tab(&mut self) {
        self.active_tab = match self.active_tab {
            Tab::Cpu => Tab::Memory,
            Tab::Memory => Tab::Energy,
            Tab::Energy => Tab::Disk,
            Tab::Disk => Tab::Network,
            Tab::Network => Tab::Cpu,
        };
    }

    pub fn prev_tab(&mut self) {
        self.active_tab = match self.active_tab {
            Tab::Cpu => Tab::Network,
            Tab::Memory => Tab::Cpu,
            Tab::Energy => Tab::Memory,
            Tab::Disk => Tab::Energy,
            Tab::Network => Tab::Disk,
        };
    }

    /// Cycle to the next built-in theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next_builtin();
    }

    /// Set a status bar message with automatic timestamp.
    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    /// The status message, if it has not expired yet.
    pub fn active_status(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, when)) if when.elapsed().as_secs() < STATUS_MESSAGE_TIMEOUT_SECS => {
                Some(msg.as_str())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetricSnapshot;

    fn make_state() -> AppState {
        AppState::new(Theme::default_dark())
    }

    fn make_update(cpu: f32, sample: f32) -> TickUpdate {
        TickUpdate {
            metrics: MetricSnapshot {
                cpu_usage: cpu,
                ..MetricSnapshot::default()
            },
            cpu_sample: sample,
        }
    }

    // ── Tab ───────────────────────────────────────────────────────

    #[test]
    fn tab_all_has_five() {
        assert_eq!(Tab::all().len(), 5);
    }

    #[test]
    fn tab_index_matches_order() {
        for (i, tab) in Tab::all().iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn default_tab_is_cpu() {
        assert_eq!(make_state().active_tab, Tab::Cpu);
    }

    #[test]
    fn next_tab_cycles() {
        let mut s = make_state();
        s.next_tab();
        assert_eq!(s.active_tab, Tab::Memory);
        s.next_tab();
        assert_eq!(s.active_tab, Tab::Energy);
        s.next_tab();
        assert_eq!(s.active_tab, Tab::Disk);
        s.next_tab();
        assert_eq!(s.active_tab, Tab::Network);
        s.next_tab();
        assert_eq!(s.active_tab, Tab::Cpu);
    }

    #[test]
    fn prev_tab_cycles() {
        let mut s = make_state();
        s.prev_tab();
        assert_eq!(s.active_tab, Tab::Network);
        s.prev_tab();
        assert_eq!(s.active_tab, Tab::Disk);
    }

    #[test]
    fn next_then_prev_is_identity() {
        let mut s = make_state();
        for _ in 0..Tab::all().len() {
            let before = s.active_tab;
            s.next_tab();
            s.prev_tab();
            assert_eq!(s.active_tab, before);
            s.next_tab();
        }
    }

    #[test]
    fn tab_change_leaves_metrics_alone() {
        let mut s = make_state();
        let before = s.metrics;
        s.next_tab();
        s.prev_tab();
        assert_eq!(s.metrics, before);
    }

    // ── Metrics / history ─────────────────────────────────────────

    #[test]
    fn initial_metrics_before_first_tick() {
        let s = make_state();
        assert_eq!(s.metrics.cpu_usage, 32.0);
        assert_eq!(s.metrics.memory_usage, 68.0);
        assert_eq!(s.tick_count, 0);
    }

    #[test]
    fn apply_replaces_metrics_and_counts_ticks() {
        let mut s = make_state();
        s.apply(make_update(50.0, 22.0));
        assert_eq!(s.metrics.cpu_usage, 50.0);
        assert_eq!(s.tick_count, 1);
        s.apply(make_update(60.0, 30.0));
        assert_eq!(s.metrics.cpu_usage, 60.0);
        assert_eq!(s.tick_count, 2);
    }

    #[test]
    fn history_length_holds_at_capacity_across_ticks() {
        let mut s = make_state();
        // Simulate a seeded-full history, then keep ticking.
        for i in 0..CPU_HISTORY_LEN {
            s.cpu_history.push(i as f32);
        }
        for i in 0..200 {
            s.apply(make_update(40.0, i as f32));
            assert_eq!(s.cpu_history.len(), CPU_HISTORY_LEN);
        }
    }

    // ── Process table ─────────────────────────────────────────────

    #[test]
    fn table_rows_sorted_and_complete() {
        let s = make_state();
        let rows = s.table_rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].name, "Hanzo AI");
        assert_eq!(rows[1].name, "Safari");
    }

    #[test]
    fn table_rows_stable_across_calls() {
        let s = make_state();
        let first: Vec<u32> = s.table_rows().iter().map(|p| p.pid).collect();
        let second: Vec<u32> = s.table_rows().iter().map(|p| p.pid).collect();
        assert_eq!(first, second);
    }

    // ── Status / theme ────────────────────────────────────────────

    #[test]
    fn set_status_is_visible_immediately() {
        let mut s = make_state();
        assert!(s.active_status().is_none());
        s.set_status("theme changed".to_string());
        assert_eq!(s.active_status(), Some("theme changed"));
    }

    #[test]
    fn stale_status_is_hidden() {
        let mut s = make_state();
        let age = std::time::Duration::from_secs(STATUS_MESSAGE_TIMEOUT_SECS + 1);
        if let Some(stale) = Instant::now().checked_sub(age) {
            s.status_message = Some(("old".to_string(), stale));
            assert!(s.active_status().is_none());
        }
    }

    #[test]
    fn cycle_theme_changes_name() {
        let mut s = make_state();
        let initial = s.theme.name.clone();
        s.cycle_theme();
        assert_ne!(s.theme.name, initial);
    }
}
