//! Application struct and event loop.
//!
//! Owns the terminal, state, and the simulation ticker. The loop draws,
//! drains pending ticker updates, and dispatches input until the user
//! requests close; dropping the ticker on the way out guarantees no update
//! fires after teardown.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::*;
use crate::sim::{MetricSim, TickUpdate, Ticker};
use crate::ui::{self, AppState, Tab};

/// Main application struct.
///
/// Owns all runtime resources: terminal state, UI state, and the ticker.
pub struct App {
    state: AppState,
    tick_rx: mpsc::UnboundedReceiver<TickUpdate>,
    // Held for its Drop impl: aborting the ticker task on teardown.
    _ticker: Ticker,
}

impl App {
    /// Create a new App: resolve the theme, seed the simulation, and start
    /// the ticker task.
    pub fn new(config: &Config) -> Result<Self> {
        let theme = ui::Theme::by_name(&config.theme)
            .or_else(|| ui::Theme::from_toml_file(&custom_theme_path(&config.theme)))
            .unwrap_or_default();

        let mut state = AppState::new(theme);

        let mut sim = MetricSim::new(config.seed);
        sim.seed_history(&mut state.cpu_history);
        state.metrics = sim.metrics();

        let (ticker, tick_rx) = Ticker::spawn(sim, config.refresh_interval_ms);
        info!(
            refresh_ms = config.refresh_interval_ms,
            theme = %state.theme.name,
            "starting activity panel"
        );

        Ok(Self {
            state,
            tick_rx,
            _ticker: ticker,
        })
    }

    /// Run the main event loop. Returns when the user requests close.
    pub async fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        loop {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            self.drain_ticks();

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                let terminal_event = event::read()?;

                if let Event::Mouse(mouse) = terminal_event {
                    self.handle_mouse(mouse);
                    continue;
                }

                if let Event::Key(key) = terminal_event {
                    if key.kind == event::KeyEventKind::Press && self.handle_key(key) {
                        break; // close requested
                    }
                }
            }
        }

        // Cleanup
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        debug!("activity panel closed");

        Ok(())
    }

    // ── Ticker draining ──────────────────────────────────────────

    /// Apply every pending simulation update, in order.
    fn drain_ticks(&mut self) {
        while let Ok(update) = self.tick_rx.try_recv() {
            self.state.apply(update);
        }
    }

    // ── Mouse handling ───────────────────────────────────────────

    fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent) {
        if mouse.kind != MouseEventKind::Down(crossterm::event::MouseButton::Left) {
            return;
        }
        if self.state.show_help {
            self.state.show_help = false;
            return;
        }
        // Tab strip lives in the 3-row header.
        if mouse.row <= 2 {
            if let Some(tab) = ui::tab_at_click(mouse.column) {
                self.state.active_tab = tab;
            }
        }
    }

    // ── Keyboard handling ────────────────────────────────────────

    /// Handle a key event. Returns `true` if the app should close.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        // Help overlay mode (scrollable)
        if self.state.show_help {
            return self.handle_key_help(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,

            // Tab navigation
            KeyCode::Tab => self.state.next_tab(),
            KeyCode::BackTab => self.state.prev_tab(),
            KeyCode::Char('1') => self.state.active_tab = Tab::Cpu,
            KeyCode::Char('2') => self.state.active_tab = Tab::Memory,
            KeyCode::Char('3') => self.state.active_tab = Tab::Energy,
            KeyCode::Char('4') => self.state.active_tab = Tab::Disk,
            KeyCode::Char('5') => self.state.active_tab = Tab::Network,

            // Theme cycling
            KeyCode::Char('T') => {
                self.state.cycle_theme();
                self.state
                    .set_status(format!("Theme: {}", self.state.theme.name));
            }

            // Help
            KeyCode::Char('?') => {
                self.state.show_help = true;
                self.state.help_scroll = 0;
            }

            _ => {}
        }
        false
    }

    fn handle_key_help(&mut self, key: crossterm::event::KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.state.show_help = false;
                self.state.help_scroll = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.help_scroll > 0 {
                    self.state.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.help_scroll += 1;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn make_app() -> App {
        let config = Config::default();
        App::new(&config).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press_ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> crossterm::event::MouseEvent {
        crossterm::event::MouseEvent {
            kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test]
    async fn new_app_seeds_full_history_and_initial_metrics() {
        let app = make_app();
        assert_eq!(app.state.cpu_history.len(), CPU_HISTORY_LEN);
        assert_eq!(app.state.metrics.cpu_usage, CPU_INITIAL_PCT);
        assert_eq!(app.state.metrics.memory_usage, MEM_INITIAL_PCT);
        assert_eq!(app.state.active_tab, Tab::Cpu);
    }

    #[tokio::test]
    async fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme: "no-such-theme".to_string(),
            ..Config::default()
        };
        let app = App::new(&config).unwrap();
        assert_eq!(app.state.theme.name, "default");
    }

    #[tokio::test]
    async fn number_keys_select_tabs() {
        let mut app = make_app();
        for (key, tab) in [
            ('2', Tab::Memory),
            ('3', Tab::Energy),
            ('4', Tab::Disk),
            ('5', Tab::Network),
            ('1', Tab::Cpu),
        ] {
            assert!(!app.handle_key(press(KeyCode::Char(key))));
            assert_eq!(app.state.active_tab, tab);
        }
    }

    #[tokio::test]
    async fn quit_keys_request_close() {
        let mut app = make_app();
        assert!(app.handle_key(press(KeyCode::Char('q'))));
        assert!(app.handle_key(press(KeyCode::Esc)));
        assert!(app.handle_key(press_ctrl('c')));
    }

    #[tokio::test]
    async fn help_swallows_quit_key() {
        let mut app = make_app();
        assert!(!app.handle_key(press(KeyCode::Char('?'))));
        assert!(app.state.show_help);
        // q closes the overlay, not the app
        assert!(!app.handle_key(press(KeyCode::Char('q'))));
        assert!(!app.state.show_help);
    }

    #[tokio::test]
    async fn theme_key_cycles_and_sets_status() {
        let mut app = make_app();
        let before = app.state.theme.name.clone();
        assert!(!app.handle_key(press(KeyCode::Char('T'))));
        assert_ne!(app.state.theme.name, before);
        assert!(app.state.active_status().is_some());
    }

    #[tokio::test]
    async fn header_click_switches_tab() {
        let mut app = make_app();
        // "Memory" label starts after "CPU" + separator.
        let column = TAB_BAR_X_OFFSET + 2 + 3 + 3;
        app.handle_mouse(click(column, 1));
        assert_eq!(app.state.active_tab, Tab::Memory);
    }

    #[tokio::test]
    async fn click_below_header_ignored() {
        let mut app = make_app();
        app.handle_mouse(click(TAB_BAR_X_OFFSET + 2, 10));
        assert_eq!(app.state.active_tab, Tab::Cpu);
    }

    #[tokio::test]
    async fn drained_updates_advance_state() {
        let config = Config {
            refresh_interval_ms: MIN_REFRESH_MS,
            seed: Some(11),
            ..Config::default()
        };
        let mut app = App::new(&config).unwrap();
        // Wait out a couple of tick periods, then drain.
        tokio::time::sleep(Duration::from_millis(MIN_REFRESH_MS * 3)).await;
        app.drain_ticks();
        assert!(app.state.tick_count >= 1);
        assert_eq!(app.state.cpu_history.len(), CPU_HISTORY_LEN);
    }
}
