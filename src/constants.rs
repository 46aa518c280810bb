//! Application-wide constants.
//!
//! Centralizes timing, simulation parameters, and the fixed figures the
//! detail panels display, so none of them hide inside render code.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Minimum allowed refresh rate (ms) to prevent excessive CPU usage.
pub const MIN_REFRESH_MS: u64 = 100;
/// Default refresh interval (ms) -- one simulation tick per second.
pub const DEFAULT_REFRESH_MS: u64 = 1000;
/// Event poll timeout (ms) -- how often the UI checks for input.
pub const EVENT_POLL_MS: u64 = 50;
/// Status message display duration (seconds).
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 5;

// ── Simulation: initial values ────────────────────────────────────
/// CPU usage before the first tick (percent).
pub const CPU_INITIAL_PCT: f32 = 32.0;
/// Memory usage before the first tick (percent).
pub const MEM_INITIAL_PCT: f32 = 68.0;
/// Disk usage (percent). Never perturbed by the ticker.
pub const DISK_USAGE_PCT: f32 = 45.0;
/// Inbound network rate before the first tick (MB/s).
pub const NET_IN_INITIAL: f64 = 1.2;
/// Outbound network rate before the first tick (MB/s).
pub const NET_OUT_INITIAL: f64 = 0.4;

// ── Simulation: random walk ───────────────────────────────────────
/// CPU walk step scale (percent per tick).
pub const CPU_WALK_SCALE: f32 = 10.0;
/// CPU usage floor (percent).
pub const CPU_MIN_PCT: f32 = 5.0;
/// CPU usage ceiling (percent).
pub const CPU_MAX_PCT: f32 = 95.0;
/// Memory walk step scale (percent per tick).
pub const MEM_WALK_SCALE: f32 = 5.0;
/// Memory usage floor (percent).
pub const MEM_MIN_PCT: f32 = 40.0;
/// Memory usage ceiling (percent).
pub const MEM_MAX_PCT: f32 = 90.0;
/// Inbound network walk step scale (MB/s per tick).
pub const NET_IN_WALK_SCALE: f64 = 0.5;
/// Outbound network walk step scale (MB/s per tick).
pub const NET_OUT_WALK_SCALE: f64 = 0.3;

// ── Simulation: CPU history ───────────────────────────────────────
/// CPU history ring capacity (samples, 1 per tick).
pub const CPU_HISTORY_LEN: usize = 60;
/// Lower bound of a fresh history sample (percent, inclusive).
pub const HISTORY_SAMPLE_MIN: f32 = 10.0;
/// Upper bound of a fresh history sample (percent, exclusive).
pub const HISTORY_SAMPLE_MAX: f32 = 60.0;

// ── Process table thresholds ──────────────────────────────────────
/// CPU percent above which a table row is colored "high".
pub const PROC_CPU_HIGH_PCT: f32 = 10.0;
/// CPU percent above which a table row is colored "medium".
pub const PROC_CPU_MEDIUM_PCT: f32 = 5.0;

// ── Fixed panel figures ───────────────────────────────────────────
/// Physical memory shown on the Memory panel (GB).
pub const PHYSICAL_MEMORY_GB: f32 = 16.0;
/// Share of used memory attributed to applications.
pub const APP_MEMORY_SHARE: f32 = 0.6;
/// Share of used memory attributed to wired allocations.
pub const WIRED_MEMORY_SHARE: f32 = 0.25;
/// Share of used memory attributed to cached files.
pub const CACHED_FILES_SHARE: f32 = 0.15;
/// Share of CPU usage attributed to system time.
pub const CPU_SYSTEM_SHARE: f32 = 0.3;
/// Share of CPU usage attributed to user time.
pub const CPU_USER_SHARE: f32 = 0.7;
/// Disk read rate shown on the Disk panel (MB/s).
pub const DISK_READ_MBPS: f32 = 12.5;
/// Disk write rate shown on the Disk panel (MB/s).
pub const DISK_WRITE_MBPS: f32 = 4.2;
/// Total disk capacity shown on the Disk panel (GB).
pub const DISK_TOTAL_GB: u32 = 512;
/// Available disk space shown on the Disk panel (GB).
pub const DISK_AVAILABLE_GB: u32 = 256;
/// Average energy impact bar value (percent).
pub const ENERGY_IMPACT_PCT: f32 = 35.0;
/// Battery time remaining shown on the Energy panel.
pub const BATTERY_REMAINING: &str = "4:32";
/// Lifetime received total shown on the Network panel (GB).
pub const DATA_RECEIVED_GB: f32 = 1.45;
/// Lifetime sent total shown on the Network panel (MB).
pub const DATA_SENT_MB: u32 = 284;

// ── Gauge color thresholds ────────────────────────────────────────
/// Usage percentage above which gauge color is "critical".
pub const USAGE_CRITICAL_PCT: f32 = 90.0;
/// Usage percentage above which gauge color is "high".
pub const USAGE_HIGH_PCT: f32 = 70.0;
/// Usage percentage above which gauge color is "mid".
pub const USAGE_MID_PCT: f32 = 40.0;

// ── UI Layout ─────────────────────────────────────────────────────
/// Tab bar x-offset for click detection (after logo area).
pub const TAB_BAR_X_OFFSET: u16 = 14;
/// Column width of one tab label plus its separator in the tab strip.
pub const TAB_CLICK_WIDTH: u16 = 10;
/// Help overlay width.
pub const HELP_POPUP_WIDTH: u16 = 48;
/// Help overlay height.
pub const HELP_POPUP_HEIGHT: u16 = 22;

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/actmon/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("actmon")
}

/// Returns `~/.config/actmon/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/actmon/themes/`.
pub fn custom_theme_dir() -> PathBuf {
    config_dir().join("themes")
}

/// Returns `~/.config/actmon/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    custom_theme_dir().join(format!("{}.toml", name))
}
