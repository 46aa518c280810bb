use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::constants::*;
use crate::models::CpuLoad;

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["default", "gruvbox", "nord", "dracula"];

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from TOML files.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ── Brand / Primary ──────────────────────────────────────
    pub accent: Color,
    pub bg_dark: Color,
    pub bg_panel: Color,

    // ── Text ─────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_dim: Color,
    pub text_muted: Color,

    // ── Semantic ─────────────────────────────────────────────
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // ── Gauges ───────────────────────────────────────────────
    pub gauge_low: Color,
    pub gauge_mid: Color,
    pub gauge_high: Color,
    pub gauge_critical: Color,
    pub gauge_bg: Color,

    // ── Per-panel accents ────────────────────────────────────
    pub cpu_accent: Color,
    pub mem_accent: Color,
    pub energy_accent: Color,
    pub disk_accent: Color,
    pub net_down: Color,
    pub net_up: Color,

    // ── Borders ──────────────────────────────────────────────
    pub border: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    /// Default dark theme.
    pub fn default_dark() -> Self {
        Self {
            name: "default".to_string(),
            accent: Color::Rgb(59, 130, 246),
            bg_dark: Color::Rgb(30, 30, 30),
            bg_panel: Color::Rgb(37, 37, 37),
            text_primary: Color::Rgb(235, 235, 235),
            text_dim: Color::Rgb(160, 160, 160),
            text_muted: Color::Rgb(105, 105, 105),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            danger: Color::Rgb(248, 113, 113),
            info: Color::Rgb(96, 165, 250),
            gauge_low: Color::Rgb(74, 222, 128),
            gauge_mid: Color::Rgb(250, 204, 21),
            gauge_high: Color::Rgb(251, 146, 60),
            gauge_critical: Color::Rgb(248, 113, 113),
            gauge_bg: Color::Rgb(55, 55, 55),
            cpu_accent: Color::Rgb(74, 222, 128),
            mem_accent: Color::Rgb(96, 165, 250),
            energy_accent: Color::Rgb(250, 204, 21),
            disk_accent: Color::Rgb(192, 132, 252),
            net_down: Color::Rgb(74, 222, 128),
            net_up: Color::Rgb(96, 165, 250),
            border: Color::Rgb(64, 64, 64),
        }
    }

    /// Gruvbox dark palette.
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            accent: Color::Rgb(215, 153, 33),      // yellow
            bg_dark: Color::Rgb(40, 40, 40),       // bg0
            bg_panel: Color::Rgb(50, 48, 47),      // bg0_s
            text_primary: Color::Rgb(235, 219, 178), // fg
            text_dim: Color::Rgb(168, 153, 132),   // fg4
            text_muted: Color::Rgb(102, 92, 84),   // bg4
            success: Color::Rgb(142, 192, 124),    // green
            warning: Color::Rgb(250, 189, 47),     // yellow bright
            danger: Color::Rgb(251, 73, 52),       // red
            info: Color::Rgb(131, 165, 152),       // blue
            gauge_low: Color::Rgb(142, 192, 124),
            gauge_mid: Color::Rgb(250, 189, 47),
            gauge_high: Color::Rgb(254, 128, 25),
            gauge_critical: Color::Rgb(251, 73, 52),
            gauge_bg: Color::Rgb(60, 56, 54),
            cpu_accent: Color::Rgb(142, 192, 124),
            mem_accent: Color::Rgb(131, 165, 152),
            energy_accent: Color::Rgb(250, 189, 47),
            disk_accent: Color::Rgb(211, 134, 155), // purple
            net_down: Color::Rgb(142, 192, 124),
            net_up: Color::Rgb(131, 165, 152),
            border: Color::Rgb(80, 73, 69),
        }
    }

    /// Nord palette.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            accent: Color::Rgb(136, 192, 208),     // nord8 frost
            bg_dark: Color::Rgb(46, 52, 64),       // nord0
            bg_panel: Color::Rgb(59, 66, 82),      // nord1
            text_primary: Color::Rgb(229, 233, 240), // nord5
            text_dim: Color::Rgb(182, 191, 204),
            text_muted: Color::Rgb(107, 112, 127),
            success: Color::Rgb(163, 190, 140),    // nord14 green
            warning: Color::Rgb(235, 203, 139),    // nord13 yellow
            danger: Color::Rgb(191, 97, 106),      // nord11 red
            info: Color::Rgb(129, 161, 193),       // nord9
            gauge_low: Color::Rgb(163, 190, 140),
            gauge_mid: Color::Rgb(235, 203, 139),
            gauge_high: Color::Rgb(208, 135, 112),
            gauge_critical: Color::Rgb(191, 97, 106),
            gauge_bg: Color::Rgb(67, 76, 94),      // nord2
            cpu_accent: Color::Rgb(163, 190, 140),
            mem_accent: Color::Rgb(129, 161, 193),
            energy_accent: Color::Rgb(235, 203, 139),
            disk_accent: Color::Rgb(180, 142, 173), // nord15 purple
            net_down: Color::Rgb(163, 190, 140),
            net_up: Color::Rgb(129, 161, 193),
            border: Color::Rgb(76, 86, 106),       // nord3
        }
    }

    /// Dracula palette.
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            accent: Color::Rgb(189, 147, 249),     // purple
            bg_dark: Color::Rgb(40, 42, 54),
            bg_panel: Color::Rgb(50, 52, 64),
            text_primary: Color::Rgb(248, 248, 242),
            text_dim: Color::Rgb(170, 170, 180),
            text_muted: Color::Rgb(98, 114, 164),  // comment
            success: Color::Rgb(80, 250, 123),     // green
            warning: Color::Rgb(241, 250, 140),    // yellow
            danger: Color::Rgb(255, 85, 85),       // red
            info: Color::Rgb(139, 233, 253),       // cyan
            gauge_low: Color::Rgb(80, 250, 123),
            gauge_mid: Color::Rgb(241, 250, 140),
            gauge_high: Color::Rgb(255, 184, 108), // orange
            gauge_critical: Color::Rgb(255, 85, 85),
            gauge_bg: Color::Rgb(68, 71, 90),
            cpu_accent: Color::Rgb(80, 250, 123),
            mem_accent: Color::Rgb(139, 233, 253),
            energy_accent: Color::Rgb(241, 250, 140),
            disk_accent: Color::Rgb(255, 121, 198), // pink
            net_down: Color::Rgb(80, 250, 123),
            net_up: Color::Rgb(139, 233, 253),
            border: Color::Rgb(68, 71, 90),
        }
    }

    /// Look up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default_dark()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Cycle to the next built-in theme after this one.
    pub fn next_builtin(&self) -> Self {
        let idx = BUILTIN_THEME_NAMES
            .iter()
            .position(|&n| n == self.name)
            .unwrap_or(0);
        let next = BUILTIN_THEME_NAMES[(idx + 1) % BUILTIN_THEME_NAMES.len()];
        Self::by_name(next).unwrap_or_default()
    }

    /// Load a custom theme from a TOML file. Missing fields inherit from
    /// the default palette.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = toml::from_str(&content).ok()?;
        let name = path.file_stem()?.to_string_lossy().to_string();
        Some(file.into_theme(&name))
    }

    // ── Style helpers ────────────────────────────────────────

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_inactive_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.text_dim)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Returns a color for a usage percentage gauge.
    pub fn usage_color(&self, percent: f32) -> Color {
        if percent >= USAGE_CRITICAL_PCT {
            self.gauge_critical
        } else if percent >= USAGE_HIGH_PCT {
            self.gauge_high
        } else if percent >= USAGE_MID_PCT {
            self.gauge_mid
        } else {
            self.gauge_low
        }
    }

    /// Returns the row color for a process table CPU cell.
    pub fn cpu_load_color(&self, load: CpuLoad) -> Color {
        match load {
            CpuLoad::High => self.danger,
            CpuLoad::Medium => self.warning,
            CpuLoad::Low => self.success,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional — missing fields inherit from the default theme.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    accent: Option<String>,
    bg_dark: Option<String>,
    bg_panel: Option<String>,
    text_primary: Option<String>,
    text_dim: Option<String>,
    text_muted: Option<String>,
    success: Option<String>,
    warning: Option<String>,
    danger: Option<String>,
    info: Option<String>,
    gauge_low: Option<String>,
    gauge_mid: Option<String>,
    gauge_high: Option<String>,
    gauge_critical: Option<String>,
    gauge_bg: Option<String>,
    cpu_accent: Option<String>,
    mem_accent: Option<String>,
    energy_accent: Option<String>,
    disk_accent: Option<String>,
    net_down: Option<String>,
    net_up: Option<String>,
    border: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::default_dark();
        Theme {
            name: name.to_string(),
            accent: parse_color(&self.accent).unwrap_or(base.accent),
            bg_dark: parse_color(&self.bg_dark).unwrap_or(base.bg_dark),
            bg_panel: parse_color(&self.bg_panel).unwrap_or(base.bg_panel),
            text_primary: parse_color(&self.text_primary).unwrap_or(base.text_primary),
            text_dim: parse_color(&self.text_dim).unwrap_or(base.text_dim),
            text_muted: parse_color(&self.text_muted).unwrap_or(base.text_muted),
            success: parse_color(&self.success).unwrap_or(base.success),
            warning: parse_color(&self.warning).unwrap_or(base.warning),
            danger: parse_color(&self.danger).unwrap_or(base.danger),
            info: parse_color(&self.info).unwrap_or(base.info),
            gauge_low: parse_color(&self.gauge_low).unwrap_or(base.gauge_low),
            gauge_mid: parse_color(&self.gauge_mid).unwrap_or(base.gauge_mid),
            gauge_high: parse_color(&self.gauge_high).unwrap_or(base.gauge_high),
            gauge_critical: parse_color(&self.gauge_critical).unwrap_or(base.gauge_critical),
            gauge_bg: parse_color(&self.gauge_bg).unwrap_or(base.gauge_bg),
            cpu_accent: parse_color(&self.cpu_accent).unwrap_or(base.cpu_accent),
            mem_accent: parse_color(&self.mem_accent).unwrap_or(base.mem_accent),
            energy_accent: parse_color(&self.energy_accent).unwrap_or(base.energy_accent),
            disk_accent: parse_color(&self.disk_accent).unwrap_or(base.disk_accent),
            net_down: parse_color(&self.net_down).unwrap_or(base.net_down),
            net_up: parse_color(&self.net_up).unwrap_or(base.net_up),
            border: parse_color(&self.border).unwrap_or(base.border),
        }
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_color ───────────────────────────────────────────────

    #[test]
    fn parse_color_with_hash() {
        let c = parse_color(&Some("#FF8800".to_string()));
        assert_eq!(c, Some(Color::Rgb(255, 136, 0)));
    }

    #[test]
    fn parse_color_without_hash() {
        let c = parse_color(&Some("FF8800".to_string()));
        assert_eq!(c, Some(Color::Rgb(255, 136, 0)));
    }

    #[test]
    fn parse_color_none() {
        assert_eq!(parse_color(&None), None);
    }

    #[test]
    fn parse_color_invalid_length() {
        assert_eq!(parse_color(&Some("#FFF".to_string())), None);
        assert_eq!(parse_color(&Some("#FFFFFFF".to_string())), None);
    }

    #[test]
    fn parse_color_invalid_hex() {
        assert_eq!(parse_color(&Some("#GGGGGG".to_string())), None);
    }

    // ── Built-ins ─────────────────────────────────────────────────

    #[test]
    fn by_name_resolves_all_builtins() {
        for name in BUILTIN_THEME_NAMES {
            let theme = Theme::by_name(name).unwrap();
            assert_eq!(&theme.name, name);
        }
    }

    #[test]
    fn by_name_unknown_is_none() {
        assert!(Theme::by_name("no-such-theme").is_none());
    }

    #[test]
    fn next_builtin_cycles_through_all() {
        let mut theme = Theme::default_dark();
        for _ in 0..BUILTIN_THEME_NAMES.len() {
            theme = theme.next_builtin();
        }
        assert_eq!(theme.name, "default");
    }

    // ── Color classification ──────────────────────────────────────

    #[test]
    fn usage_color_thresholds() {
        let t = Theme::default_dark();
        assert_eq!(t.usage_color(10.0), t.gauge_low);
        assert_eq!(t.usage_color(40.0), t.gauge_mid);
        assert_eq!(t.usage_color(70.0), t.gauge_high);
        assert_eq!(t.usage_color(95.0), t.gauge_critical);
    }

    #[test]
    fn cpu_load_colors() {
        use crate::models::CpuLoad;
        let t = Theme::default_dark();
        assert_eq!(t.cpu_load_color(CpuLoad::High), t.danger);
        assert_eq!(t.cpu_load_color(CpuLoad::Medium), t.warning);
        assert_eq!(t.cpu_load_color(CpuLoad::Low), t.success);
    }

    // ── Custom theme files ────────────────────────────────────────

    #[test]
    fn custom_theme_overrides_listed_fields_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("midnight.toml");
        std::fs::write(&path, "accent = \"#102030\"\ndanger = \"405060\"\n").unwrap();

        let theme = Theme::from_toml_file(&path).unwrap();
        assert_eq!(theme.name, "midnight");
        assert_eq!(theme.accent, Color::Rgb(16, 32, 48));
        assert_eq!(theme.danger, Color::Rgb(64, 80, 96));
        // Unlisted fields inherit the default palette.
        assert_eq!(theme.border, Theme::default_dark().border);
    }

    #[test]
    fn custom_theme_missing_file_is_none() {
        let path = std::path::Path::new("/nonexistent/theme.toml");
        assert!(Theme::from_toml_file(path).is_none());
    }
}
