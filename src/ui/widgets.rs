use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::theme::Theme;

/// A labelled horizontal usage bar with a percentage readout.
pub struct UsageBar<'a> {
    pub percent: f32,
    pub label: String,
    pub color: ratatui::style::Color,
    pub theme: &'a Theme,
}

impl<'a> UsageBar<'a> {
    pub fn new(percent: f32, label: &str, color: ratatui::style::Color, theme: &'a Theme) -> Self {
        Self {
            percent: percent.clamp(0.0, 100.0),
            label: label.to_string(),
            color,
            theme,
        }
    }
}

impl Widget for UsageBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 1 {
            return;
        }

        let label_width = self.label.len() as u16 + 1;
        let value_width = 7;
        let bar_width = area.width.saturating_sub(label_width + value_width);

        if bar_width < 2 {
            return;
        }

        let label_style = Style::default().fg(self.theme.text_dim);
        buf.set_string(area.x, area.y, &self.label, label_style);

        let bar_x = area.x + label_width;
        let filled = ((self.percent / 100.0) * bar_width as f32) as u16;

        // Block characters for smooth bar: ░ ▒ ▓ █
        for i in 0..bar_width {
            let (ch, style) = if i < filled {
                ('█', Style::default().fg(self.color))
            } else if i == filled {
                // Partial fill for smooth transition
                let frac = (self.percent / 100.0) * bar_width as f32 - filled as f32;
                let partial = if frac > 0.75 {
                    '▓'
                } else if frac > 0.5 {
                    '▒'
                } else {
                    '░'
                };
                (partial, Style::default().fg(self.color))
            } else {
                ('░', Style::default().fg(self.theme.gauge_bg))
            };
            buf.set_string(bar_x + i, area.y, ch.to_string(), style);
        }

        let val_str = format!("{:>5.1}%", self.percent);
        buf.set_string(
            bar_x + bar_width + 1,
            area.y,
            &val_str,
            Style::default().fg(self.color),
        );
    }
}

/// A column chart over the CPU history ring: one bar per sample, scaled to
/// the window maximum, newest at the right, older columns fading out.
pub struct HistoryChart<'a> {
    pub samples: &'a [f32],
    pub color: ratatui::style::Color,
    pub theme: &'a Theme,
}

impl<'a> HistoryChart<'a> {
    pub fn new(samples: &'a [f32], color: ratatui::style::Color, theme: &'a Theme) -> Self {
        Self {
            samples,
            color,
            theme,
        }
    }
}

impl Widget for HistoryChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 1 || self.samples.is_empty() {
            return;
        }

        let bar_chars = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

        // Scale to the maximum over the whole history, not just what fits.
        let max = self.samples.iter().copied().fold(0.0, f32::max);
        if max <= 0.0 {
            return;
        }

        // Show the newest samples that fit, right-aligned.
        let visible = (area.width as usize).min(self.samples.len());
        let window = &self.samples[self.samples.len() - visible..];
        let x0 = area.x + area.width - visible as u16;
        let bottom = area.y + area.height - 1;

        for (i, &sample) in window.iter().enumerate() {
            // Column height in eighth-blocks.
            let eighths = ((sample / max) * (area.height as f32 * 8.0)).round() as u16;
            let full = (eighths / 8).min(area.height);
            let rem = (eighths % 8) as usize;

            // Fade: oldest third muted, middle third dim, recent full color.
            let color = match i * 3 / visible.max(1) {
                0 => self.theme.text_muted,
                1 => self.theme.text_dim,
                _ => self.color,
            };
            let style = Style::default().fg(color);

            let x = x0 + i as u16;
            for row in 0..full {
                buf.set_string(x, bottom - row, "█", style);
            }
            if rem > 0 && full < area.height {
                buf.set_string(x, bottom - full, bar_chars[rem - 1].to_string(), style);
            }
        }
    }
}
