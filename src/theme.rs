use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Installs the theme built from the config. Later calls are ignored.
pub fn init(config: &ThemeConfig) {
    let _ = THEME.set(config.clone().into_theme());
}

/// The active theme, or the default if `init` was never called.
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

const ROSE: Color = Color::Rgb(217, 26, 77);
const BLUSH: Color = Color::Rgb(255, 128, 166);
const PETAL: Color = Color::Rgb(255, 230, 242);

pub const CONFETTI_COLORS: [Color; 5] = [
    Color::Rgb(255, 45, 85),
    Color::Rgb(255, 59, 48),
    Color::Rgb(175, 82, 222),
    Color::Rgb(48, 176, 199),
    Color::Rgb(255, 204, 0),
];

#[derive(Debug, Clone)]
pub struct Theme {
    #[allow(dead_code)]
    pub name: String,
    pub title: Style,
    pub tagline: Style,
    pub accent: Style,
    pub card: Style,
    pub flash: Style,
    pub selected: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            tagline: Style::default().fg(Color::Gray),
            accent: Style::default().fg(Color::Red),
            card: Style::default(),
            flash: Style::default().bg(Color::DarkGray),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }
}

impl Theme {
    pub fn preset(name: &str) -> Self {
        match name {
            "rose" => Self::rose(),
            "midnight" => Self::midnight(),
            _ => Self::default(),
        }
    }

    fn rose() -> Self {
        Self {
            name: "rose".to_string(),
            title: Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
            tagline: Style::default().fg(BLUSH),
            accent: Style::default().fg(ROSE),
            card: Style::default(),
            flash: Style::default().fg(ROSE).bg(PETAL),
            selected: Style::default().fg(Color::White).bg(ROSE),
            dim: Style::default().fg(Color::Rgb(150, 120, 130)),
            border: Style::default().fg(BLUSH),
            status: Style::default().fg(Color::White).bg(Color::Rgb(140, 20, 55)),
        }
    }

    fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            title: Style::default().fg(Color::Rgb(189, 147, 249)).add_modifier(Modifier::BOLD),
            tagline: Style::default().fg(Color::Rgb(98, 114, 164)),
            accent: Style::default().fg(Color::Rgb(255, 121, 198)),
            card: Style::default(),
            flash: Style::default().bg(Color::Rgb(68, 71, 90)),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(255, 121, 198)),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            border: Style::default().fg(Color::Rgb(68, 71, 90)),
            status: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(68, 71, 90)),
        }
    }
}

// ── TOML config types ──

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub accent_fg: Option<String>,
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub flash_bg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
}

impl ThemeConfig {
    pub fn into_theme(self) -> Theme {
        let mut theme = Theme::preset(self.preset.as_deref().unwrap_or("rose"));

        if let Some(c) = self.accent_fg.as_deref().and_then(parse_color) {
            theme.accent = theme.accent.fg(c);
            theme.title = theme.title.fg(c);
        }
        if let Some(c) = self.selected_fg.as_deref().and_then(parse_color) {
            theme.selected = theme.selected.fg(c);
        }
        if let Some(c) = self.selected_bg.as_deref().and_then(parse_color) {
            theme.selected = theme.selected.bg(c);
        }
        if let Some(c) = self.flash_bg.as_deref().and_then(parse_color) {
            theme.flash = theme.flash.bg(c);
        }
        if let Some(c) = self.dim_fg.as_deref().and_then(parse_color) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = self.border_fg.as_deref().and_then(parse_color) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = self.status_fg.as_deref().and_then(parse_color) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = self.status_bg.as_deref().and_then(parse_color) {
            theme.status = theme.status.bg(c);
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "pink" | "lightmagenta" => Some(Color::LightMagenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        _ => None,
    }
}

/// Terminal glyph for a symbolic icon name.
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "heart.fill" => "\u{2665}",
        "heart.circle.fill" | "heart.circle" => "\u{2764}",
        "gift.fill" => "\u{1F381}",
        _ => "\u{2727}",
    }
}
