//! Showroom theme - dark palette with a single blue accent

use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // ─────────────────────────────────────────────────────────────────────
    // Palette
    // ─────────────────────────────────────────────────────────────────────

    /// Maximum emphasis - headers, selected rows
    pub const WHITE: Color = Color::Rgb(250, 250, 250);

    /// Primary text
    pub const GREY_100: Color = Color::Rgb(220, 220, 220);

    /// Secondary text - series, categories, hints
    pub const GREY_300: Color = Color::Rgb(140, 140, 140);

    /// Muted - borders, inactive tabs
    pub const GREY_500: Color = Color::Rgb(80, 80, 80);

    /// Overlay and bubble backgrounds
    pub const GREY_700: Color = Color::Rgb(38, 38, 38);

    /// Main background
    pub const BG: Color = Color::Rgb(18, 18, 18);

    /// Brand accent - prices, active tab, advisor bubbles
    pub const ACCENT: Color = Color::Rgb(64, 128, 255);

    /// Error toast background
    pub const RED: Color = Color::Rgb(170, 50, 50);

    // ─────────────────────────────────────────────────────────────────────
    // Common styles
    // ─────────────────────────────────────────────────────────────────────

    pub fn title() -> Style {
        Style::default().fg(Self::WHITE).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::GREY_100)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::GREY_300)
    }

    pub fn accent() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .bg(Self::GREY_700)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::GREY_500)
    }
}
