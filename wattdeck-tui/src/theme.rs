//! Neon-on-charcoal color tokens for the WattDeck TUI.
//!
//! Style helpers rather than raw colors so call sites stay terse.

use ratatui::style::{Color, Modifier, Style};

/// Electric cyan — focus and highlights.
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Neon green — positive savings, cached/ok states.
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
/// Hot pink — losses and failures.
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
/// Neon orange — warnings.
pub const WARNING: Color = Color::Rgb(255, 140, 0);
/// Cool purple — secondary info.
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
/// Steel blue — muted text.
pub const MUTED: Color = Color::Rgb(100, 149, 237);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Green for positive savings, pink for negative or zero.
pub fn savings_style(value: f64) -> Style {
    if value > 0.0 {
        positive()
    } else {
        negative()
    }
}

/// Renewable content gradient.
pub fn renewable_style(pct: i64) -> Style {
    match pct {
        p if p >= 100 => positive(),
        p if p >= 50 => accent(),
        _ => muted(),
    }
}
