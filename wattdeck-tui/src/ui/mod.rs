//! Top-level UI layout — single active panel with a 1-line status bar.

pub mod chart_panel;
pub mod compare_panel;
pub mod filter_panel;
pub mod help_panel;
pub mod overlays;
pub mod plans_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    // Overlays on top.
    match &app.overlay {
        Overlay::Detail(id) => overlays::render_detail(f, main_area, app, *id),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::None => {}
    }
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Plans => plans_panel::render(f, inner, app),
        Panel::Filters => filter_panel::render(f, inner, app),
        Panel::Compare => compare_panel::render(f, inner, app),
        Panel::Chart => chart_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

// ── Display fallbacks for optional numerics ──────────────────────────

/// Em-dash placeholder used wherever scrape data is missing.
pub const MISSING: &str = "—";

pub fn fmt_rate(rate: Option<f64>) -> String {
    rate.map(|r| format!("{r:.2}")).unwrap_or_else(|| MISSING.into())
}

pub fn fmt_fee(fee: Option<f64>) -> String {
    fee.map(|v| format!("${v:.2}")).unwrap_or_else(|| MISSING.into())
}

pub fn fmt_term(term: Option<u32>) -> String {
    term.map(|t| t.to_string()).unwrap_or_else(|| MISSING.into())
}

pub fn fmt_renewable(pct: Option<i64>) -> String {
    pct.map(|p| format!("{p}%")).unwrap_or_else(|| MISSING.into())
}

/// Negative savings render as "-$x.xx", mirroring the rate table.
pub fn fmt_savings(savings: Option<f64>) -> String {
    match savings {
        Some(s) if s < 0.0 => format!("-${:.2}", s.abs()),
        Some(s) => format!("${s:.2}"),
        None => MISSING.into(),
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}.")
    }
}
