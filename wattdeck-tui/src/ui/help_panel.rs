//! Panel 5 — Help: keyboard reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled("Global", theme::accent_bold())),
        key_line("1-5", "switch panel"),
        key_line("Tab / Shift-Tab", "next / previous panel"),
        key_line("r", "reload plans and providers"),
        key_line("q", "quit"),
        Line::from(""),
        Line::from(Span::styled("Plans", theme::accent_bold())),
        key_line("j / k", "move cursor"),
        key_line("Space", "toggle plan in comparison"),
        key_line("Enter", "plan details"),
        Line::from(""),
        Line::from(Span::styled("Filters", theme::accent_bold())),
        key_line("j / k", "move cursor"),
        key_line("Space / Enter", "toggle provider, term, or renewable"),
        key_line("h / l", "step the max-rate ceiling"),
        Line::from(""),
        Line::from(Span::styled("Help", theme::accent_bold())),
        key_line("e", "error history"),
    ];

    if !app.error_history.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} error(s) recorded — press e to inspect.", app.error_history.len()),
            theme::warning(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn key_line(key: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:>16}  "), theme::accent()),
        Span::styled(action.to_string(), theme::muted()),
    ])
}
