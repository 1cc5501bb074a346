//! Panel 2 — Filters: provider/term toggles, renewable switch,
//! max-rate stepper.
//!
//! Section headers are decorative; the cursor walks only the selectable
//! rows, in the same order `AppState::filter_rows` produces them.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, TERM_OPTIONS};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    let mut row = 0usize;

    lines.push(Line::from(Span::styled(
        "[j/k]move [Space]toggle [h/l]adjust ceiling",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    // Providers
    lines.push(Line::from(Span::styled("Providers", theme::accent_bold())));
    if app.providers.is_empty() {
        lines.push(Line::from(Span::styled("  (none loaded)", theme::muted())));
    }
    for provider in &app.providers {
        let is_cursor = row == app.filter_cursor;
        let is_on = app.filter.provider_ids.contains(&provider.id);
        lines.push(toggle_line(&provider.name, is_on, is_cursor));
        row += 1;
    }
    lines.push(Line::from(""));

    // Terms
    lines.push(Line::from(Span::styled("Term", theme::accent_bold())));
    for &term in &TERM_OPTIONS {
        let is_cursor = row == app.filter_cursor;
        let is_on = app.filter.terms.contains(&term);
        lines.push(toggle_line(&format!("{term} months"), is_on, is_cursor));
        row += 1;
    }
    lines.push(Line::from(""));

    // Renewable switch
    lines.push(Line::from(Span::styled("Renewable", theme::accent_bold())));
    {
        let is_cursor = row == app.filter_cursor;
        lines.push(toggle_line(
            "50%+ renewable only",
            app.filter.renewable_only,
            is_cursor,
        ));
        row += 1;
    }
    lines.push(Line::from(""));

    // Max rate stepper
    lines.push(Line::from(Span::styled("Max Rate (¢/kWh)", theme::accent_bold())));
    {
        let is_cursor = row == app.filter_cursor;
        let value = match app.filter.max_rate {
            Some(ceiling) => format!("≤ {ceiling:.0}"),
            None => "no ceiling".to_string(),
        };
        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if app.filter.max_rate.is_some() {
            theme::accent()
        } else {
            theme::muted()
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("◂ {value} ▸"), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn toggle_line(label: &str, on: bool, is_cursor: bool) -> Line<'static> {
    let check = if on { "[x]" } else { "[ ]" };
    let style = if is_cursor {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else if on {
        theme::accent()
    } else {
        theme::muted()
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{check} {label}"), style),
    ])
}
