//! Panel 1 — Plans: filtered plan table with selection markers, the
//! best-savings highlight, and the no-savings banner.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, LoadPhase};
use crate::theme;
use crate::ui::{fmt_fee, fmt_rate, fmt_renewable, fmt_savings, fmt_term, truncate};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    match &app.load_phase {
        LoadPhase::Loading => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Loading plans...", theme::warning())));
            f.render_widget(Paragraph::new(lines), area);
            return;
        }
        LoadPhase::Failed(error) => {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Load failed: ", theme::negative()),
                Span::styled(error.as_str(), theme::muted()),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Press r to retry.", theme::muted())));
            f.render_widget(Paragraph::new(lines), area);
            return;
        }
        LoadPhase::Loaded => {}
    }

    let filtered = app.filtered_plans();

    // Header
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}/{} plans", filtered.len(), app.plans.len()),
            theme::accent(),
        ),
        Span::styled(
            format!("  Compare ({})", app.selection.len()),
            theme::neutral(),
        ),
        Span::styled(
            "  [j/k]move [Space]select [Enter]details [r]eload",
            theme::muted(),
        ),
    ]));

    // Best-savings highlight, then the no-savings banner.
    if let Some(best) = app.best_savings() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "Estimated savings vs TXU: {}/mo",
                    fmt_savings(best.estimated_savings_vs_txu)
                ),
                theme::positive().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  Highlighted plan: {}", best.name), theme::muted()),
        ]));
    }
    if app.show_banner() {
        lines.push(Line::from(Span::styled(
            "No plans are currently cheaper than TXU at the benchmark usage.",
            theme::warning(),
        )));
    }
    lines.push(Line::from(""));

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "No plans match the current filters.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    // Column headers
    lines.push(Line::from(Span::styled(
        format!(
            "    {:<24} {:<16} {:>5} {:>9} {:>8} {:>6} {:>10}",
            "Plan", "Provider", "Term", "Rate", "Base", "Renew", "Sav/mo"
        ),
        theme::accent_bold(),
    )));

    // Visible rows, windowed around the cursor.
    let header_rows = lines.len();
    let visible_height = (area.height as usize).saturating_sub(header_rows).max(1);
    let start = app.plans_cursor.saturating_sub(visible_height.saturating_sub(1));
    let end = (start + visible_height).min(filtered.len());

    for (i, plan) in filtered.iter().enumerate().take(end).skip(start) {
        let is_cursor = i == app.plans_cursor;
        let is_selected = app.selection.contains(plan.id);

        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if is_selected {
            theme::accent()
        } else {
            theme::muted()
        };

        let check = if is_selected { "[x]" } else { "[ ]" };

        let savings_style = match (is_cursor, plan.estimated_savings_vs_txu) {
            (false, Some(s)) => theme::savings_style(s),
            _ => style,
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{check} "), style),
            Span::styled(format!("{:<24} ", truncate(&plan.name, 24)), style),
            Span::styled(
                format!("{:<16} ", truncate(app.directory.name_of(plan.provider_id), 16)),
                style,
            ),
            Span::styled(format!("{:>5} ", fmt_term(plan.term_months)), style),
            Span::styled(format!("{:>9} ", fmt_rate(plan.rate_cents_kwh)), style),
            Span::styled(format!("{:>8} ", fmt_fee(plan.base_fee)), style),
            Span::styled(format!("{:>6} ", fmt_renewable(plan.renewable_percentage)), style),
            Span::styled(
                format!("{:>10}", fmt_savings(plan.estimated_savings_vs_txu)),
                savings_style,
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
