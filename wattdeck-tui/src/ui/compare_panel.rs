//! Panel 3 — Compare: selected plans side by side with the benchmark
//! rate in the header.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::{fmt_fee, fmt_rate, fmt_renewable, fmt_savings, fmt_term};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("⚡ TXU benchmark: ", theme::warning()),
        Span::styled(format!("{:.2} ¢/kWh", app.benchmark()), theme::accent_bold()),
    ]));
    lines.push(Line::from(""));

    let selected = app.selected_plans();
    if selected.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing selected. Mark plans with Space in the Plans panel.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    for plan in selected {
        let provider_name = app.directory.name_of(plan.provider_id);
        lines.push(Line::from(vec![
            Span::styled(plan.name.as_str(), theme::accent_bold()),
            Span::styled(format!(" — {provider_name}"), theme::neutral()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!(
                    "{} ¢/kWh · {} months",
                    fmt_rate(plan.rate_cents_kwh),
                    fmt_term(plan.term_months)
                ),
                theme::muted(),
            ),
        ]));
        let mut detail = vec![
            Span::raw("  "),
            Span::styled(
                format!(
                    "Base fee {} · Renewable {}",
                    fmt_fee(plan.base_fee),
                    fmt_renewable(plan.renewable_percentage)
                ),
                theme::muted(),
            ),
        ];
        if let Some(savings) = plan.estimated_savings_vs_txu {
            detail.push(Span::styled(
                format!(" · {}/mo vs TXU", fmt_savings(Some(savings))),
                theme::savings_style(savings),
            ));
        }
        lines.push(Line::from(detail));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}
