//! Overlay widgets — plan details dialog and error history.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::{centered_rect, fmt_fee, fmt_rate, fmt_renewable, fmt_savings, fmt_term};

/// Plan details dialog, keyed by plan id.
pub fn render_detail(f: &mut Frame, area: Rect, app: &AppState, id: i64) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Plan Details [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(plan) = app.plan_by_id(id) else {
        let text = Paragraph::new(Span::styled("Plan not found.", theme::muted()));
        f.render_widget(text, inner);
        return;
    };

    let provider = app.directory.resolve(plan);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(plan.name.as_str(), theme::accent_bold())));
    lines.push(Line::from(""));

    detail_line(&mut lines, "Provider", provider.map(|p| p.name.as_str()).unwrap_or(""));
    detail_line(
        &mut lines,
        "Rate",
        &format!("{} ¢/kWh", fmt_rate(plan.rate_cents_kwh)),
    );
    detail_line(
        &mut lines,
        "Term",
        &format!("{} months", fmt_term(plan.term_months)),
    );
    detail_line(&mut lines, "Base fee", &fmt_fee(plan.base_fee));
    detail_line(&mut lines, "Cancellation fee", &fmt_fee(plan.cancellation_fee));
    detail_line(
        &mut lines,
        "Renewable content",
        &fmt_renewable(plan.renewable_percentage),
    );
    if let Some(savings) = plan.estimated_savings_vs_txu {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>18}: ", "Savings vs TXU"), theme::muted()),
            Span::styled(
                format!("{}/mo", fmt_savings(Some(savings))),
                theme::savings_style(savings),
            ),
        ]));
    }
    detail_line(
        &mut lines,
        "Last scraped",
        &plan.last_scraped_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );

    if let Some(features) = &plan.features {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Features", theme::accent_bold())));
        lines.push(Line::from(Span::styled(format!("  {features}"), theme::muted())));
    }
    if let Some(url) = &plan.url {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Official details: ", theme::muted()),
            Span::styled(url.as_str(), theme::neutral().add_modifier(Modifier::UNDERLINED)),
        ]));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme::negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.error_scroll;
    let end = (start + visible_height).min(app.error_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let err = &app.error_history[i];
        let is_active = i == app.error_scroll;
        let style = if is_active {
            theme::negative().add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", err.timestamp.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(format!("[{}] ", err.category.label()), theme::warning()),
            Span::styled(&err.message, style),
        ]));

        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(&err.context, theme::muted()),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn detail_line(lines: &mut Vec<Line<'_>>, label: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:>18}: "), theme::muted()),
        Span::styled(value.to_string(), theme::accent()),
    ]));
}
