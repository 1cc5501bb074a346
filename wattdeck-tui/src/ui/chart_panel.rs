//! Panel 4 — Chart: grouped bars of the first five filtered plans'
//! rates against the TXU benchmark.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, CHART_PLAN_COUNT};
use crate::theme;
use crate::ui::truncate;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let filtered = app.filtered_plans();

    if filtered.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No plans to chart. Load data or relax the filters.",
                theme::muted(),
            )),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let benchmark = app.benchmark();

    let mut chart = BarChart::default()
        .bar_width(9)
        .bar_gap(1)
        .group_gap(3)
        .max(2000);

    for plan in filtered.iter().take(CHART_PLAN_COUNT) {
        let rate = plan.rate_cents_kwh.unwrap_or(0.0);
        let bars = [
            Bar::default()
                .value(rate.round() as u64)
                .text_value(format!("{rate:.0}"))
                .style(theme::accent()),
            Bar::default()
                .value(benchmark.round() as u64)
                .text_value(format!("{benchmark:.0}"))
                .style(theme::neutral()),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::styled(truncate(&plan.name, 18), theme::muted()))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}
