//! Savings highlight and no-savings banner decisions.
//!
//! `estimated_savings_vs_txu` is computed server-side; these functions
//! only decide what to surface.

use crate::model::Plan;

/// The plan with the largest strictly positive estimated savings.
///
/// Plans without a savings value are not candidates. The fold replaces
/// the current best only on strict less-than, so the first plan in list
/// order wins ties. A best candidate at zero or below is suppressed —
/// a negative-savings plan is never highlighted.
pub fn best_savings_plan<'a>(plans: impl IntoIterator<Item = &'a Plan>) -> Option<&'a Plan> {
    let mut best: Option<(&Plan, f64)> = None;
    for plan in plans {
        let Some(savings) = plan.estimated_savings_vs_txu else {
            continue;
        };
        match best {
            Some((_, current)) if current < savings => best = Some((plan, savings)),
            None => best = Some((plan, savings)),
            _ => {}
        }
    }
    match best {
        Some((plan, savings)) if savings > 0.0 => Some(plan),
        _ => None,
    }
}

/// Whether to show the "no plans beat the benchmark" banner.
///
/// True iff at least one plan carries a savings value and every such
/// value is ≤ 0. No savings data at all is insufficient data, not "no
/// savings", so the banner stays hidden.
pub fn show_no_savings_banner<'a>(plans: impl IntoIterator<Item = &'a Plan>) -> bool {
    let mut saw_value = false;
    for plan in plans {
        if let Some(savings) = plan.estimated_savings_vs_txu {
            if savings > 0.0 {
                return false;
            }
            saw_value = true;
        }
    }
    saw_value
}
