//! Conjunctive plan filter — pure, side-effect-free, order-preserving.

use crate::model::Plan;

/// User-selected filter predicates.
///
/// Each predicate is active only when its field is non-empty/set, and
/// all active predicates must pass (logical AND). Lives only in UI
/// session state; there is no global reset action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanFilter {
    /// Selected provider ids; empty means any provider. Set semantics,
    /// order irrelevant.
    pub provider_ids: Vec<i64>,
    /// Selected contract terms in months; empty means any term.
    pub terms: Vec<u32>,
    /// Restrict to plans with at least 50% renewable content.
    pub renewable_only: bool,
    /// Rate ceiling in cents per kWh; `None` means no ceiling.
    pub max_rate: Option<f64>,
}

impl PlanFilter {
    /// True when no predicate is active, i.e. `apply` is the identity.
    pub fn is_neutral(&self) -> bool {
        self.provider_ids.is_empty()
            && self.terms.is_empty()
            && !self.renewable_only
            && self.max_rate.is_none()
    }

    /// Whether a single plan passes every active predicate.
    pub fn matches(&self, plan: &Plan) -> bool {
        if !self.provider_ids.is_empty() && !self.provider_ids.contains(&plan.provider_id) {
            return false;
        }
        if !self.terms.is_empty() {
            // A plan missing its term is not filtered out by term
            // selection; only a known, unselected term excludes it.
            if let Some(term) = plan.term_months {
                if !self.terms.contains(&term) {
                    return false;
                }
            }
        }
        if self.renewable_only && plan.renewable_percentage.unwrap_or(0) < 50 {
            return false;
        }
        if let Some(ceiling) = self.max_rate {
            // Plans missing a rate are not excluded by the ceiling.
            if let Some(rate) = plan.rate_cents_kwh {
                if rate > ceiling {
                    return false;
                }
            }
        }
        true
    }

    /// The subset of `plans` passing all active predicates, in their
    /// original relative order.
    pub fn apply<'a>(&self, plans: &'a [Plan]) -> Vec<&'a Plan> {
        plans.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn toggle_provider(&mut self, id: i64) {
        if let Some(pos) = self.provider_ids.iter().position(|&p| p == id) {
            self.provider_ids.remove(pos);
        } else {
            self.provider_ids.push(id);
        }
    }

    pub fn toggle_term(&mut self, term: u32) {
        if let Some(pos) = self.terms.iter().position(|&t| t == term) {
            self.terms.remove(pos);
        } else {
            self.terms.push(term);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{plan, rated_plan};

    fn sample_plans() -> Vec<Plan> {
        let mut a = rated_plan(1, 1, 1050.0);
        a.term_months = Some(12);
        a.renewable_percentage = Some(100);

        let mut b = rated_plan(2, 2, 1400.0);
        b.term_months = Some(24);
        b.renewable_percentage = Some(10);

        let mut c = plan(3, 2);
        c.term_months = None; // no term, no rate
        c.renewable_percentage = None;

        vec![a, b, c]
    }

    #[test]
    fn neutral_filter_returns_everything() {
        let plans = sample_plans();
        let filter = PlanFilter::default();
        assert!(filter.is_neutral());
        let out = filter.apply(&plans);
        let ids: Vec<i64> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn provider_predicate_is_membership() {
        let plans = sample_plans();
        let filter = PlanFilter {
            provider_ids: vec![2],
            ..PlanFilter::default()
        };
        let ids: Vec<i64> = filter.apply(&plans).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn term_predicate_passes_plans_without_terms() {
        let plans = sample_plans();
        let filter = PlanFilter {
            terms: vec![12],
            ..PlanFilter::default()
        };
        // Plan 2 has term 24 (excluded); plan 3 has no term (kept).
        let ids: Vec<i64> = filter.apply(&plans).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn renewable_predicate_treats_missing_as_zero() {
        let plans = sample_plans();
        let filter = PlanFilter {
            renewable_only: true,
            ..PlanFilter::default()
        };
        let ids: Vec<i64> = filter.apply(&plans).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn renewable_boundary_is_inclusive_at_50() {
        let mut p = plan(9, 1);
        p.renewable_percentage = Some(50);
        let filter = PlanFilter {
            renewable_only: true,
            ..PlanFilter::default()
        };
        assert!(filter.matches(&p));
    }

    #[test]
    fn max_rate_keeps_plans_without_rates() {
        let plans = sample_plans();
        let filter = PlanFilter {
            max_rate: Some(1100.0),
            ..PlanFilter::default()
        };
        // Plan 2 at 1400 is over the ceiling; plan 3 has no rate.
        let ids: Vec<i64> = filter.apply(&plans).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn max_rate_boundary_is_inclusive() {
        let p = rated_plan(9, 1, 1100.0);
        let filter = PlanFilter {
            max_rate: Some(1100.0),
            ..PlanFilter::default()
        };
        assert!(filter.matches(&p));
    }

    #[test]
    fn predicates_are_conjunctive() {
        let plans = sample_plans();
        let filter = PlanFilter {
            provider_ids: vec![1, 2],
            terms: vec![12, 24],
            renewable_only: true,
            max_rate: Some(1200.0),
        };
        let ids: Vec<i64> = filter.apply(&plans).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn toggle_provider_twice_is_identity() {
        let mut filter = PlanFilter::default();
        filter.toggle_provider(4);
        assert_eq!(filter.provider_ids, vec![4]);
        filter.toggle_provider(4);
        assert!(filter.provider_ids.is_empty());
    }

    #[test]
    fn toggle_term_removes_from_middle() {
        let mut filter = PlanFilter::default();
        filter.toggle_term(6);
        filter.toggle_term(12);
        filter.toggle_term(24);
        filter.toggle_term(12);
        assert_eq!(filter.terms, vec![6, 24]);
    }
}
