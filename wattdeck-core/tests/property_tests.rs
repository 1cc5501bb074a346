//! Property tests for filter and selection invariants.
//!
//! Uses proptest to verify:
//! 1. Filtering yields an order-preserving subsequence of its input
//! 2. A neutral filter is the identity
//! 3. Every surviving plan satisfies every active predicate
//! 4. Selection toggling is an involution
//! 5. The benchmark rate is the fallback or bounded by candidate rates

use chrono::DateTime;
use proptest::prelude::*;
use wattdeck_core::{benchmark_rate, Plan, PlanFilter, Provider, ProviderDirectory, Selection};

// ── Strategies (proptest) ────────────────────────────────────────────

#[derive(Debug, Clone)]
struct PlanSeed {
    provider_id: i64,
    term_months: Option<u32>,
    rate_cents_kwh: Option<f64>,
    renewable_percentage: Option<i64>,
}

fn arb_plan_seed() -> impl Strategy<Value = PlanSeed> {
    (
        1..5i64,
        prop::option::of(prop::sample::select(vec![6u32, 12, 24, 36])),
        prop::option::of(800.0..2000.0f64),
        prop::option::of(0..=100i64),
    )
        .prop_map(|(provider_id, term_months, rate_cents_kwh, renewable_percentage)| PlanSeed {
            provider_id,
            term_months,
            rate_cents_kwh,
            renewable_percentage,
        })
}

fn build_plans(seeds: Vec<PlanSeed>) -> Vec<Plan> {
    seeds
        .into_iter()
        .enumerate()
        .map(|(i, seed)| Plan {
            id: i as i64 + 1,
            provider_id: seed.provider_id,
            name: format!("Plan {}", i + 1),
            term_months: seed.term_months,
            rate_cents_kwh: seed.rate_cents_kwh,
            base_fee: None,
            cancellation_fee: None,
            renewable_percentage: seed.renewable_percentage,
            features: None,
            url: None,
            last_scraped_at: DateTime::from_timestamp(1_714_560_000, 0).unwrap(),
            estimated_savings_vs_txu: None,
            provider: None,
        })
        .collect()
}

fn arb_filter() -> impl Strategy<Value = PlanFilter> {
    (
        prop::collection::vec(1..5i64, 0..4),
        prop::collection::vec(prop::sample::select(vec![6u32, 12, 24, 36]), 0..4),
        any::<bool>(),
        prop::option::of(800.0..2000.0f64),
    )
        .prop_map(|(provider_ids, terms, renewable_only, max_rate)| PlanFilter {
            provider_ids,
            terms,
            renewable_only,
            max_rate,
        })
}

/// True if `sub` appears in `sup` in order (by plan id).
fn is_subsequence(sub: &[i64], sup: &[i64]) -> bool {
    let mut it = sup.iter();
    sub.iter().all(|id| it.any(|s| s == id))
}

// ── 1. Order-preserving subsequence ──────────────────────────────────

proptest! {
    /// For all plan lists and filter states, the filtered output is an
    /// order-preserving subset of the input.
    #[test]
    fn filter_output_is_subsequence(
        seeds in prop::collection::vec(arb_plan_seed(), 0..30),
        filter in arb_filter(),
    ) {
        let plans = build_plans(seeds);
        let input_ids: Vec<i64> = plans.iter().map(|p| p.id).collect();
        let output_ids: Vec<i64> = filter.apply(&plans).iter().map(|p| p.id).collect();
        prop_assert!(is_subsequence(&output_ids, &input_ids));
    }

    /// An all-empty/neutral filter state returns the input unchanged.
    #[test]
    fn neutral_filter_is_identity(
        seeds in prop::collection::vec(arb_plan_seed(), 0..30),
    ) {
        let plans = build_plans(seeds);
        let filter = PlanFilter::default();
        prop_assert!(filter.is_neutral());
        let output_ids: Vec<i64> = filter.apply(&plans).iter().map(|p| p.id).collect();
        let input_ids: Vec<i64> = plans.iter().map(|p| p.id).collect();
        prop_assert_eq!(output_ids, input_ids);
    }

    /// Every plan surviving the filter satisfies every active predicate.
    #[test]
    fn survivors_match_all_predicates(
        seeds in prop::collection::vec(arb_plan_seed(), 0..30),
        filter in arb_filter(),
    ) {
        let plans = build_plans(seeds);
        for plan in filter.apply(&plans) {
            if !filter.provider_ids.is_empty() {
                prop_assert!(filter.provider_ids.contains(&plan.provider_id));
            }
            if let (false, Some(term)) = (filter.terms.is_empty(), plan.term_months) {
                prop_assert!(filter.terms.contains(&term));
            }
            if filter.renewable_only {
                prop_assert!(plan.renewable_percentage.unwrap_or(0) >= 50);
            }
            if let (Some(ceiling), Some(rate)) = (filter.max_rate, plan.rate_cents_kwh) {
                prop_assert!(rate <= ceiling);
            }
        }
    }
}

// ── 4. Selection involution ──────────────────────────────────────────

proptest! {
    /// Toggling any id twice returns the selection to its original
    /// contents and order.
    #[test]
    fn toggle_twice_is_identity(
        initial in prop::collection::vec(1..100i64, 0..10),
        id in 1..100i64,
    ) {
        let mut sel = Selection::default();
        let mut seen = std::collections::HashSet::new();
        for i in initial {
            if seen.insert(i) {
                sel.toggle(i);
            }
        }
        let before = sel.clone();
        sel.toggle(id);
        sel.toggle(id);
        prop_assert_eq!(sel, before);
    }
}

// ── 5. Benchmark bounds ──────────────────────────────────────────────

proptest! {
    /// The benchmark is either the fallback constant or lies within the
    /// min/max of the benchmark provider's scraped rates.
    #[test]
    fn benchmark_is_fallback_or_bounded(
        seeds in prop::collection::vec(arb_plan_seed(), 0..30),
    ) {
        let plans = build_plans(seeds);
        let providers = vec![
            Provider { id: 1, name: "TXU Energy".into(), slug: "txu".into(), website: None },
            Provider { id: 2, name: "Gexa".into(), slug: "gexa".into(), website: None },
            Provider { id: 3, name: "Reliant".into(), slug: "reliant".into(), website: None },
            Provider { id: 4, name: "Direct Energy".into(), slug: "direct-energy".into(), website: None },
        ];
        let dir = ProviderDirectory::new(&providers);
        let rate = benchmark_rate(&plans, &dir, "txu");

        let candidate_rates: Vec<f64> = plans
            .iter()
            .filter(|p| p.provider_id == 1)
            .filter_map(|p| p.rate_cents_kwh)
            .collect();

        if candidate_rates.is_empty() {
            prop_assert_eq!(rate, wattdeck_core::FALLBACK_BENCHMARK_RATE);
        } else {
            let min = candidate_rates.iter().copied().fold(f64::INFINITY, f64::min);
            let max = candidate_rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(rate >= min - 1e-9 && rate <= max + 1e-9);
        }
    }
}
