//! Benchmark rate derivation against the incumbent provider.

use crate::model::{Plan, ProviderDirectory};

/// Slug of the incumbent utility used as the comparison baseline.
pub const DEFAULT_BENCHMARK_SLUG: &str = "txu";

/// Rate used when no plan resolves to the benchmark provider, in the
/// same unit as `rate_cents_kwh`.
pub const FALLBACK_BENCHMARK_RATE: f64 = 1100.0;

/// Arithmetic mean rate across the benchmark provider's plans.
///
/// Candidates are plans whose resolved provider slug equals `slug`.
/// Candidates missing a rate are left out of both the numerator and the
/// denominator; averaging them in as zero would drag the benchmark down
/// whenever scrape data is incomplete. No candidates at all, or none
/// carrying a rate, falls back to [`FALLBACK_BENCHMARK_RATE`].
pub fn benchmark_rate<'a>(
    plans: impl IntoIterator<Item = &'a Plan>,
    directory: &ProviderDirectory,
    slug: &str,
) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for plan in plans {
        let is_benchmark = directory
            .resolve(plan)
            .map(|p| p.slug == slug)
            .unwrap_or(false);
        if !is_benchmark {
            continue;
        }
        if let Some(rate) = plan.rate_cents_kwh {
            sum += rate;
            count += 1;
        }
    }
    if count == 0 {
        FALLBACK_BENCHMARK_RATE
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{plan, provider, rated_plan};

    #[test]
    fn falls_back_when_no_provider_matches() {
        let dir = ProviderDirectory::new(&[provider(1, "Gexa", "gexa")]);
        let plans = vec![rated_plan(1, 1, 900.0), rated_plan(2, 1, 950.0)];
        assert_eq!(
            benchmark_rate(&plans, &dir, DEFAULT_BENCHMARK_SLUG),
            FALLBACK_BENCHMARK_RATE
        );
    }

    #[test]
    fn averages_matching_rates() {
        let dir = ProviderDirectory::new(&[
            provider(1, "TXU Energy", "txu"),
            provider(2, "Gexa", "gexa"),
        ]);
        let plans = vec![
            rated_plan(1, 1, 1050.0),
            rated_plan(2, 1, 1150.0),
            rated_plan(3, 2, 400.0), // different provider, ignored
        ];
        assert_eq!(benchmark_rate(&plans, &dir, "txu"), 1100.0);
    }

    #[test]
    fn rateless_candidates_do_not_skew_the_mean() {
        let dir = ProviderDirectory::new(&[provider(1, "TXU Energy", "txu")]);
        let plans = vec![
            rated_plan(1, 1, 1200.0),
            plan(2, 1), // benchmark plan with no scraped rate
        ];
        assert_eq!(benchmark_rate(&plans, &dir, "txu"), 1200.0);
    }

    #[test]
    fn falls_back_when_candidates_have_no_rates() {
        let dir = ProviderDirectory::new(&[provider(1, "TXU Energy", "txu")]);
        let plans = vec![plan(1, 1), plan(2, 1)];
        assert_eq!(benchmark_rate(&plans, &dir, "txu"), FALLBACK_BENCHMARK_RATE);
    }

    #[test]
    fn inlined_provider_counts_as_resolution() {
        let dir = ProviderDirectory::default(); // empty directory
        let mut p = rated_plan(1, 1, 980.0);
        p.provider = Some(provider(1, "TXU Energy", "txu"));
        assert_eq!(benchmark_rate(&[p], &dir, "txu"), 980.0);
    }
}
