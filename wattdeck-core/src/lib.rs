//! WattDeck Core — plan domain types, filter engine, and rate derivations.
//!
//! This crate contains everything that is independent of the terminal:
//! - Wire types for the plans API and the provider lookup directory (`model`)
//! - Conjunctive, order-preserving plan filter (`filter`)
//! - Benchmark rate against the incumbent provider (`benchmark`)
//! - Savings highlight and no-savings banner decisions (`savings`)
//! - Ordered selection set and comparison projection (`selection`)
//! - Blocking HTTP client behind the `PlanSource` seam (`api`)

pub mod api;
pub mod benchmark;
pub mod filter;
pub mod model;
pub mod savings;
pub mod selection;

pub use api::{ApiClient, ApiError, PlanSource, DEFAULT_API_BASE};
pub use benchmark::{benchmark_rate, DEFAULT_BENCHMARK_SLUG, FALLBACK_BENCHMARK_RATE};
pub use filter::PlanFilter;
pub use model::{Plan, Provider, ProviderDirectory};
pub use savings::{best_savings_plan, show_no_savings_banner};
pub use selection::Selection;

#[cfg(test)]
pub(crate) mod test_util;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything the TUI worker thread moves or
    /// shares across threads must be Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<model::Plan>();
        require_sync::<model::Plan>();
        require_send::<model::Provider>();
        require_sync::<model::Provider>();
        require_send::<model::ProviderDirectory>();
        require_sync::<model::ProviderDirectory>();
        require_send::<filter::PlanFilter>();
        require_sync::<filter::PlanFilter>();
        require_send::<api::ApiClient>();
        require_sync::<api::ApiClient>();
        require_send::<api::ApiError>();
        require_sync::<api::ApiError>();
    }
}
