//! Wire types for the plans API and the provider lookup directory.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A retail electricity plan as served by `GET /plans`.
///
/// Owned by the remote API; the client treats it as immutable read-only
/// data for the session. Most numeric fields are optional because the
/// server's scrapers cannot always recover them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub provider_id: i64,
    pub name: String,
    #[serde(default)]
    pub term_months: Option<u32>,
    /// Rate in cents per kWh.
    #[serde(default)]
    pub rate_cents_kwh: Option<f64>,
    #[serde(default)]
    pub base_fee: Option<f64>,
    #[serde(default)]
    pub cancellation_fee: Option<f64>,
    #[serde(default)]
    pub renewable_percentage: Option<i64>,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub last_scraped_at: DateTime<Utc>,
    /// Estimated monthly dollar savings against the benchmark provider,
    /// precomputed server-side. Consumed here, never derived.
    #[serde(default)]
    pub estimated_savings_vs_txu: Option<f64>,
    /// Some endpoints inline the provider record on the plan.
    #[serde(default)]
    pub provider: Option<Provider>,
}

/// An electricity retailer as served by `GET /providers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: i64,
    pub name: String,
    /// Stable machine-readable key ("txu", "reliant", ...).
    pub slug: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// Id → provider lookup built from the loaded provider list.
///
/// A `provider_id` with no entry is not an error: name display degrades
/// to an empty string.
#[derive(Debug, Clone, Default)]
pub struct ProviderDirectory {
    by_id: HashMap<i64, Provider>,
}

impl ProviderDirectory {
    pub fn new(providers: &[Provider]) -> Self {
        Self {
            by_id: providers.iter().map(|p| (p.id, p.clone())).collect(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&Provider> {
        self.by_id.get(&id)
    }

    /// Display name for a provider id; unknown ids yield "".
    pub fn name_of(&self, id: i64) -> &str {
        self.by_id.get(&id).map(|p| p.name.as_str()).unwrap_or("")
    }

    /// Resolve a plan's provider: the inlined record wins, then the
    /// directory, then nothing.
    pub fn resolve<'a>(&'a self, plan: &'a Plan) -> Option<&'a Provider> {
        plan.provider
            .as_ref()
            .or_else(|| self.by_id.get(&plan.provider_id))
    }
}
