//! Shared builders for unit tests.

use chrono::{DateTime, Utc};

use crate::model::{Plan, Provider};

pub(crate) fn scrape_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_714_560_000, 0).expect("valid timestamp")
}

pub(crate) fn plan(id: i64, provider_id: i64) -> Plan {
    Plan {
        id,
        provider_id,
        name: format!("Plan {id}"),
        term_months: None,
        rate_cents_kwh: None,
        base_fee: None,
        cancellation_fee: None,
        renewable_percentage: None,
        features: None,
        url: None,
        last_scraped_at: scrape_time(),
        estimated_savings_vs_txu: None,
        provider: None,
    }
}

pub(crate) fn rated_plan(id: i64, provider_id: i64, rate: f64) -> Plan {
    Plan {
        rate_cents_kwh: Some(rate),
        ..plan(id, provider_id)
    }
}

pub(crate) fn provider(id: i64, name: &str, slug: &str) -> Provider {
    Provider {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        website: None,
    }
}
