//! Shared builders for TUI tests.

use std::sync::mpsc::{self, Receiver};

use chrono::DateTime;

use wattdeck_core::{Plan, Provider};

use crate::app::AppState;
use crate::worker::WorkerCommand;

/// App wired to dummy channels. The command receiver is returned so
/// tests can assert on (or simply keep alive) the worker side.
pub fn new_app() -> (AppState, Receiver<WorkerCommand>) {
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (_resp_tx, resp_rx) = mpsc::channel();
    (AppState::new(cmd_tx, resp_rx), cmd_rx)
}

pub fn plan(id: i64, provider_id: i64) -> Plan {
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
        last_scraped_at: DateTime::from_timestamp(1_714_560_000, 0).expect("valid timestamp"),
        estimated_savings_vs_txu: None,
        provider: None,
    }
}

pub fn rated_savings_plan(
    id: i64,
    provider_id: i64,
    rate: Option<f64>,
    savings: Option<f64>,
) -> Plan {
    Plan {
        rate_cents_kwh: rate,
        estimated_savings_vs_txu: savings,
        ..plan(id, provider_id)
    }
}

pub fn provider(id: i64, name: &str, slug: &str) -> Provider {
    Provider {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        website: None,
    }
}
