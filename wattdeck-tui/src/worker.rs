//! Background worker thread — owns the blocking HTTP client.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The
//! plan and provider requests have no ordering dependency, so the
//! worker issues them together and joins both; the UI receives a single
//! message carrying both lists so they are swapped in together.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use wattdeck_core::{Plan, PlanSource, Provider};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    LoadData,
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    DataLoaded {
        plans: Vec<Plan>,
        providers: Vec<Provider>,
    },
    LoadFailed {
        error: String,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker<S: PlanSource + 'static>(
    source: S,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("wattdeck-worker".into())
        .spawn(move || {
            worker_loop(&source, rx, tx);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop<S: PlanSource>(source: &S, rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::LoadData) => handle_load(source, &tx),
        }
    }
}

fn handle_load<S: PlanSource>(source: &S, tx: &Sender<WorkerResponse>) {
    let (plans, providers) = thread::scope(|s| {
        let providers = s.spawn(|| source.providers());
        let plans = source.plans();
        let providers = providers
            .join()
            .expect("provider fetch thread panicked");
        (plans, providers)
    });

    match (plans, providers) {
        (Ok(plans), Ok(providers)) => {
            let _ = tx.send(WorkerResponse::DataLoaded { plans, providers });
        }
        (Err(e), _) | (_, Err(e)) => {
            let _ = tx.send(WorkerResponse::LoadFailed {
                error: e.to_string(),
            });
        }
    }
}
