//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via
//! channels; filtered views, the benchmark rate, and the savings
//! decisions are pure recomputations over the loaded lists, re-derived
//! whenever something renders.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;

use wattdeck_core::{
    benchmark_rate, best_savings_plan, show_no_savings_banner, Plan, PlanFilter, Provider,
    ProviderDirectory, Selection, DEFAULT_BENCHMARK_SLUG,
};

use crate::worker::{WorkerCommand, WorkerResponse};

/// Term lengths offered as filter toggles.
pub const TERM_OPTIONS: [u32; 4] = [6, 12, 24, 36];

/// Max-rate stepper bounds, in the rate field's unit.
pub const MAX_RATE_FLOOR: f64 = 800.0;
pub const MAX_RATE_CEIL: f64 = 2000.0;
pub const MAX_RATE_STEP: f64 = 50.0;

/// How many plans the rate chart shows.
pub const CHART_PLAN_COUNT: usize = 5;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Plans,
    Filters,
    Compare,
    Chart,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Plans => 0,
            Panel::Filters => 1,
            Panel::Compare => 2,
            Panel::Chart => 3,
            Panel::Help => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Plans),
            1 => Some(Panel::Filters),
            2 => Some(Panel::Compare),
            3 => Some(Panel::Chart),
            4 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Plans => "Plans",
            Panel::Filters => "Filters",
            Panel::Compare => "Compare",
            Panel::Chart => "Chart",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 5).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 4) % 5).unwrap()
    }
}

/// Load lifecycle for the two-request fetch. `Failed` is an explicit
/// state rather than a forever-spinning indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    Failed(String),
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Network => "NET",
            ErrorCategory::Data => "DATA",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// A selectable row in the Filters panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRow {
    Provider(i64),
    Term(u32),
    Renewable,
    MaxRate,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Plan details dialog, keyed by plan id.
    Detail(i64),
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Loaded data
    pub load_phase: LoadPhase,
    pub plans: Vec<Plan>,
    pub providers: Vec<Provider>,
    pub directory: ProviderDirectory,

    // Session state
    pub filter: PlanFilter,
    pub selection: Selection,
    pub plans_cursor: usize,
    pub filter_cursor: usize,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(worker_tx: Sender<WorkerCommand>, worker_rx: Receiver<WorkerResponse>) -> Self {
        Self {
            active_panel: Panel::Plans,
            running: true,
            load_phase: LoadPhase::Loading,
            plans: Vec::new(),
            providers: Vec::new(),
            directory: ProviderDirectory::default(),
            filter: PlanFilter::default(),
            selection: Selection::default(),
            plans_cursor: 0,
            filter_cursor: 0,
            worker_tx,
            worker_rx,
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::None,
        }
    }

    /// Ask the worker for a fresh load. Re-invocable; an in-flight load
    /// is not cancelled and the last response wins.
    pub fn request_load(&mut self) {
        self.load_phase = LoadPhase::Loading;
        let _ = self.worker_tx.send(WorkerCommand::LoadData);
        self.set_status("Loading plans...");
    }

    /// Both lists are replaced together; the worker sends a single
    /// message so the UI never sees plans without their providers.
    pub fn finish_load(&mut self, plans: Vec<Plan>, providers: Vec<Provider>) {
        self.directory = ProviderDirectory::new(&providers);
        self.plans = plans;
        self.providers = providers;
        self.load_phase = LoadPhase::Loaded;
        self.clamp_cursors();
    }

    pub fn fail_load(&mut self, error: String) {
        self.load_phase = LoadPhase::Failed(error.clone());
        self.push_error(ErrorCategory::Network, error, "data load".into());
    }

    pub fn is_loading(&self) -> bool {
        self.load_phase == LoadPhase::Loading
    }

    // ── Derived views ────────────────────────────────────────────────

    /// Plans passing the current filter, in original order.
    pub fn filtered_plans(&self) -> Vec<&Plan> {
        self.filter.apply(&self.plans)
    }

    /// Benchmark rate over the currently filtered plans.
    pub fn benchmark(&self) -> f64 {
        let filtered = self.filtered_plans();
        benchmark_rate(filtered.iter().copied(), &self.directory, DEFAULT_BENCHMARK_SLUG)
    }

    /// The highlighted best-savings plan among filtered plans, if any.
    pub fn best_savings(&self) -> Option<&Plan> {
        let filtered = self.filtered_plans();
        best_savings_plan(filtered.iter().copied())
    }

    /// Whether the "no savings available" banner should show.
    pub fn show_banner(&self) -> bool {
        let filtered = self.filtered_plans();
        show_no_savings_banner(filtered.iter().copied())
    }

    /// Selected plans projected against the full plan list.
    pub fn selected_plans(&self) -> Vec<&Plan> {
        self.selection.project(&self.plans)
    }

    pub fn plan_by_id(&self, id: i64) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }

    // ── Filters panel rows ───────────────────────────────────────────

    /// Selectable rows in display order: providers, terms, renewable
    /// switch, max-rate stepper.
    pub fn filter_rows(&self) -> Vec<FilterRow> {
        let mut rows: Vec<FilterRow> = self
            .providers
            .iter()
            .map(|p| FilterRow::Provider(p.id))
            .collect();
        rows.extend(TERM_OPTIONS.iter().map(|&t| FilterRow::Term(t)));
        rows.push(FilterRow::Renewable);
        rows.push(FilterRow::MaxRate);
        rows
    }

    pub fn filter_row_at_cursor(&self) -> Option<FilterRow> {
        self.filter_rows().get(self.filter_cursor).copied()
    }

    /// Keep cursors inside their lists after data or filters change.
    pub fn clamp_cursors(&mut self) {
        let filtered_len = self.filtered_plans().len();
        if self.plans_cursor >= filtered_len {
            self.plans_cursor = filtered_len.saturating_sub(1);
        }
        let row_count = self.filter_rows().len();
        if self.filter_cursor >= row_count {
            self.filter_cursor = row_count.saturating_sub(1);
        }
    }

    // ── Status / errors ──────────────────────────────────────────────

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
