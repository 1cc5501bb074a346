//! Keyboard input dispatch — global keys → overlays → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{
    AppState, FilterRow, Overlay, Panel, MAX_RATE_CEIL, MAX_RATE_FLOOR, MAX_RATE_STEP,
};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Detail(_) => {
            handle_detail_overlay(app, key);
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Plans; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Filters; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Compare; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::Chart; return; }
        KeyCode::Char('5') => { app.active_panel = Panel::Help; return; }
        KeyCode::Char('r') => {
            // Manual reload. Not cancellable; last response wins.
            app.request_load();
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Plans => handle_plans_key(app, key),
        Panel::Filters => handle_filters_key(app, key),
        Panel::Compare => {} // display only
        Panel::Chart => {}   // display only
        Panel::Help => handle_help_key(app, key),
    }
}

fn handle_detail_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_plans_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.filtered_plans().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.plans_cursor + 1 < row_count {
                app.plans_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.plans_cursor = app.plans_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') => {
            // Toggle the cursor plan in the comparison selection.
            let id = app.filtered_plans().get(app.plans_cursor).map(|p| p.id);
            if let Some(id) = id {
                app.selection.toggle(id);
                let verb = if app.selection.contains(id) { "added to" } else { "removed from" };
                app.set_status(format!("Plan {verb} comparison ({} selected)", app.selection.len()));
            }
        }
        KeyCode::Enter => {
            let id = app.filtered_plans().get(app.plans_cursor).map(|p| p.id);
            if let Some(id) = id {
                app.overlay = Overlay::Detail(id);
            }
        }
        _ => {}
    }
}

fn handle_filters_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.filter_rows().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.filter_cursor + 1 < row_count {
                app.filter_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.filter_cursor = app.filter_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            match app.filter_row_at_cursor() {
                Some(FilterRow::Provider(id)) => app.filter.toggle_provider(id),
                Some(FilterRow::Term(term)) => app.filter.toggle_term(term),
                Some(FilterRow::Renewable) => {
                    app.filter.renewable_only = !app.filter.renewable_only;
                }
                Some(FilterRow::MaxRate) | None => {}
            }
            app.clamp_cursors();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            if let Some(FilterRow::MaxRate) = app.filter_row_at_cursor() {
                adjust_max_rate(app, -1);
                app.clamp_cursors();
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if let Some(FilterRow::MaxRate) = app.filter_row_at_cursor() {
                adjust_max_rate(app, 1);
                app.clamp_cursors();
            }
        }
        _ => {}
    }
}

/// Step the max-rate ceiling. No ceiling enters the stepper from the
/// top (h → 2000); stepping past the top clears it again.
fn adjust_max_rate(app: &mut AppState, direction: i32) {
    let next = match (app.filter.max_rate, direction) {
        (None, d) if d < 0 => Some(MAX_RATE_CEIL),
        (None, _) => None,
        (Some(current), d) => {
            let stepped = current + MAX_RATE_STEP * d as f64;
            if stepped > MAX_RATE_CEIL {
                None
            } else {
                Some(stepped.max(MAX_RATE_FLOOR))
            }
        }
    };
    app.filter.max_rate = next;
}

fn handle_help_key(app: &mut AppState, key: KeyEvent) {
    if let KeyCode::Char('e') = key.code {
        app.overlay = Overlay::ErrorHistory;
        app.error_scroll = 0;
    }
}
