//! Directory State
//!
//! Holds the view state signal for one mounted directory and runs its fetch
//! cycles. Every mutation goes through [`DirectoryState::update`], which is
//! a no-op once the owning component has been cleaned up.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use docentes::directory::{CycleTicket, ViewEvent, ViewState, DEFAULT_ENDPOINT, POLL_INTERVAL_MS};
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::api;

/// State owned by one `TeacherDirectoryView`
#[derive(Clone)]
pub struct DirectoryState {
    /// Current view state
    pub view: RwSignal<ViewState>,
    mounted: Rc<Cell<bool>>,
    tickets: Rc<Cell<CycleTicket>>,
}

impl DirectoryState {
    /// Fresh state, mounted
    pub fn new() -> Self {
        Self {
            view: create_rw_signal(ViewState::new()),
            mounted: Rc::new(Cell::new(true)),
            tickets: Rc::new(Cell::new(0)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Stop accepting updates
    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    /// Apply an event if still mounted
    pub fn update(&self, event: ViewEvent) {
        if !self.is_mounted() {
            return;
        }
        self.view.update(|state| {
            state.apply(event);
        });
    }

    /// Ticket for a new cycle, greater than every earlier one
    pub fn next_ticket(&self) -> CycleTicket {
        let ticket = self.tickets.get() + 1;
        self.tickets.set(ticket);
        ticket
    }

    /// Fetch now, then every poll interval. Dropping the returned handle
    /// stops the timer.
    pub fn start_polling(&self) -> Interval {
        spawn_local(run_cycle(self.clone()));

        let state = self.clone();
        Interval::new(POLL_INTERVAL_MS as u32, move || {
            spawn_local(run_cycle(state.clone()));
        })
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

/// One fetch cycle: take a ticket, fetch, apply
async fn run_cycle(state: DirectoryState) {
    if !state.is_mounted() {
        return;
    }

    let ticket = state.next_ticket();
    state.update(ViewEvent::CycleStarted);

    let outcome = api::fetch_teachers(DEFAULT_ENDPOINT).await;
    if let Err(e) = &outcome {
        web_sys::console::warn_1(&format!("Fetch cycle {} failed: {}", ticket, e).into());
    }

    if !state.is_mounted() {
        return;
    }

    state.update(ViewEvent::CycleFinished {
        ticket,
        outcome,
        at: chrono::Utc::now(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use docentes::directory::TeacherRecord;
    use wasm_bindgen_test::*;

    fn finished(ticket: CycleTicket, records: Vec<TeacherRecord>) -> ViewEvent {
        ViewEvent::CycleFinished {
            ticket,
            outcome: Ok(records),
            at: chrono::Utc::now(),
        }
    }

    #[wasm_bindgen_test]
    fn test_update_applies_while_mounted() {
        let runtime = create_runtime();
        let state = DirectoryState::new();

        let ticket = state.next_ticket();
        state.update(finished(ticket, vec![TeacherRecord::new("1", "Ana", "F", "555-1")]));

        let view = state.view.get_untracked();
        assert!(view.has_completed_once);
        assert_eq!(view.tally.female, 1);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_update_after_unmount_is_ignored() {
        let runtime = create_runtime();
        let state = DirectoryState::new();

        let first = state.next_ticket();
        state.update(finished(first, vec![TeacherRecord::new("1", "Ana", "F", "555-1")]));
        let before = state.view.get_untracked();

        state.unmount();
        assert!(!state.is_mounted());

        let second = state.next_ticket();
        assert!(second > first);
        state.update(ViewEvent::CycleStarted);
        state.update(finished(second, vec![TeacherRecord::new("2", "Luis", "M", "555-2")]));

        assert_eq!(state.view.get_untracked(), before);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_clones_share_mount_flag_and_tickets() {
        let runtime = create_runtime();
        let state = DirectoryState::new();
        let other = state.clone();

        assert_eq!(state.next_ticket(), 1);
        assert_eq!(other.next_ticket(), 2);

        other.unmount();
        assert!(!state.is_mounted());

        runtime.dispose();
    }
}
