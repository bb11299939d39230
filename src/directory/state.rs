//! View state container
//!
//! `ViewState` is a plain value. The only way to change it is
//! [`ViewState::apply`], which the fetch loop calls when a cycle starts and
//! when it finishes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::FetchResult;
use super::tally::tally;
use super::types::{GenderTally, TeacherRecord};

/// Monotonic ticket handed to each fetch cycle when it starts.
///
/// Tickets start at 1; 0 means "nothing applied yet".
pub type CycleTicket = u64;

/// Something that happened to a fetch cycle
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// A cycle was dispatched
    CycleStarted,
    /// A cycle resolved
    CycleFinished {
        ticket: CycleTicket,
        outcome: FetchResult<Vec<TeacherRecord>>,
        at: DateTime<Utc>,
    },
}

/// Everything the renderer needs, owned by one mounted view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    /// Records from the latest successful cycle
    pub records: Vec<TeacherRecord>,
    /// Tally of `records`, rebuilt on every success
    pub tally: GenderTally,
    pub loading: bool,
    /// User-facing error from the latest applied cycle, if it failed
    pub error: Option<String>,
    /// At least one cycle has succeeded
    pub has_completed_once: bool,
    /// When the latest successful cycle was applied
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(skip)]
    last_applied: CycleTicket,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Fresh state: no records, zero tally, loading
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            tally: GenderTally::default(),
            loading: true,
            error: None,
            has_completed_once: false,
            last_updated: None,
            last_applied: 0,
        }
    }

    /// Ticket of the newest completion applied so far
    pub fn last_applied(&self) -> CycleTicket {
        self.last_applied
    }

    /// Apply an event. Returns `true` if the state changed.
    ///
    /// A completion whose ticket is not newer than the last applied one is
    /// dropped, so an overlapping slow cycle can never overwrite a newer
    /// result.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        match event {
            ViewEvent::CycleStarted => {
                let changed = !self.loading;
                self.loading = true;
                changed
            }
            ViewEvent::CycleFinished {
                ticket,
                outcome,
                at,
            } => {
                if ticket <= self.last_applied {
                    tracing::debug!(
                        ticket,
                        last_applied = self.last_applied,
                        "Dropping out-of-order fetch completion"
                    );
                    return false;
                }
                self.last_applied = ticket;
                self.loading = false;

                match outcome {
                    Ok(records) => {
                        self.tally = tally(&records);
                        self.records = records;
                        self.error = None;
                        self.has_completed_once = true;
                        self.last_updated = Some(at);
                    }
                    Err(e) => {
                        // Records and tally stay as they were
                        self.error = Some(e.user_message().to_string());
                    }
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::error::FetchError;

    fn records() -> Vec<TeacherRecord> {
        vec![
            TeacherRecord::new("1", "Ana", "F", "555-1"),
            TeacherRecord::new("2", "Luis", "M", "555-2"),
            TeacherRecord::new("3", "Sam", "X", "555-3"),
        ]
    }

    fn finished(ticket: CycleTicket, outcome: FetchResult<Vec<TeacherRecord>>) -> ViewEvent {
        ViewEvent::CycleFinished {
            ticket,
            outcome,
            at: Utc::now(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();

        assert!(state.records.is_empty());
        assert_eq!(state.tally, GenderTally::default());
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(!state.has_completed_once);
        assert_eq!(state.last_applied(), 0);
    }

    #[test]
    fn test_success_replaces_records_and_tally() {
        let mut state = ViewState::new();

        assert!(state.apply(finished(1, Ok(records()))));

        assert_eq!(state.records.len(), 3);
        assert_eq!(state.tally, GenderTally { male: 1, female: 1 });
        assert!(state.tally.total() <= state.records.len() as u64);
        assert!(!state.loading);
        assert!(state.has_completed_once);
        assert!(state.last_updated.is_some());
    }

    #[test]
    fn test_failure_keeps_stale_records() {
        let mut state = ViewState::new();
        state.apply(finished(1, Ok(records())));
        let before = state.records.clone();
        let tally_before = state.tally;

        state.apply(ViewEvent::CycleStarted);
        state.apply(finished(2, Err(FetchError::Transport("refused".into()))));

        assert_eq!(state.records, before);
        assert_eq!(state.tally, tally_before);
        assert_eq!(state.error.as_deref(), Some("Error en la solicitud"));
        assert!(!state.loading);
        assert!(state.has_completed_once);
    }

    #[test]
    fn test_validation_failure_does_not_touch_records() {
        let mut state = ViewState::new();

        state.apply(finished(
            1,
            Err(FetchError::Validation("expected a JSON array".into())),
        ));

        assert!(state.records.is_empty());
        assert!(state.error.is_some());
        assert!(!state.has_completed_once);
        assert!(!state.loading);
    }

    #[test]
    fn test_success_clears_error() {
        let mut state = ViewState::new();
        state.apply(finished(1, Err(FetchError::Transport("down".into()))));
        assert!(state.error.is_some());

        state.apply(finished(2, Ok(records())));

        assert!(state.error.is_none());
    }

    #[test]
    fn test_out_of_order_completion_is_dropped() {
        let mut state = ViewState::new();
        let newer = vec![TeacherRecord::new("9", "Eva", "F", "1")];

        // Cycle 2 resolves before cycle 1
        assert!(state.apply(finished(2, Ok(newer.clone()))));
        assert!(!state.apply(finished(1, Err(FetchError::Transport("slow".into())))));

        assert_eq!(state.records, newer);
        assert!(state.error.is_none());
        assert_eq!(state.last_applied(), 2);
    }

    #[test]
    fn test_cycle_started_sets_loading() {
        let mut state = ViewState::new();
        state.apply(finished(1, Ok(records())));
        assert!(!state.loading);

        assert!(state.apply(ViewEvent::CycleStarted));
        assert!(state.loading);
        // Already loading
        assert!(!state.apply(ViewEvent::CycleStarted));
    }
}
