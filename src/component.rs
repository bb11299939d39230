//! Teacher directory view
//!
//! A mountable component tying together the record source, the periodic
//! timer and the view state. Mounting starts an immediate fetch cycle plus a
//! recurring one; unmounting cancels the timer and closes the state to any
//! further mutation, including from cycles still in flight.

use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::directory::{
    CycleTicket, FetchError, FetchResult, ViewEvent, ViewState, POLL_INTERVAL_MS,
};
use crate::fetcher::{ClientConfig, DirectoryClient, PeriodicTimer, RecordSource};
use crate::render::{render, View};

/// Where a view is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, not yet mounted
    Idle,
    Mounted,
    /// Terminal. A view cannot be mounted again.
    Unmounted,
}

/// State shared with in-flight fetch cycles
struct Shared {
    source: Arc<dyn RecordSource>,
    state: watch::Sender<ViewState>,
    /// Last ticket handed out
    tickets: AtomicU64,
    /// Only written while holding the watch channel's lock, so an update
    /// either lands before unmount or not at all.
    mounted: AtomicBool,
}

impl Shared {
    /// The only place view state is mutated
    fn update(&self, event: ViewEvent) -> bool {
        self.state.send_if_modified(|state| {
            if !self.mounted.load(Ordering::SeqCst) {
                return false;
            }
            state.apply(event)
        })
    }

    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    fn next_ticket(&self) -> CycleTicket {
        self.tickets.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// The teacher directory component
pub struct TeacherDirectoryView {
    shared: Arc<Shared>,
    interval: Duration,
    timer: Option<PeriodicTimer>,
    lifecycle: Lifecycle,
}

impl TeacherDirectoryView {
    /// Create a view over any record source. The interval must be
    /// non-zero.
    pub fn new(source: Arc<dyn RecordSource>, interval: Duration) -> FetchResult<Self> {
        if interval.is_zero() {
            return Err(FetchError::Client(
                "poll interval must be greater than zero".to_string(),
            ));
        }

        let (state, _) = watch::channel(ViewState::new());

        Ok(Self {
            shared: Arc::new(Shared {
                source,
                state,
                tickets: AtomicU64::new(0),
                mounted: AtomicBool::new(false),
            }),
            interval,
            timer: None,
            lifecycle: Lifecycle::Idle,
        })
    }

    /// View over the built-in endpoint, polled every 3 seconds
    pub fn with_defaults() -> FetchResult<Self> {
        let client = DirectoryClient::new(ClientConfig::default())?;
        Self::new(Arc::new(client), Duration::from_millis(POLL_INTERVAL_MS))
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Start fetching: one cycle now, then one per interval.
    ///
    /// Must be called from within a tokio runtime. Mounting twice, or after
    /// unmount, does nothing.
    pub fn mount(&mut self) {
        if self.lifecycle != Lifecycle::Idle {
            tracing::warn!(lifecycle = ?self.lifecycle, "Ignoring mount of non-idle view");
            return;
        }

        self.shared.state.send_if_modified(|_| {
            self.shared.mounted.store(true, Ordering::SeqCst);
            false
        });
        self.lifecycle = Lifecycle::Mounted;

        tracing::info!(
            source = %self.shared.source.describe(),
            interval_ms = self.interval.as_millis() as u64,
            "Mounting teacher directory"
        );

        let shared = Arc::clone(&self.shared);
        self.timer = Some(PeriodicTimer::start(self.interval, move |_| {
            tokio::spawn(run_cycle(Arc::clone(&shared)));
        }));
    }

    /// Stop fetching and freeze the state. In-flight cycles may still
    /// complete but their results are discarded.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }

        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }

        // Taking the channel lock orders this after any update in progress
        self.shared.state.send_if_modified(|_| {
            self.shared.mounted.store(false, Ordering::SeqCst);
            false
        });
        self.lifecycle = Lifecycle::Unmounted;

        tracing::info!("Unmounted teacher directory");
    }

    /// Current state
    pub fn snapshot(&self) -> ViewState {
        self.shared.state.borrow().clone()
    }

    /// Current view tree
    pub fn view(&self) -> View {
        render(&self.shared.state.borrow())
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.shared.state.subscribe()
    }
}

impl Drop for TeacherDirectoryView {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// One fetch cycle: take a ticket, fetch, apply
async fn run_cycle(shared: Arc<Shared>) {
    if !shared.is_mounted() {
        return;
    }

    let ticket = shared.next_ticket();
    shared.update(ViewEvent::CycleStarted);
    tracing::debug!(ticket, "Fetch cycle started");

    let outcome = shared.source.fetch().await;

    match &outcome {
        Ok(records) => {
            tracing::debug!(ticket, records = records.len(), "Fetch cycle succeeded");
        }
        Err(e) => {
            tracing::warn!(ticket, kind = ?e.kind(), error = %e, "Fetch cycle failed");
        }
    }

    if !shared.is_mounted() {
        tracing::debug!(ticket, "View unmounted, discarding fetch result");
        return;
    }

    let applied = shared.update(ViewEvent::CycleFinished {
        ticket,
        outcome,
        at: Utc::now(),
    });

    if applied {
        let state = shared.state.borrow();
        tracing::info!(
            ticket,
            records = state.records.len(),
            male = state.tally.male,
            female = state.tally.female,
            error = state.error.is_some(),
            "Directory updated"
        );
    }
}
