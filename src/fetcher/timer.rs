//! Cancellable periodic timer
//!
//! Fires a callback immediately and then once per period on a tokio task.
//! Cancelling (or dropping) the handle stops the task; no tick is delivered
//! after [`PeriodicTimer::cancel`] returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running periodic timer
pub struct PeriodicTimer {
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl PeriodicTimer {
    /// Start the timer. `on_tick` receives the tick number, starting at 0.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(u64) + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut count = 0u64;
            loop {
                // First tick completes immediately
                ticker.tick().await;

                if flag.load(Ordering::SeqCst) {
                    break;
                }

                on_tick(count);
                count += 1;
            }
        });

        Self { cancelled, handle }
    }

    /// Stop the timer
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for PeriodicTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU64;

    fn counting_timer(period_ms: u64) -> (PeriodicTimer, Arc<AtomicU64>) {
        let ticks = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&ticks);
        let timer = PeriodicTimer::start(Duration::from_millis(period_ms), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (timer, ticks)
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_immediately_then_periodically() {
        let (_timer, ticks) = counting_timer(3000);

        advance(10).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        advance(3000).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);

        advance(6000).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (timer, ticks) = counting_timer(3000);
        advance(10).await;

        timer.cancel();
        assert!(timer.is_cancelled());

        advance(30_000).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let (timer, ticks) = counting_timer(1000);
        advance(1500).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);

        drop(timer);

        advance(10_000).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_numbers_are_sequential() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _timer = PeriodicTimer::start(Duration::from_millis(500), move |n| {
            sink.lock().unwrap().push(n);
        });

        advance(1200).await;

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }
}
