//! Polling engine used by the live dashboards.
//!
//! Every poll fetches a fresh snapshot and compares it with the last one that
//! reached the screen. Only a snapshot that differs is written to the signal,
//! so identical payloads never trigger a re-render. Failed polls are dropped:
//! the last good values stay on screen and the next tick simply tries again.

use crate::shared::http::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Remembers the last applied snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotTracker<T> {
    last: Option<T>,
}

impl<T> Default for SnapshotTracker<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq + Clone> SnapshotTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when `next` differs from the last applied snapshot, in
    /// which case it becomes the new reference. The first offer always applies.
    pub fn offer(&mut self, next: &T) -> bool {
        if self.last.as_ref() == Some(next) {
            return false;
        }
        self.last = Some(next.clone());
        true
    }

    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// One polling tick: the snapshot to publish, if any.
///
/// Failed polls and snapshots identical to the last applied one yield `None`,
/// leaving the displayed values untouched.
pub fn apply_poll<T: PartialEq + Clone>(
    tracker: &mut SnapshotTracker<T>,
    result: Result<T, ApiError>,
) -> Option<T> {
    match result {
        Ok(next) => tracker.offer(&next).then_some(next),
        Err(e) => {
            log::debug!("poll failed, keeping last values: {}", e);
            None
        }
    }
}

/// Poll `fetch(key)` every `interval_ms` while `key` is `Some`.
///
/// Returns the signal holding the last applied snapshot. The signal is reset
/// to `None` whenever the key changes. The loop stops when the key changes or
/// the owning component is cleaned up.
pub fn use_polling<K, T, F, Fut>(
    key: Signal<Option<K>>,
    interval_ms: u32,
    fetch: F,
) -> ReadSignal<Option<T>>
where
    K: Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(K) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let (value, set_value) = signal(None::<T>);
    let generation = Arc::new(AtomicU64::new(0));

    {
        let generation = generation.clone();
        Effect::new(move |_| {
            let key = key.get();
            let my_generation = generation.fetch_add(1, Ordering::SeqCst) + 1;
            set_value.set(None);

            let Some(key) = key else {
                return;
            };

            log::debug!("polling started for {:?} every {} ms", key, interval_ms);
            let fetch = fetch.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let mut tracker = SnapshotTracker::new();
                let is_current = || generation.load(Ordering::SeqCst) == my_generation;
                while is_current() {
                    let result = fetch(key.clone()).await;
                    if !is_current() {
                        break;
                    }
                    if let Some(next) = apply_poll(&mut tracker, result) {
                        set_value.set(Some(next));
                    }
                    TimeoutFuture::new(interval_ms).await;
                }
                log::debug!("polling stopped for {:?}", key);
            });
        });
    }

    on_cleanup(move || {
        generation.fetch_add(1, Ordering::SeqCst);
    });

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_line_tracking::TrackingCounters;

    fn counters(good: u64) -> TrackingCounters {
        TrackingCounters {
            qc_good: good,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_snapshot_applies() {
        let mut t = SnapshotTracker::new();
        assert!(t.last().is_none());
        assert!(t.offer(&counters(0)));
        assert_eq!(t.last(), Some(&counters(0)));
    }

    #[test]
    fn test_identical_snapshot_is_ignored() {
        let mut t = SnapshotTracker::new();
        assert!(t.offer(&counters(10)));
        assert!(!t.offer(&counters(10)));
        assert!(!t.offer(&counters(10)));
    }

    #[test]
    fn test_any_field_change_applies() {
        let mut t = SnapshotTracker::new();
        let base = counters(10);
        t.offer(&base);

        let mut changed = base;
        changed.pqc_wira = 1;
        assert!(t.offer(&changed));
        assert_eq!(t.last(), Some(&changed));

        assert!(t.offer(&base));
    }

    #[test]
    fn test_apply_poll_publishes_changes_only() {
        let mut t = SnapshotTracker::new();
        assert_eq!(apply_poll(&mut t, Ok(counters(3))), Some(counters(3)));
        assert_eq!(apply_poll(&mut t, Ok(counters(3))), None);
        assert_eq!(apply_poll(&mut t, Ok(counters(4))), Some(counters(4)));
    }

    #[test]
    fn test_failed_poll_keeps_last_values() {
        let mut t = SnapshotTracker::new();
        apply_poll(&mut t, Ok(counters(7)));
        assert_eq!(apply_poll(&mut t, Err(ApiError::Timeout)), None);
        assert_eq!(apply_poll(&mut t, Err(ApiError::Status(503))), None);
        assert_eq!(t.last(), Some(&counters(7)));

        // Recovery with the same values publishes nothing new
        assert_eq!(apply_poll(&mut t, Ok(counters(7))), None);
    }

    #[test]
    fn test_reset() {
        let mut t = SnapshotTracker::new();
        t.offer(&counters(1));
        t.reset();
        assert!(t.offer(&counters(1)));
    }
}
