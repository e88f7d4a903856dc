//! Latest-result holder shared by the repositories.
//!
//! Holds at most one terminal result and hands out `watch` receivers so late
//! observers can read it. Every fetch takes a new generation; a completion
//! carrying an outdated generation is dropped instead of overwriting a newer
//! result.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

/// Identifies one fetch against a [`LatestResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Latest-value slot with stale-completion protection.
#[derive(Debug)]
pub struct LatestResult<T> {
    generation: AtomicU64,
    slot: watch::Sender<Option<T>>,
}

impl<T: Clone + Send + Sync> LatestResult<T> {
    /// Creates an empty holder ("no result yet").
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            generation: AtomicU64::new(0),
            slot,
        }
    }

    /// Starts a new fetch: clears the slot and returns the pending fetch.
    ///
    /// If the returned guard is dropped without publishing (the fetch future
    /// was cancelled), the value seen before `begin` is put back, provided no
    /// newer fetch has started since.
    pub fn begin(&self) -> PendingFetch<'_, T> {
        let mut generation = Generation(0);
        let mut previous = None;
        self.slot.send_modify(|value| {
            generation = Generation(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
            previous = value.take();
        });
        PendingFetch {
            latest: self,
            generation,
            previous: Some(previous),
        }
    }

    /// Handle for observers; always sees the latest value.
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.slot.subscribe()
    }
}

impl<T> LatestResult<T> {
    /// Writes `value` if `generation` is still the newest fetch.
    fn replace_if_current(&self, generation: Generation, value: Option<T>) -> bool {
        self.slot.send_if_modified(|slot| {
            if self.generation.load(Ordering::SeqCst) != generation.0 {
                return false;
            }
            *slot = value;
            true
        })
    }
}

impl<T: Clone + Send + Sync> Default for LatestResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A fetch started with [`LatestResult::begin`] that has not completed yet.
#[derive(Debug)]
pub struct PendingFetch<'a, T> {
    latest: &'a LatestResult<T>,
    generation: Generation,
    // `None` once published.
    previous: Option<Option<T>>,
}

impl<T> PendingFetch<'_, T> {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Publishes `result` if this is still the newest fetch.
    ///
    /// Returns `false` when the completion was stale and got discarded.
    pub fn publish(mut self, result: T) -> bool {
        self.previous = None;
        self.latest.replace_if_current(self.generation, Some(result))
    }
}

impl<T> Drop for PendingFetch<'_, T> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.latest.replace_if_current(self.generation, previous);
        }
    }
}
