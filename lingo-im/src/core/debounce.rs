//! Debounce primitive: delay an action until input quiesces.
//!
//! Holds at most one pending payload per logical channel. Scheduling again
//! before the deadline supersedes the previous payload; nothing here cancels
//! work that has already been dispatched downstream.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    payload: T,
    deadline: Instant,
}

/// Single-slot debouncer over an externally supplied clock.
#[derive(Debug)]
pub struct Debouncer<T> {
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm (or re-arm) the timer: any previously scheduled payload that has
    /// not yet fired is dropped.
    pub fn schedule(&mut self, payload: T, now: Instant, delay: Duration) {
        self.pending = Some(Pending {
            payload,
            deadline: now + delay,
        });
    }

    /// Drop the pending payload without dispatching it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the payload if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}
