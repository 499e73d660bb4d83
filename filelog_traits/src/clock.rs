use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};

/// Wall-clock abstraction used to stamp log lines and derive dated file names.
///
/// - now(): current local date and time, without timezone
/// - today(): date part of `now()`
pub trait WallClock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Default clock backed by the host's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl WallClock for SystemClock {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Deterministic clock whose time only changes when told to.
///
/// Clones share the same instant, so a test can keep a handle and move time
/// forward while a logger owns another clone.
#[derive(Debug, Clone)]
pub struct FixedClock {
    at: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            at: Arc::new(Mutex::new(at)),
        }
    }

    /// Move the clock forward by `d`.
    pub fn advance(&self, d: TimeDelta) {
        if let Ok(mut at) = self.at.lock() {
            *at += d;
        }
    }

    /// Jump to an absolute instant.
    pub fn set(&self, at: NaiveDateTime) {
        if let Ok(mut cur) = self.at.lock() {
            *cur = at;
        }
    }
}

impl WallClock for FixedClock {
    /// Falls back to 1970-01-01 00:00:00 if the lock is poisoned.
    fn now(&self) -> NaiveDateTime {
        self.at.lock().map(|g| *g).unwrap_or_default()
    }
}
