//! core::clock
//!
//! Clock seam for date-dependent logic.
//!
//! Overdue checks are evaluated fresh against "today" on every call, so the
//! current date is injected rather than read ambiently. Production code uses
//! [`SystemClock`]; tests use [`ManualClock`] and move the date by hand.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use circulate::core::clock::{Clock, ManualClock};
//!
//! let clock = ManualClock::new(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
//! assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
//!
//! clock.advance_days(10);
//! assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 8, 11).unwrap());
//! ```

use std::sync::Mutex;

use chrono::{Days, Local, NaiveDate};

/// Source of the current date.
pub trait Clock: Send + Sync {
    /// The current date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock dates in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A manually-driven clock for tests.
///
/// Thread-safe; the date only changes through [`set`](ManualClock::set) or
/// [`advance_days`](ManualClock::advance_days).
#[derive(Debug)]
pub struct ManualClock {
    today: Mutex<NaiveDate>,
}

impl ManualClock {
    /// Create a clock frozen at the given date.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// Set the current date.
    pub fn set(&self, today: NaiveDate) {
        *self.lock() = today;
    }

    /// Move the date forward by whole days.
    pub fn advance_days(&self, days: u64) {
        let mut guard = self.lock();
        *guard = guard.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NaiveDate> {
        // The guarded value is a plain date; a poisoning panic elsewhere
        // cannot leave it torn.
        self.today.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.lock()
    }
}
