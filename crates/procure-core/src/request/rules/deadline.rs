//! Deadline extraction.
//!
//! Two phrasings are recognized, tried in order:
//! - relative: "in 5 days", resolved as today + 5 days
//! - absolute: "by March 30", resolved in the current year
//!
//! Dates that cannot exist (February 30, out-of-range offsets) are reported
//! as no deadline.

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, warn};

use super::FieldExtractor;
use super::patterns::{ABSOLUTE_DEADLINE, MONTH_NAMES, RELATIVE_DEADLINE};
use crate::clock::Clock;

/// Deadline extractor anchored on a reference date.
pub struct DeadlineExtractor {
    today: NaiveDate,
}

impl DeadlineExtractor {
    /// Create an extractor that resolves deadlines against `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Create an extractor anchored on the clock's current date.
    pub fn from_clock<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::new(clock.today())
    }

    /// The date deadlines are resolved against.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn resolve_relative(&self, days: &str) -> Option<NaiveDate> {
        let date = days
            .parse::<u64>()
            .ok()
            .and_then(|n| self.today.checked_add_days(Days::new(n)));
        if date.is_none() {
            warn!("Deadline offset of {} days is out of range", days);
        }
        date
    }

    fn resolve_absolute(&self, month_name: &str, day: &str) -> Option<NaiveDate> {
        let month = month_from_name(month_name)?;
        let day: u32 = day.parse().ok()?;

        let date = NaiveDate::from_ymd_opt(self.today.year(), month, day);
        if date.is_none() {
            warn!("Ignoring invalid deadline date: {} {}", month_name, day);
        }
        date
    }
}

impl FieldExtractor for DeadlineExtractor {
    type Output = NaiveDate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let text = text.to_lowercase();

        if let Some(caps) = RELATIVE_DEADLINE.captures(&text) {
            debug!("Relative deadline: {}", &caps[0]);
            return self.resolve_relative(&caps[1]);
        }

        // Only the first "by <word> <day>" is considered.
        if let Some(caps) = ABSOLUTE_DEADLINE.captures(&text) {
            debug!("Absolute deadline: {}", &caps[0]);
            return self.resolve_absolute(&caps[1], &caps[2]);
        }

        None
    }
}

/// Extract a deadline from a request, resolved against `today`.
pub fn extract_deadline(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    DeadlineExtractor::new(today).extract(text)
}

/// Month number (1-12) for a full, lowercase English month name.
fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
}
