//! Record builder combining every field extractor.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::models::record::Record;

use super::rules::{
    DeadlineExtractor, FieldExtractor, LocationExtractor, MaterialExtractor, ProjectExtractor,
    QuantityUnitExtractor, UrgencyClassifier,
};

/// Turns free-text requests into [`Record`]s.
///
/// The extractors run independently on the same text; none sees another's
/// output. Deadlines are resolved against the parser's clock.
pub struct RequestParser<C: Clock = SystemClock> {
    clock: C,
}

impl RequestParser<SystemClock> {
    /// Create a parser that reads the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for RequestParser<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RequestParser<C> {
    /// Create a parser with a custom clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The parser's clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Build a record, reading the clock once.
    pub fn parse(&self, text: &str) -> Record {
        self.parse_at(text, self.clock.today())
    }

    /// Build a record with deadlines resolved against `today`.
    pub fn parse_at(&self, text: &str, today: NaiveDate) -> Record {
        let (quantity, unit) = match QuantityUnitExtractor::new().extract(text) {
            Some((quantity, unit)) => (Some(quantity), Some(unit)),
            None => (None, None),
        };

        let record = Record {
            material_name: MaterialExtractor::new().extract(text),
            quantity,
            unit,
            project_name: ProjectExtractor::new().extract(text),
            location: LocationExtractor::new().extract(text),
            urgency: UrgencyClassifier::new().classify(text),
            deadline: DeadlineExtractor::new(today).extract(text),
        };

        debug!(
            "Parsed request ({} missing fields): {}",
            record.missing_fields().len(),
            text.trim()
        );

        record
    }

    /// Build one record per non-blank line, in order.
    ///
    /// The clock is read once, so every record agrees on "today".
    pub fn parse_lines(&self, text: &str) -> Vec<Record> {
        let today = self.clock.today();
        let records: Vec<Record> = request_lines(text)
            .map(|line| self.parse_at(line, today))
            .collect();

        info!("Parsed {} requests (reference date {})", records.len(), today);
        records
    }
}

/// Non-blank lines of `text`.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn request_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
}
