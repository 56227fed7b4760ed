//! Core library for procurement request extraction.
//!
//! This crate provides:
//! - Rule-based field extractors (urgency, deadline, quantity/unit, material,
//!   project, location)
//! - A record builder composing them into a fixed-shape [`Record`]
//! - Line-delimited batch input and JSON array output
//! - An injectable [`Clock`] for date-relative deadlines

pub mod batch;
pub mod clock;
pub mod error;
pub mod models;
pub mod request;

pub use batch::BatchSummary;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ProcureError, Result};
pub use models::config::ProcureConfig;
pub use models::record::{Location, Material, Quantity, Record, Unit, Urgency};
pub use request::{RequestParser, rules::FieldExtractor};
