//! Quantity and unit extraction.

use super::FieldExtractor;
use super::patterns::QUANTITY_UNIT;
use crate::models::record::{Quantity, Unit};

/// Extracts the first `<digits> <unit>` pair.
///
/// Quantity and unit are found together or not at all. The quantity has no
/// upper bound.
pub struct QuantityUnitExtractor;

impl QuantityUnitExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuantityUnitExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for QuantityUnitExtractor {
    type Output = (Quantity, Unit);

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let text = text.to_lowercase();
        let caps = QUANTITY_UNIT.captures(&text)?;

        let quantity = Quantity::from_digits(&caps[1])?;
        let unit = caps[2].parse::<Unit>().ok()?;
        Some((quantity, unit))
    }
}

/// Extract quantity and unit together.
pub fn extract_quantity_and_unit(text: &str) -> (Option<Quantity>, Option<Unit>) {
    match QuantityUnitExtractor::new().extract(text) {
        Some((quantity, unit)) => (Some(quantity), Some(unit)),
        None => (None, None),
    }
}
