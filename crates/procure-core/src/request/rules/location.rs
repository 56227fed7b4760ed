//! City detection.

use super::patterns::LOCATION_KEYWORDS;
use super::{FieldExtractor, first_keyword};
use crate::models::record::Location;

/// Substring-based location extractor.
///
/// Cities are checked in the order Mumbai, Bangalore, Chennai, Delhi; only
/// the first one found is reported.
pub struct LocationExtractor;

impl LocationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LocationExtractor {
    type Output = Location;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_keyword(&text.to_lowercase(), LOCATION_KEYWORDS)
    }
}

/// Extract the delivery city from a request.
pub fn extract_location(text: &str) -> Option<Location> {
    LocationExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_location() {
        assert_eq!(extract_location("site in MUMBAI"), Some(Location::Mumbai));
        assert_eq!(extract_location("bangalore depot"), Some(Location::Bangalore));
        assert_eq!(extract_location("Chennai port"), Some(Location::Chennai));
        assert_eq!(extract_location("new delhi"), Some(Location::Delhi));
        assert_eq!(extract_location("Pune"), None);
    }

    #[test]
    fn test_priority_tie_break() {
        assert_eq!(
            extract_location("from delhi to mumbai"),
            Some(Location::Mumbai)
        );
        assert_eq!(
            extract_location("delhi or chennai"),
            Some(Location::Chennai)
        );
    }
}
