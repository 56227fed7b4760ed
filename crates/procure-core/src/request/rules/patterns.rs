//! Common patterns and keyword tables for request extraction.
//!
//! Regexes are matched against lowercased text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::{Location, Material, Urgency};

lazy_static! {
    // Relative deadline: "in 5 days"
    pub static ref RELATIVE_DEADLINE: Regex = Regex::new(
        r"in ([0-9]+) days"
    ).unwrap();

    // Absolute deadline: "by march 30"
    pub static ref ABSOLUTE_DEADLINE: Regex = Regex::new(
        r"by ([a-z]+) ([0-9]{1,2})"
    ).unwrap();

    // Quantity followed by a unit: "250 bags", "12tons"
    pub static ref QUANTITY_UNIT: Regex = Regex::new(
        r"([0-9]+)\s*(units|bags|truckloads|kg|tons)"
    ).unwrap();

    // Project name: "project skyline phase 2"
    pub static ref PROJECT_NAME: Regex = Regex::new(
        r"project ([a-z0-9\s]+)"
    ).unwrap();
}

/// Urgency keywords, highest level first.
pub const URGENCY_KEYWORDS: &[(&str, Urgency)] = &[
    ("urgent", Urgency::High),
    ("asap", Urgency::High),
    ("immediately", Urgency::High),
    ("soon", Urgency::Medium),
    ("in 7 days", Urgency::Medium),
    ("next week", Urgency::Medium),
];

/// Material keywords in priority order. "cement" wins over "steel".
pub const MATERIAL_KEYWORDS: &[(&str, Material)] = &[
    ("cement", Material::Cement),
    ("steel", Material::SteelBars),
    ("sand", Material::RiverSand),
];

/// City keywords in priority order. "mumbai" wins over the rest.
pub const LOCATION_KEYWORDS: &[(&str, Location)] = &[
    ("mumbai", Location::Mumbai),
    ("bangalore", Location::Bangalore),
    ("chennai", Location::Chennai),
    ("delhi", Location::Delhi),
];

/// Words that end a project name; they open a location or deadline phrase.
pub const PROJECT_STOP_WORDS: &[&str] = &["in", "at", "by"];

/// Full English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_unit_requires_exact_unit() {
        assert!(QUANTITY_UNIT.is_match("10 units"));
        assert!(!QUANTITY_UNIT.is_match("10 unit"));
        assert!(QUANTITY_UNIT.is_match("10kg"));
    }

    #[test]
    fn test_absolute_deadline_captures() {
        let caps = ABSOLUTE_DEADLINE.captures("complete by march 15").unwrap();
        assert_eq!(&caps[1], "march");
        assert_eq!(&caps[2], "15");
    }

    #[test]
    fn test_project_stops_at_punctuation() {
        let caps = PROJECT_NAME.captures("for project skyline, mumbai").unwrap();
        assert_eq!(&caps[1], "skyline");
    }
}
