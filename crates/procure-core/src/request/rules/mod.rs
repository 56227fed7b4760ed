//! Rule-based field extractors for procurement requests.
//!
//! Every extractor is total: text that does not match yields `None`, never
//! an error. Matching is case-insensitive.

pub mod deadline;
pub mod location;
pub mod material;
pub mod patterns;
pub mod project;
pub mod quantity;
pub mod urgency;

pub use deadline::{DeadlineExtractor, extract_deadline};
pub use location::{LocationExtractor, extract_location};
pub use material::{MaterialExtractor, extract_material};
pub use project::{ProjectExtractor, extract_project, title_case};
pub use quantity::{QuantityUnitExtractor, extract_quantity_and_unit};
pub use urgency::{UrgencyClassifier, detect_urgency};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// Returns the value paired with the first keyword contained in `text`.
pub(crate) fn first_keyword<T: Copy>(text: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|&(_, value)| value)
}
