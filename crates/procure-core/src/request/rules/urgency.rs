//! Urgency classification.

use super::patterns::URGENCY_KEYWORDS;
use super::{FieldExtractor, first_keyword};
use crate::models::record::Urgency;

/// Keyword-based urgency classifier.
///
/// High-urgency keywords are checked before medium ones; anything else is
/// [`Urgency::Low`].
pub struct UrgencyClassifier;

impl UrgencyClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify text. Never fails.
    pub fn classify(&self, text: &str) -> Urgency {
        first_keyword(&text.to_lowercase(), URGENCY_KEYWORDS).unwrap_or_default()
    }
}

impl Default for UrgencyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for UrgencyClassifier {
    type Output = Urgency;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        Some(self.classify(text))
    }
}

/// Classify the urgency of a request.
pub fn detect_urgency(text: &str) -> Urgency {
    UrgencyClassifier::new().classify(text)
}
