//! Material detection.

use super::patterns::MATERIAL_KEYWORDS;
use super::{FieldExtractor, first_keyword};
use crate::models::record::Material;

/// Substring-based material extractor.
///
/// Keywords are tried in a fixed order and the first hit wins, so a request
/// naming both cement and steel reports cement. Any other material mentioned
/// on the same line is dropped.
pub struct MaterialExtractor;

impl MaterialExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MaterialExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MaterialExtractor {
    type Output = Material;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_keyword(&text.to_lowercase(), MATERIAL_KEYWORDS)
    }
}

/// Extract the material named in a request.
pub fn extract_material(text: &str) -> Option<Material> {
    MaterialExtractor::new().extract(text)
}
