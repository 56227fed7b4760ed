//! Project name extraction.

use super::FieldExtractor;
use super::patterns::{PROJECT_NAME, PROJECT_STOP_WORDS};

/// Extracts the name following the word "project".
///
/// The name runs over letters, digits and whitespace up to the first other
/// character, and ends early at a word that opens a location or deadline
/// phrase ("in", "at", "by"). It is returned title-cased.
pub struct ProjectExtractor;

impl ProjectExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProjectExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ProjectExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let text = text.to_lowercase();
        let caps = PROJECT_NAME.captures(&text)?;

        // A blank capture still names a project: the empty string.
        let name = cut_at_stop_word(caps[1].trim());
        Some(title_case(name))
    }
}

/// Extract the project name from a request.
pub fn extract_project(text: &str) -> Option<String> {
    ProjectExtractor::new().extract(text)
}

/// Truncate `name` before its first stop word.
fn cut_at_stop_word(name: &str) -> &str {
    let mut start = 0;
    for word in name.split_whitespace() {
        let offset = name[start..].find(word).map_or(start, |i| start + i);
        if PROJECT_STOP_WORDS.contains(&word) {
            return name[..offset].trim_end();
        }
        start = offset + word.len();
    }
    name
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut after_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if after_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            result.push(c);
            after_letter = false;
        }
    }

    result
}
