//! Multi-label concern classification.
//!
//! Categories are not mutually exclusive: every category with at least one
//! matching trigger phrase is returned, in lexicon definition order.

use std::sync::Arc;

use super::lexicon::Lexicon;

/// Sentinel category returned when nothing else matches.
pub const DEFAULT_CONCERN: &str = "General Mental Health";

/// Concern classifier over the shared lexicon.
pub struct ConcernClassifier {
    lexicon: Arc<Lexicon>,
}

impl ConcernClassifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Return every category whose phrase list matches the text.
    /// Never returns an empty list.
    pub fn classify(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();

        let mut concerns: Vec<String> = self
            .lexicon
            .concern_categories()
            .iter()
            .filter(|(_, phrases)| phrases.iter().any(|phrase| text_lower.contains(phrase)))
            .map(|(label, _)| (*label).to_string())
            .collect();

        if concerns.is_empty() {
            concerns.push(DEFAULT_CONCERN.to_string());
        }

        concerns
    }
}
