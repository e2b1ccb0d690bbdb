//! Keyword extraction into four ordered buckets.
//!
//! Scans tokens against flat emotion/symptom/action vocabularies and rescans
//! the lower-cased text for multi-word symptom phrases. Named entities come
//! from a capitalized-span heuristic rather than a full NER model.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};

use super::lexicon::Lexicon;

/// Capitalized word runs, e.g. "Doctor Smith" or "Monday".
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*").expect("Invalid regex: entity span pattern")
});

/// Extracted keywords, grouped by bucket. Duplicates are allowed and
/// insertion order follows the order of appearance in the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordBuckets {
    pub entities: Vec<String>,
    pub emotions: Vec<String>,
    pub symptoms: Vec<String>,
    pub actions: Vec<String>,
}

impl KeywordBuckets {
    /// Matches that feed the intensity scorer's concern bonus.
    pub fn concern_matches(&self) -> usize {
        self.symptoms.len() + self.emotions.len() + self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.emotions.is_empty()
            && self.symptoms.is_empty()
            && self.actions.is_empty()
    }
}

/// Keyword extractor over the shared lexicon.
pub struct KeywordExtractor {
    lexicon: Arc<Lexicon>,
}

impl KeywordExtractor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Split text into word tokens, keeping internal apostrophes so
    /// contractions like "can't" stay whole.
    pub(crate) fn tokenize(text: &str) -> Vec<&str> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
            .map(|t| t.trim_matches(|c| c == '\'' || c == '\u{2019}'))
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Heuristic stand-in for named-entity recognition: capitalized spans,
    /// skipping a lone sentence-initial word.
    fn extract_entities(&self, text: &str) -> Vec<String> {
        let mut entities = Vec::new();

        for m in ENTITY_PATTERN.find_iter(text) {
            let span = m.as_str();

            let sentence_initial = text[..m.start()]
                .trim_end()
                .chars()
                .next_back()
                .map_or(true, |c| matches!(c, '.' | '!' | '?'));

            // A single capitalized word at a sentence start is usually just
            // ordinary casing, not an entity
            if sentence_initial && !span.contains(char::is_whitespace) {
                continue;
            }

            entities.push(span.to_string());
        }

        entities
    }

    /// Extract all four keyword buckets from the text.
    pub fn extract(&self, text: &str) -> KeywordBuckets {
        let mut buckets = KeywordBuckets {
            entities: self.extract_entities(text),
            ..KeywordBuckets::default()
        };

        let text_lower = text.to_lowercase();

        for token in Self::tokenize(text) {
            let token_lower = token.to_lowercase();
            if self.lexicon.emotion_words().contains(&token_lower.as_str()) {
                buckets.emotions.push(token.to_string());
            }
            if self
                .lexicon
                .symptom_patterns()
                .contains(&token_lower.as_str())
            {
                buckets.symptoms.push(token.to_string());
            }
            if self.lexicon.action_words().contains(&token_lower.as_str()) {
                buckets.actions.push(token.to_string());
            }
        }

        // Multi-word symptom phrases are invisible at token level
        for pattern in self.lexicon.symptom_patterns() {
            if pattern.contains(' ') && text_lower.contains(pattern) {
                buckets.symptoms.push((*pattern).to_string());
            }
        }

        buckets
    }
}
