//! Binary risk assessment against a fixed high-risk vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::keywords::KeywordBuckets;
use super::lexicon::Lexicon;

/// Risk level. Binary despite the scale-like name; intermediate grades are
/// deliberately not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// Result of the risk check: a level plus one factor string per trigger type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub factors: Vec<String>,
}

/// Risk assessor over the shared lexicon.
pub struct RiskAssessor {
    lexicon: Arc<Lexicon>,
}

impl RiskAssessor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// HIGH iff a high-risk word appears in the lower-cased text or in the
    /// extracted action bucket; LOW with no factors otherwise.
    pub fn assess(&self, text: &str, keywords: &KeywordBuckets) -> RiskAssessment {
        let text_lower = text.to_lowercase();
        let mut level = RiskLevel::Low;
        let mut factors = Vec::new();

        if self
            .lexicon
            .high_risk_words()
            .iter()
            .any(|word| text_lower.contains(word))
        {
            level = RiskLevel::High;
            factors.push("High-risk words detected".to_string());
        }

        if keywords
            .actions
            .iter()
            .any(|action| self.lexicon.high_risk_words().contains(&action.to_lowercase().as_str()))
        {
            level = RiskLevel::High;
            factors.push("Concerning actions detected".to_string());
        }

        RiskAssessment { level, factors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::keywords::KeywordExtractor;

    fn fixture() -> (RiskAssessor, KeywordExtractor) {
        let lexicon = Arc::new(Lexicon::new());
        (
            RiskAssessor::new(Arc::clone(&lexicon)),
            KeywordExtractor::new(lexicon),
        )
    }

    fn assess(text: &str) -> RiskAssessment {
        let (assessor, extractor) = fixture();
        let keywords = extractor.extract(text);
        assessor.assess(text, &keywords)
    }

    #[test]
    fn test_benign_text_is_low() {
        let assessment = assess("I feel very anxious and can't sleep");
        assert_eq!(assessment.level, RiskLevel::Low);
        assert!(assessment.factors.is_empty());
    }

    #[test]
    fn test_high_risk_word_in_text() {
        let assessment = assess("I want to kill myself");
        assert_eq!(assessment.level, RiskLevel::High);
        assert!(assessment
            .factors
            .contains(&"High-risk words detected".to_string()));
    }

    #[test]
    fn test_action_bucket_adds_second_factor() {
        // "hurt" is both a high-risk word and an action token, so both
        // trigger types fire
        let assessment = assess("I might hurt someone");
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.factors.len(), 2);
    }

    #[test]
    fn test_substring_match_counts() {
        // "death" inside "deathly" still triggers the text check
        let assessment = assess("a deathly silence");
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.factors, vec!["High-risk words detected"]);
    }

    #[test]
    fn test_empty_text_is_low() {
        let assessment = assess("");
        assert_eq!(assessment.level, RiskLevel::Low);
        assert!(assessment.factors.is_empty());
    }
}
