//! Composite intensity scoring.
//!
//! Combines severity-word matches, stacking intensity modifiers, keyword
//! counts, the external sentiment polarity, and severity-word repetition
//! into a single score bounded to [1, 10]. Pure function of its inputs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use super::keywords::{KeywordBuckets, KeywordExtractor};
use super::lexicon::Lexicon;
use crate::sentiment::Polarity;

/// Severity word repeated beyond this token count earns a repetition bonus.
const REPETITION_THRESHOLD: usize = 1;

/// Sub-scores feeding the final intensity value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityBreakdown {
    /// Highest matching severity-word score (1 when none match)
    pub base_severity: f64,
    /// Sum of all matching intensity-modifier values
    pub modifiers: f64,
    /// min(2, keyword matches / 3)
    pub concern_count: f64,
    /// 1.2 for negative polarity, 0.8 otherwise
    pub sentiment_impact: f64,
    /// 0.5 per severity word repeated in the text
    pub repetition_impact: f64,
    /// Clamped to [1, 10], rounded to one decimal
    pub final_score: f64,
}

/// Intensity scorer over the shared lexicon.
pub struct IntensityScorer {
    lexicon: Arc<Lexicon>,
}

impl IntensityScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Highest severity score found as a substring of the lower-cased text.
    fn base_severity(&self, text_lower: &str) -> f64 {
        let max_severity = self
            .lexicon
            .severity_words()
            .iter()
            .filter(|(word, _)| text_lower.contains(word))
            .map(|(_, score)| *score)
            .fold(0.0, f64::max);

        if max_severity > 0.0 {
            max_severity
        } else {
            1.0
        }
    }

    /// Modifiers stack: every matching modifier contributes its full value.
    fn modifier_bonus(&self, text_lower: &str) -> f64 {
        self.lexicon
            .intensity_modifiers()
            .iter()
            .filter(|(word, _)| text_lower.contains(word))
            .map(|(_, value)| *value)
            .sum()
    }

    /// 0.5 for each severity word whose exact token count exceeds one.
    fn repetition_bonus(&self, text_lower: &str) -> f64 {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in KeywordExtractor::tokenize(text_lower) {
            if self.lexicon.severity_of(token).is_some() {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        counts
            .values()
            .filter(|count| **count > REPETITION_THRESHOLD)
            .map(|_| 0.5)
            .sum()
    }

    /// Score the text against its extracted keywords and the oracle polarity.
    pub fn score(
        &self,
        text: &str,
        keywords: &KeywordBuckets,
        polarity: Polarity,
    ) -> IntensityBreakdown {
        let text_lower = text.to_lowercase();

        let base_severity = self.base_severity(&text_lower);
        let modifiers = self.modifier_bonus(&text_lower);
        let concern_count = (keywords.concern_matches() as f64 / 3.0).min(2.0);
        let sentiment_impact = match polarity {
            Polarity::Negative => 1.2,
            Polarity::Positive => 0.8,
        };
        let repetition_impact = self.repetition_bonus(&text_lower);

        let raw = (base_severity + modifiers + concern_count + repetition_impact)
            * sentiment_impact;
        let final_score = (raw.clamp(1.0, 10.0) * 10.0).round() / 10.0;

        IntensityBreakdown {
            base_severity,
            modifiers,
            concern_count,
            sentiment_impact,
            repetition_impact,
            final_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (IntensityScorer, KeywordExtractor) {
        let lexicon = Arc::new(Lexicon::new());
        (
            IntensityScorer::new(Arc::clone(&lexicon)),
            KeywordExtractor::new(lexicon),
        )
    }

    fn score_of(text: &str, polarity: Polarity) -> IntensityBreakdown {
        let (scorer, extractor) = fixture();
        let keywords = extractor.extract(text);
        scorer.score(text, &keywords, polarity)
    }

    #[test]
    fn test_benign_text_floors_at_one() {
        let breakdown = score_of("the weather is pleasant today", Polarity::Positive);

        assert_eq!(breakdown.base_severity, 1.0);
        assert_eq!(breakdown.modifiers, 0.0);
        // 1 * 0.8 = 0.8 before the clamp
        assert_eq!(breakdown.final_score, 1.0);
    }

    #[test]
    fn test_anxious_example() {
        let breakdown = score_of("I feel very anxious and can't sleep", Polarity::Negative);

        assert_eq!(breakdown.base_severity, 5.0); // "anxious"
        assert_eq!(breakdown.modifiers, 2.0); // "very"
        assert_eq!(breakdown.sentiment_impact, 1.2);
        assert!(breakdown.final_score >= 1.0 && breakdown.final_score <= 10.0);
    }

    #[test]
    fn test_high_severity_word_dominates_base() {
        let breakdown = score_of("I want to kill myself", Polarity::Negative);
        assert!(breakdown.base_severity >= 9.0);
    }

    #[test]
    fn test_modifiers_stack() {
        let breakdown = score_of("very very really severely upset", Polarity::Negative);
        // "very"(2) + "really"(2) + "severe"(substring of "severely" has no
        // modifier entry; "severely"(3) matches) = 7
        assert_eq!(breakdown.modifiers, 7.0);
    }

    #[test]
    fn test_repetition_bonus() {
        let breakdown = score_of("sad sad sad and tired tired", Polarity::Negative);
        // two severity words repeated: "sad" and "tired"
        assert_eq!(breakdown.repetition_impact, 1.0);
    }

    #[test]
    fn test_concern_bonus_caps_at_two() {
        let breakdown = score_of(
            "feel feel feel feel need need need want want tired tired",
            Polarity::Negative,
        );
        assert_eq!(breakdown.concern_count, 2.0);
    }

    #[test]
    fn test_final_score_clamped_to_ten() {
        let breakdown = score_of(
            "extremely suicidal, really desperate, very hopeless, constantly terrible",
            Polarity::Negative,
        );
        assert_eq!(breakdown.final_score, 10.0);
    }

    #[test]
    fn test_score_bounds_over_varied_inputs() {
        let inputs = [
            "",
            "ok",
            "I am extremely extremely worried worried worried",
            "happy happy happy",
            "kill kill kill kill very really totally",
        ];
        for text in inputs {
            for polarity in [Polarity::Positive, Polarity::Negative] {
                let b = score_of(text, polarity);
                assert!(
                    (1.0..=10.0).contains(&b.final_score),
                    "score {} out of range for {text:?}",
                    b.final_score
                );
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = score_of("I feel very anxious and can't sleep", Polarity::Negative);
        let b = score_of("I feel very anxious and can't sleep", Polarity::Negative);
        assert_eq!(a, b);
    }
}
