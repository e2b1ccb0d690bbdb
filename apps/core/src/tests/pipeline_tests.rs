//! Full Pipeline Tests
//!
//! Exercises the analyzer end to end against the documented properties:
//! bounded scores, non-empty concern lists, and the binary risk rule.

use std::sync::Arc;

use crate::analysis::risk::RiskLevel;
use crate::analysis::MindAnalyzer;
use crate::sentiment::{FixedPolarityOracle, Polarity};

fn analyzer(polarity: Polarity) -> MindAnalyzer {
    MindAnalyzer::new(Arc::new(FixedPolarityOracle(polarity)))
}

const HIGH_RISK_WORDS: &[&str] = &["kill", "death", "suicide", "hurt", "harm"];

const SAMPLE_TEXTS: &[&str] = &[
    "",
    "I feel very anxious and can't sleep",
    "I want to kill myself",
    "today was a wonderful day with friends",
    "I am so tired and worried all the time",
    "he keeps talking about death and suicide",
    "nothing in particular, just checking in",
    "I am extremely extremely hopeless hopeless",
    "my sister Marie helped me through a panic attack",
];

#[tokio::test]
async fn test_score_bounds_and_concerns_nonempty() {
    for polarity in [Polarity::Positive, Polarity::Negative] {
        let analyzer = analyzer(polarity);
        for text in SAMPLE_TEXTS {
            let result = analyzer.analyze(text).await.unwrap();

            let score = result.intensity_analysis.final_score;
            assert!(
                (1.0..=10.0).contains(&score),
                "score {score} out of bounds for {text:?}"
            );
            assert!(
                !result.identified_concerns.is_empty(),
                "empty concerns for {text:?}"
            );
        }
    }
}

#[tokio::test]
async fn test_risk_high_iff_high_risk_terms() {
    let analyzer = analyzer(Polarity::Negative);

    for text in SAMPLE_TEXTS {
        let result = analyzer.analyze(text).await.unwrap();

        let text_lower = text.to_lowercase();
        let expected_high = HIGH_RISK_WORDS.iter().any(|w| text_lower.contains(w))
            || result
                .detected_keywords
                .actions
                .iter()
                .any(|a| HIGH_RISK_WORDS.contains(&a.to_lowercase().as_str()));

        let actual_high = result.risk_assessment.level == RiskLevel::High;
        assert_eq!(actual_high, expected_high, "risk mismatch for {text:?}");
        if !actual_high {
            assert!(result.risk_assessment.factors.is_empty());
        }
    }
}

#[tokio::test]
async fn test_anxious_example_exact_breakdown() {
    let result = analyzer(Polarity::Negative)
        .analyze("I feel very anxious and can't sleep")
        .await
        .unwrap();

    let intensity = &result.intensity_analysis;
    assert_eq!(intensity.base_severity, 5.0); // "anxious"
    assert_eq!(intensity.modifiers, 2.0); // "very"
    assert_eq!(intensity.sentiment_impact, 1.2);
    assert_eq!(intensity.repetition_impact, 0.0);
    // one emotion ("feel") + one symptom phrase ("can't sleep") = 2/3
    assert!((intensity.concern_count - 2.0 / 3.0).abs() < 1e-9);
    // (5 + 2 + 2/3) * 1.2 = 9.2
    assert_eq!(intensity.final_score, 9.2);
}

#[tokio::test]
async fn test_positive_polarity_dampens_score() {
    let text = "I feel very anxious and can't sleep";

    let negative = analyzer(Polarity::Negative).analyze(text).await.unwrap();
    let positive = analyzer(Polarity::Positive).analyze(text).await.unwrap();

    assert!(
        positive.intensity_analysis.final_score < negative.intensity_analysis.final_score
    );
}

#[tokio::test]
async fn test_overlapping_categories_all_reported() {
    // "worried" is a trigger in both Anxiety and Fear by design
    let result = analyzer(Polarity::Negative)
        .analyze("I am worried about tomorrow")
        .await
        .unwrap();

    assert!(result.identified_concerns.contains(&"Anxiety".to_string()));
    assert!(result.identified_concerns.contains(&"Fear".to_string()));
}

#[tokio::test]
async fn test_entity_flows_into_report() {
    let result = analyzer(Polarity::Negative)
        .analyze("my sister Marie Dubois helped me through a panic attack")
        .await
        .unwrap();

    assert!(result
        .detected_keywords
        .entities
        .contains(&"Marie Dubois".to_string()));
}
