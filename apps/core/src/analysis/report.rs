//! Assessment report - output structure of one analysis run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::intensity::IntensityBreakdown;
use super::keywords::KeywordBuckets;
use super::risk::{RiskAssessment, RiskLevel};
use crate::sentiment::Polarity;

/// Complete assessment for one input text. Created once per request,
/// persisted immediately, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Original input text
    pub input_text: String,

    /// Coarse polarity label from the sentiment oracle
    pub polarity: Polarity,

    /// Extracted keyword buckets
    pub detected_keywords: KeywordBuckets,

    /// Matched concern categories (never empty)
    pub identified_concerns: Vec<String>,

    /// Intensity sub-scores and bounded final score
    pub intensity_analysis: IntensityBreakdown,

    /// Binary risk level with factor strings
    pub risk_assessment: RiskAssessment,

    /// UTC creation time
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn is_high_risk(&self) -> bool {
        self.risk_assessment.level == RiskLevel::High
    }

    /// One-line summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "Polarity: {}, Concerns: {}, Intensity: {:.1}, Risk: {}",
            self.polarity,
            self.identified_concerns.len(),
            self.intensity_analysis.final_score,
            self.risk_assessment.level,
        )
    }
}
