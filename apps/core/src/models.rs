use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::analysis::intensity::IntensityBreakdown;
use crate::analysis::keywords::KeywordBuckets;
use crate::analysis::risk::RiskAssessment;

/// Request body for the analyze endpoint. An empty text is legal and yields
/// the minimal assessment.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// Free-form text describing the person's mental state.
    #[validate(length(max = 20000, message = "text exceeds the 20000 character limit"))]
    pub text: String,
}

/// A persisted analysis, as stored in the `analyses` table.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct AnalysisRecord {
    /// The unique identifier for the record (UUID).
    pub id: String,
    /// The analyzed input text.
    pub input_text: String,
    /// Polarity label ("POSITIVE" or "NEGATIVE").
    pub polarity: String,
    /// Extracted keyword buckets.
    pub detected_keywords: Json<KeywordBuckets>,
    /// Matched concern categories.
    pub identified_concerns: Json<Vec<String>>,
    /// Intensity sub-scores and final score.
    pub intensity_analysis: Json<IntensityBreakdown>,
    /// Risk level and factor strings.
    pub risk_assessment: Json<RiskAssessment>,
    /// Unix timestamp of when the analysis was created.
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_valid() {
        let request = AnalyzeRequest {
            text: String::new(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_oversized_text_is_rejected() {
        let request = AnalyzeRequest {
            text: "a".repeat(20001),
        };
        assert!(request.validate().is_err());
    }
}
