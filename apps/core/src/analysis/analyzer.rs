//! Main orchestrator for the analysis pipeline.
//!
//! Consults the sentiment oracle once, then runs keyword extraction,
//! intensity scoring, concern classification, and risk assessment over the
//! same input, assembling one immutable report. No retries; any stage error
//! propagates to the caller.

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use super::concerns::ConcernClassifier;
use super::intensity::IntensityScorer;
use super::keywords::KeywordExtractor;
use super::lexicon::Lexicon;
use super::report::AnalysisResult;
use super::risk::RiskAssessor;
use crate::error::AppError;
use crate::sentiment::SentimentOracle;

/// Orchestrates all analysis components over a shared lexicon.
pub struct MindAnalyzer {
    oracle: Arc<dyn SentimentOracle>,
    keyword_extractor: KeywordExtractor,
    intensity_scorer: IntensityScorer,
    concern_classifier: ConcernClassifier,
    risk_assessor: RiskAssessor,
}

impl MindAnalyzer {
    /// Create an analyzer with the default lexicon.
    pub fn new(oracle: Arc<dyn SentimentOracle>) -> Self {
        Self::with_lexicon(oracle, Arc::new(Lexicon::new()))
    }

    /// Create an analyzer over an explicit lexicon.
    pub fn with_lexicon(oracle: Arc<dyn SentimentOracle>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            oracle,
            keyword_extractor: KeywordExtractor::new(Arc::clone(&lexicon)),
            intensity_scorer: IntensityScorer::new(Arc::clone(&lexicon)),
            concern_classifier: ConcernClassifier::new(Arc::clone(&lexicon)),
            risk_assessor: RiskAssessor::new(lexicon),
        }
    }

    /// Run the full pipeline over one input text.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AppError> {
        // The oracle is consulted exactly once; the same polarity feeds both
        // the report and the intensity scorer
        let polarity = self.oracle.polarity(text).await?;

        let detected_keywords = self.keyword_extractor.extract(text);
        let intensity_analysis =
            self.intensity_scorer
                .score(text, &detected_keywords, polarity);
        let identified_concerns = self.concern_classifier.classify(text);
        let risk_assessment = self.risk_assessor.assess(text, &detected_keywords);

        let result = AnalysisResult {
            input_text: text.to_string(),
            polarity,
            detected_keywords,
            identified_concerns,
            intensity_analysis,
            risk_assessment,
            timestamp: Utc::now(),
        };

        info!("Analysis complete: {}", result.summary());

        Ok(result)
    }
}
