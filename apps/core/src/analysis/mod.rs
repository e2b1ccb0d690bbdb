//! # Analysis Module
//!
//! Heuristic mental-state assessment pipeline. Everything here is a
//! dictionary lookup over immutable lexicons; the only external signal is
//! the sentiment oracle's polarity label.
//!
//! ## Components
//! - `lexicon`: static concern/severity/modifier vocabularies
//! - `keywords`: four-bucket keyword extraction
//! - `intensity`: bounded composite intensity scoring
//! - `concerns`: multi-label concern classification
//! - `risk`: binary high/low risk assessment
//! - `report`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod concerns;
pub mod intensity;
pub mod keywords;
pub mod lexicon;
pub mod report;
pub mod risk;

pub use analyzer::MindAnalyzer;
pub use report::AnalysisResult;
