//! Test Module
//!
//! Integration test suite for the Mindgauge backend.
//!
//! ## Test Categories
//! - `pipeline_tests`: Full analysis pipeline properties and examples
//! - `database_tests`: Persistence of analysis records
//! - `api_tests`: HTTP endpoint behavior

pub mod pipeline_tests;
