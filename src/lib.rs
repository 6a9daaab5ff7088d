//! Section 321 savings calculator.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod engine;
pub mod format;
pub mod chart;
pub mod report;
pub mod form;
pub mod dashboard;
