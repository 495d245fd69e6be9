//! # splitlens-core
//!
//! Core library for the Splitlens splits-history analyzer.
//!
//! This crate provides:
//! - The splits data model (Run, Attempt, Segment) and XML decoding
//! - Duration parsing and display formatting (TimeSpan)
//! - Attempt-scope filtering
//! - Run analysis: summary, attempt series, reset distributions, breakdown
//! - On-demand per-segment statistics

pub mod analysis;
pub mod error;
pub mod run;
pub mod scope;
pub mod timespan;

#[cfg(test)]
pub(crate) mod testutil;

pub use analysis::{
    AnalysisResult, AttemptSeries, Breakdown, BreakdownCurve, BreakdownPoint, Granularity,
    MAX_BREAKDOWN_ATTEMPTS, MAX_RESET_ENTRIES, ResetDistributions, ResetEntry, ResetSeries,
    SegmentDetail, SegmentStatistics, Summary, analyze, segment_statistics,
};
pub use error::{Error, Result};
pub use run::{Attempt, HistoryEntry, Run, Segment, SegmentTime, TimingMethod, decode};
pub use scope::Scope;
pub use timespan::TimeSpan;
