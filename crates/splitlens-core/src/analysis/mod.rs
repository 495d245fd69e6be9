//! Run analysis.
//!
//! [`analyze`] runs every analyzer over an immutable [`Run`] and returns one
//! owned, immutable [`AnalysisResult`]. Callers hold that value; nothing is
//! stored globally and nothing is recomputed on read. The per-segment
//! statistics query is separate and on demand, see [`segment_statistics`].

mod breakdown;
mod resets;
mod segment;
mod series;
mod summary;

pub use breakdown::{Breakdown, BreakdownCurve, BreakdownPoint, MAX_BREAKDOWN_ATTEMPTS};
pub use resets::{Granularity, MAX_RESET_ENTRIES, ResetDistributions, ResetEntry, ResetSeries};
pub use segment::{SegmentDetail, SegmentStatistics, segment_statistics};
pub use series::{AttemptSeries, SeriesPoint};
pub use summary::Summary;

use serde::Serialize;
use tracing::debug;

use crate::run::Run;
use crate::scope::Scope;

/// Every derived view of one run under one scope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    summary: Summary,
    total_series: AttemptSeries,
    resets: ResetDistributions,
    breakdown: Breakdown,
}

/// Analyze a run, restricted to the given scope.
pub fn analyze(run: &Run, scope: Scope) -> AnalysisResult {
    let result = AnalysisResult {
        summary: summary::compute(run, scope),
        total_series: series::compute(run, scope),
        resets: resets::compute(run, scope),
        breakdown: breakdown::compute(run, scope),
    };
    debug!(
        attempts = run.attempts.len(),
        segments = run.segments.len(),
        bound = ?scope.lower_bound(),
        "analysis complete"
    );
    result
}

impl AnalysisResult {
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn total_series(&self) -> &AttemptSeries {
        &self.total_series
    }

    pub fn reset_series(&self, granularity: Granularity) -> &ResetSeries {
        match granularity {
            Granularity::Fine => &self.resets.fine,
            Granularity::Coarse => &self.resets.coarse,
        }
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }
}
