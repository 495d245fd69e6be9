//! Pacing curves for the fastest attempts.
//!
//! The five fastest in-scope attempts (by game time) each get a sparse
//! cumulative-time curve over the run's segments; segments an attempt never
//! reached contribute no point.

use serde::Serialize;

use crate::run::Run;
use crate::scope::Scope;
use crate::timespan::TimeSpan;

/// How many of the fastest attempts get a curve.
pub const MAX_BREAKDOWN_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    /// Segment names in progression order, shared across all curves.
    pub segments: Vec<String>,
    /// One curve per selected attempt, ascending by total time.
    pub data: Vec<BreakdownCurve>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownCurve {
    pub id: i32,
    pub details: Vec<BreakdownPoint>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownPoint {
    pub segment: usize,
    /// Cumulative time at this segment, in whole seconds.
    pub time: i64,
}

pub(crate) fn compute(run: &Run, scope: Scope) -> Breakdown {
    let mut fastest: Vec<(TimeSpan, i32)> = run
        .attempts
        .iter()
        .filter(|a| scope.contains(a.id) && a.game_time.is_positive())
        .map(|a| (a.game_time, a.id))
        .collect();
    fastest.sort_by_key(|&(time, _)| time);
    fastest.truncate(MAX_BREAKDOWN_ATTEMPTS);

    let mut data = Vec::with_capacity(fastest.len());
    for (_, id) in fastest {
        let mut acc = TimeSpan::ZERO;
        let mut details = Vec::new();

        for (i, segment) in run.segments.iter().enumerate() {
            let Some(history) = segment.history.iter().find(|h| h.attempt_id == id) else {
                continue;
            };
            if history.game_time.is_positive() {
                acc += history.game_time;
                details.push(BreakdownPoint {
                    segment: i,
                    time: acc.whole_seconds(),
                });
            }
        }

        data.push(BreakdownCurve { id, details });
    }

    Breakdown {
        segments: run.segment_names(),
        data,
    }
}
