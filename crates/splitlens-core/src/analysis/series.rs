//! Per-attempt scatter series for charting finish times over history.

use serde::Serialize;

use crate::run::Run;
use crate::scope::Scope;
use crate::timespan::TimeSpan;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptSeries {
    pub real_time: Vec<SeriesPoint>,
    pub game_time: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeriesPoint {
    pub id: i32,
    pub time: TimeSpan,
}

pub(crate) fn compute(run: &Run, scope: Scope) -> AttemptSeries {
    let mut series = AttemptSeries::default();

    for attempt in run.attempts.iter().filter(|a| scope.contains(a.id)) {
        if attempt.real_time.is_positive() {
            series.real_time.push(SeriesPoint {
                id: attempt.id,
                time: attempt.real_time,
            });
        }
        if attempt.game_time.is_positive() {
            series.game_time.push(SeriesPoint {
                id: attempt.id,
                time: attempt.game_time,
            });
        }
    }

    series
}
