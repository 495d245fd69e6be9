//! Whole-run summary: best time, sum of best, possible timesave, attempt
//! estimate, total playtime.

use serde::Serialize;

use crate::run::Run;
use crate::scope::Scope;
use crate::timespan::TimeSpan;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Fastest in-scope game-time finish; the sentinel-max when no attempt
    /// has a recorded game time.
    pub best_time: TimeSpan,
    /// Sum of best segment times, preferring game time per segment.
    pub sob: TimeSpan,
    pub possible_timesave: TimeSpan,
    /// Estimated in-scope attempt total: the record's attempt-count hint
    /// minus the scope bound when positive. Not a recount of the filtered
    /// set.
    pub attempts: i32,
    pub playtime: TimeSpan,
}

pub(crate) fn compute(run: &Run, scope: Scope) -> Summary {
    let mut best_time = TimeSpan::MAX;
    let mut playtime = TimeSpan::ZERO;

    for attempt in run.attempts.iter().filter(|a| scope.contains(a.id)) {
        if attempt.game_time.is_positive() {
            best_time = best_time.min(attempt.game_time);
        }

        let mut span = attempt.real_time.max(attempt.game_time);
        if let Some(wall) = attempt.wall_clock_span() {
            span = span.max(wall);
        }
        playtime += span;
    }

    let mut sob = TimeSpan::ZERO;
    for segment in &run.segments {
        // A segment without a best time pins the sum at the sentinel-max.
        sob = sob.saturating_add(segment.best_segment.preferred());
    }

    Summary {
        best_time,
        sob,
        possible_timesave: best_time.saturating_sub(sob),
        attempts: run.attempt_count - scope.count_adjustment(),
        playtime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::SegmentTime;
    use crate::testutil;

    fn run_with_bests(best_secs: &[i64]) -> Run {
        let mut run = testutil::run_with(
            vec![
                testutil::attempt(1, 1810, 1800),
                testutil::attempt(2, 0, 0),
                testutil::attempt(3, 1700, 1650),
            ],
            best_secs
                .iter()
                .enumerate()
                .map(|(i, _)| testutil::segment(&format!("S{}", i), vec![]))
                .collect(),
        );
        for (segment, &secs) in run.segments.iter_mut().zip(best_secs) {
            segment.best_segment = SegmentTime {
                real_time: TimeSpan::ZERO,
                game_time: TimeSpan::from_secs(secs),
            };
        }
        run
    }

    #[test]
    fn test_best_time_and_timesave() {
        let run = run_with_bests(&[800, 700]);
        let summary = compute(&run, Scope::UNBOUNDED);

        assert_eq!(summary.best_time, TimeSpan::from_secs(1650));
        assert_eq!(summary.sob, TimeSpan::from_secs(1500));
        assert_eq!(summary.possible_timesave, TimeSpan::from_secs(150));
    }

    #[test]
    fn test_best_time_is_sentinel_max_without_game_times() {
        let run = testutil::run_with(vec![testutil::attempt(1, 1810, 0)], vec![]);
        let summary = compute(&run, Scope::UNBOUNDED);
        assert_eq!(summary.best_time, TimeSpan::MAX);
    }

    #[test]
    fn test_sob_saturates_when_a_segment_has_no_best() {
        let mut run = run_with_bests(&[800, 700]);
        run.segments.push(testutil::segment("unset", vec![]));
        let summary = compute(&run, Scope::UNBOUNDED);
        assert_eq!(summary.sob, TimeSpan::MAX);
    }

    #[test]
    fn test_playtime_sums_the_larger_recorded_time() {
        let run = testutil::run_with(
            vec![testutil::attempt(1, 1810, 1800), testutil::attempt(2, 900, 950)],
            vec![],
        );
        let summary = compute(&run, Scope::UNBOUNDED);
        assert_eq!(summary.playtime, TimeSpan::from_secs(1810 + 950));
    }

    #[test]
    fn test_playtime_prefers_wall_clock_span_when_larger() {
        let mut attempt = testutil::attempt(1, 1810, 1800);
        attempt.started = Some(testutil::stamp("05/12/2020 19:00:00"));
        attempt.ended = Some(testutil::stamp("05/12/2020 20:00:00"));
        let run = testutil::run_with(vec![attempt], vec![]);

        let summary = compute(&run, Scope::UNBOUNDED);
        assert_eq!(summary.playtime, TimeSpan::from_secs(3600));
    }

    #[test]
    fn test_attempt_estimate_uses_count_minus_bound() {
        let mut run = run_with_bests(&[800]);
        run.attempt_count = 100;

        // The estimate subtracts the bound from the hint; it is not a
        // recount of the filtered attempts.
        let summary = compute(&run, Scope::starting_at(40));
        assert_eq!(summary.attempts, 60);

        let summary = compute(&run, Scope::starting_at(-10));
        assert_eq!(summary.attempts, 100);

        let summary = compute(&run, Scope::UNBOUNDED);
        assert_eq!(summary.attempts, 100);
    }

    #[test]
    fn test_scope_excludes_attempts_from_best_and_playtime() {
        let run = run_with_bests(&[800, 700]);
        let summary = compute(&run, Scope::starting_at(2));

        assert_eq!(summary.best_time, TimeSpan::from_secs(1650));
        assert_eq!(summary.playtime, TimeSpan::from_secs(1700));
    }
}
