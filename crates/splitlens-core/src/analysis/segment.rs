//! On-demand descriptive statistics for one segment's history.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::run::Run;
use crate::scope::Scope;
use crate::timespan::TimeSpan;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStatistics {
    pub min: TimeSpan,
    pub max: TimeSpan,
    /// Mean of the raw times, rounded in nanosecond resolution.
    pub average: TimeSpan,
    pub median: TimeSpan,
    /// Population standard deviation against the rounded average, in whole
    /// seconds.
    pub standard_deviation: i64,
    pub details: Vec<SegmentDetail>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SegmentDetail {
    pub id: i32,
    /// The raw time in whole seconds.
    pub time: i64,
}

/// Compute statistics for the segment at `index`.
///
/// The index is validated against the run (`SegmentOutOfRange`); a segment
/// with no in-scope positive game-time history fails with
/// `UndefinedStatistic` rather than producing a meaningless number. Pure
/// read; safe to call concurrently with other queries.
pub fn segment_statistics(run: &Run, scope: Scope, index: i64) -> Result<SegmentStatistics> {
    let count = run.segments.len();
    if index < 0 || index >= count as i64 {
        return Err(Error::SegmentOutOfRange { index, count });
    }
    let segment = &run.segments[index as usize];

    let mut times: Vec<TimeSpan> = Vec::with_capacity(segment.history.len());
    let mut details = Vec::with_capacity(segment.history.len());
    let mut min = TimeSpan::MAX;
    let mut max = TimeSpan::ZERO;
    let mut total: i64 = 0;

    for history in &segment.history {
        if !scope.contains(history.attempt_id) {
            continue;
        }
        let time = history.game_time;
        if !time.is_positive() {
            continue;
        }

        times.push(time);
        total += time.as_nanos();
        details.push(SegmentDetail {
            id: history.attempt_id,
            time: time.whole_seconds(),
        });
        min = min.min(time);
        max = max.max(time);
    }

    if times.is_empty() {
        return Err(Error::UndefinedStatistic {
            segment: segment.name.clone(),
        });
    }

    let average = TimeSpan::from_nanos((total as f64 / times.len() as f64).round() as i64);

    times.sort();
    let median = if times.len() % 2 == 1 {
        times[times.len() / 2]
    } else {
        let mid = times.len() / 2;
        let sum = times[mid - 1].as_nanos() + times[mid].as_nanos();
        TimeSpan::from_nanos((sum as f64 / 2.0).round() as i64)
    };

    let variance = times
        .iter()
        .map(|t| {
            let delta = (t.as_nanos() - average.as_nanos()) as f64;
            delta * delta
        })
        .sum::<f64>()
        / times.len() as f64;
    let standard_deviation = TimeSpan::from_nanos(variance.sqrt().round() as i64).whole_seconds();

    Ok(SegmentStatistics {
        min,
        max,
        average,
        median,
        standard_deviation,
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    fn run_with_history(game_secs: &[i64]) -> Run {
        let history = game_secs
            .iter()
            .enumerate()
            .map(|(i, &secs)| testutil::history(i as i32 + 1, 0, secs))
            .collect();
        testutil::run_with(vec![], vec![testutil::segment("Boss", history)])
    }

    #[test]
    fn test_statistics_for_odd_history() {
        let run = run_with_history(&[10, 20, 30]);
        let stats = segment_statistics(&run, Scope::UNBOUNDED, 0).unwrap();

        assert_eq!(stats.min, TimeSpan::from_secs(10));
        assert_eq!(stats.max, TimeSpan::from_secs(30));
        assert_eq!(stats.average, TimeSpan::from_secs(20));
        assert_eq!(stats.median, TimeSpan::from_secs(20));
        // Population std-dev of [10, 20, 30] is sqrt(200/3) = 8.16s.
        assert_eq!(stats.standard_deviation, 8);
        assert_eq!(stats.details.len(), 3);
        assert_eq!(stats.details[0].time, 10);
    }

    #[test]
    fn test_median_of_even_history_averages_the_middle() {
        let run = run_with_history(&[10, 20, 30, 40]);
        let stats = segment_statistics(&run, Scope::UNBOUNDED, 0).unwrap();

        assert_eq!(stats.median, TimeSpan::from_secs(25));
        assert_eq!(stats.average, TimeSpan::from_secs(25));
        // Population std-dev of [10, 20, 30, 40] is sqrt(125) = 11.18s.
        assert_eq!(stats.standard_deviation, 11);
    }

    #[test]
    fn test_median_sorts_unordered_history() {
        let run = run_with_history(&[30, 10, 20]);
        let stats = segment_statistics(&run, Scope::UNBOUNDED, 0).unwrap();
        assert_eq!(stats.median, TimeSpan::from_secs(20));
    }

    #[test]
    fn test_sentinel_times_are_excluded() {
        let run = run_with_history(&[0, 15, 0, 25]);
        let stats = segment_statistics(&run, Scope::UNBOUNDED, 0).unwrap();

        assert_eq!(stats.details.len(), 2);
        assert_eq!(stats.min, TimeSpan::from_secs(15));
        assert_eq!(stats.median, TimeSpan::from_secs(20));
    }

    #[test]
    fn test_scope_narrows_history() {
        let run = run_with_history(&[10, 20, 30]);
        let stats = segment_statistics(&run, Scope::starting_at(2), 0).unwrap();

        assert_eq!(stats.details.len(), 2);
        assert_eq!(stats.min, TimeSpan::from_secs(20));
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let run = run_with_history(&[10]);

        let below = segment_statistics(&run, Scope::UNBOUNDED, -1).unwrap_err();
        assert!(matches!(below, Error::SegmentOutOfRange { index: -1, .. }));

        let above = segment_statistics(&run, Scope::UNBOUNDED, 1).unwrap_err();
        assert!(matches!(above, Error::SegmentOutOfRange { index: 1, .. }));
    }

    #[test]
    fn test_empty_history_is_undefined() {
        let run = run_with_history(&[]);
        let err = segment_statistics(&run, Scope::UNBOUNDED, 0).unwrap_err();
        assert!(matches!(err, Error::UndefinedStatistic { .. }));

        // Entirely out-of-scope history is undefined too.
        let run = run_with_history(&[10, 20]);
        let err = segment_statistics(&run, Scope::starting_at(100), 0).unwrap_err();
        assert!(matches!(err, Error::UndefinedStatistic { .. }));
    }

    #[test]
    fn test_query_failure_leaves_other_queries_intact() {
        let run = run_with_history(&[10, 20, 30]);
        assert!(segment_statistics(&run, Scope::UNBOUNDED, 99).is_err());

        let stats = segment_statistics(&run, Scope::UNBOUNDED, 0).unwrap();
        assert_eq!(stats.median, TimeSpan::from_secs(20));
    }
}
