//! Builders for hand-rolled runs used across the analysis tests.

use chrono::NaiveDateTime;

use crate::run::{Attempt, HistoryEntry, Run, Segment, SegmentTime};
use crate::timespan::TimeSpan;

pub(crate) fn run_with(attempts: Vec<Attempt>, segments: Vec<Segment>) -> Run {
    Run {
        game_name: "Test Game".to_string(),
        category_name: "Any%".to_string(),
        attempt_count: attempts.len() as i32,
        attempts,
        segments,
    }
}

pub(crate) fn attempt(id: i32, real_secs: i64, game_secs: i64) -> Attempt {
    Attempt {
        id,
        started: None,
        ended: None,
        real_time: TimeSpan::from_secs(real_secs),
        game_time: TimeSpan::from_secs(game_secs),
    }
}

pub(crate) fn segment(name: &str, history: Vec<HistoryEntry>) -> Segment {
    Segment {
        name: name.to_string(),
        best_segment: SegmentTime::default(),
        history,
    }
}

pub(crate) fn history(attempt_id: i32, real_secs: i64, game_secs: i64) -> HistoryEntry {
    HistoryEntry {
        attempt_id,
        real_time: TimeSpan::from_secs(real_secs),
        game_time: TimeSpan::from_secs(game_secs),
    }
}

pub(crate) fn stamp(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, "%m/%d/%Y %H:%M:%S").unwrap()
}
