//! The in-memory splits data model.
//!
//! A [`Run`] is built once by [`decode`] and is read-only afterwards.
//! Attempt order is chronological; segment order is the run's progression
//! order and defines every index the analyzers emit.

mod decode;

pub use decode::decode;

use chrono::NaiveDateTime;
use serde::Serialize;
use strum::{Display, IntoStaticStr};

use crate::timespan::TimeSpan;

/// Segment names starting with this prefix mark a sub-segment of the next
/// non-prefixed segment. The run's final segment is never a sub-segment.
pub const SUBSEGMENT_PREFIX: char = '-';

/// Selects which of a real-time/game-time pair an analyzer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum TimingMethod {
    #[strum(serialize = "real time")]
    RealTime,
    #[strum(serialize = "game time")]
    GameTime,
}

/// Root of the splits record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub game_name: String,
    pub category_name: String,
    /// Total attempt count claimed by the record; a hint, not necessarily
    /// the length of `attempts`.
    pub attempt_count: i32,
    pub attempts: Vec<Attempt>,
    pub segments: Vec<Segment>,
}

impl Run {
    /// Segment names in progression order, shared by the breakdown curves
    /// for axis labeling.
    pub fn segment_names(&self) -> Vec<String> {
        self.segments.iter().map(|s| s.name.clone()).collect()
    }

    /// A segment closes a reset group unless it is a sub-segment that is
    /// not the run's final segment.
    pub fn is_group_boundary(&self, index: usize) -> bool {
        let last = self.segments.len().saturating_sub(1);
        !(self.segments[index].is_subsegment() && index < last)
    }
}

/// One playthrough, complete or abandoned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub id: i32,
    pub started: Option<NaiveDateTime>,
    pub ended: Option<NaiveDateTime>,
    pub real_time: TimeSpan,
    pub game_time: TimeSpan,
}

impl Attempt {
    pub fn time(&self, method: TimingMethod) -> TimeSpan {
        match method {
            TimingMethod::RealTime => self.real_time,
            TimingMethod::GameTime => self.game_time,
        }
    }

    /// Wall-clock span between start and end stamps, when both are known.
    /// May exceed both recorded times (pauses, menus) or be negative for a
    /// record with swapped stamps.
    pub fn wall_clock_span(&self) -> Option<TimeSpan> {
        let (started, ended) = (self.started?, self.ended?);
        (ended - started).num_nanoseconds().map(TimeSpan::from_nanos)
    }
}

/// One checkpoint within the run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub name: String,
    pub best_segment: SegmentTime,
    /// One entry per attempt that reached this segment, in attempt order.
    pub history: Vec<HistoryEntry>,
}

impl Segment {
    pub fn is_subsegment(&self) -> bool {
        self.name.starts_with(SUBSEGMENT_PREFIX)
    }
}

/// A real-time/game-time pair; at most one side is meaningfully set.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentTime {
    pub real_time: TimeSpan,
    pub game_time: TimeSpan,
}

impl SegmentTime {
    /// The recorded side, preferring game time; the sentinel-max when
    /// neither side is set.
    pub fn preferred(&self) -> TimeSpan {
        if self.game_time.is_positive() {
            self.game_time
        } else if self.real_time.is_positive() {
            self.real_time
        } else {
            TimeSpan::MAX
        }
    }
}

/// One attempt's recorded time on one segment.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub attempt_id: i32,
    pub real_time: TimeSpan,
    pub game_time: TimeSpan,
}

impl HistoryEntry {
    pub fn time(&self, method: TimingMethod) -> TimeSpan {
        match method {
            TimingMethod::RealTime => self.real_time,
            TimingMethod::GameTime => self.game_time,
        }
    }
}
