//! Reset distributions: where attempts die.
//!
//! For each timing method, every in-scope attempt is assigned the segment
//! it reset on (one past the last segment it completed; attempts with no
//! completed segment read as resetting on the first). Counts are then
//! reported twice: per segment (fine) and grouped so that sub-segment
//! resets roll up into the parent checkpoint that follows them (coarse).
//! Each series is trimmed to its most significant entries.

use std::collections::HashMap;

use serde::Serialize;
use strum::Display;

use crate::run::{Run, TimingMethod};
use crate::scope::Scope;

/// Upper bound on surviving entries per reset series.
pub const MAX_RESET_ENTRIES: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Granularity {
    #[strum(serialize = "fine")]
    Fine,
    #[strum(serialize = "coarse")]
    Coarse,
}

/// Both granularities of the reset view.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetDistributions {
    pub fine: ResetSeries,
    pub coarse: ResetSeries,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetSeries {
    pub real_time: Vec<ResetEntry>,
    pub game_time: Vec<ResetEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetEntry {
    pub segment_index: usize,
    pub segment: String,
    pub count: u32,
}

pub(crate) fn compute(run: &Run, scope: Scope) -> ResetDistributions {
    let real_last = last_completed(run, scope, TimingMethod::RealTime);
    let game_last = last_completed(run, scope, TimingMethod::GameTime);

    let mut fine = ResetSeries::default();
    let mut coarse = ResetSeries::default();
    let mut real_running = 0u32;
    let mut game_running = 0u32;

    for (i, segment) in run.segments.iter().enumerate() {
        let mut real_here = 0u32;
        let mut game_here = 0u32;

        for attempt in run.attempts.iter().filter(|a| scope.contains(a.id)) {
            if real_last.get(&attempt.id).copied().unwrap_or(0) == i {
                real_here += 1;
                real_running += 1;
            }
            if game_last.get(&attempt.id).copied().unwrap_or(0) == i {
                game_here += 1;
                game_running += 1;
            }
        }

        if real_here > 0 {
            fine.real_time.push(entry(i, &segment.name, real_here));
        }
        if game_here > 0 {
            fine.game_time.push(entry(i, &segment.name, game_here));
        }

        // Sub-segments carry their accumulators into the next segment.
        if !run.is_group_boundary(i) {
            continue;
        }

        if real_running > 0 {
            coarse.real_time.push(entry(i, &segment.name, real_running));
        }
        if game_running > 0 {
            coarse.game_time.push(entry(i, &segment.name, game_running));
        }
        real_running = 0;
        game_running = 0;
    }

    for series in [&mut fine, &mut coarse] {
        trim(&mut series.real_time);
        trim(&mut series.game_time);
    }

    ResetDistributions { fine, coarse }
}

/// Maps attempt id to one past the highest segment index it completed for
/// the given method. Later segments overwrite earlier ones; attempts absent
/// from the map completed nothing.
fn last_completed(run: &Run, scope: Scope, method: TimingMethod) -> HashMap<i32, usize> {
    let mut last = HashMap::new();

    for (i, segment) in run.segments.iter().enumerate() {
        for history in &segment.history {
            if !scope.contains(history.attempt_id) {
                continue;
            }
            if history.time(method).is_positive() {
                last.insert(history.attempt_id, i + 1);
            }
        }
    }

    last
}

fn entry(segment_index: usize, name: &str, count: u32) -> ResetEntry {
    ResetEntry {
        segment_index,
        segment: name.to_string(),
        count,
    }
}

/// Repeatedly drop every entry at the current minimum count until at most
/// [`MAX_RESET_ENTRIES`] remain. Ties at the minimum are all dropped at
/// once, so the result may land below the bound.
fn trim(entries: &mut Vec<ResetEntry>) {
    while entries.len() > MAX_RESET_ENTRIES {
        let Some(min) = entries.iter().map(|e| e.count).min() else {
            return;
        };
        entries.retain(|e| e.count > min);
    }
}
