//! Attempt-scope filtering.
//!
//! A scope is an optional inclusive lower bound on attempt identifiers.
//! Every analyzer discards attempts and history entries below the bound
//! before computing anything; segments are never removed.

use serde::Serialize;

/// Inclusive lower bound on attempt ids, defaulting to no bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Scope {
    lower_bound: Option<i32>,
}

impl Scope {
    pub const UNBOUNDED: Scope = Scope { lower_bound: None };

    pub const fn from_bound(lower_bound: Option<i32>) -> Self {
        Scope { lower_bound }
    }

    pub const fn starting_at(attempt_id: i32) -> Self {
        Scope {
            lower_bound: Some(attempt_id),
        }
    }

    pub const fn lower_bound(&self) -> Option<i32> {
        self.lower_bound
    }

    pub fn contains(&self, attempt_id: i32) -> bool {
        self.lower_bound.is_none_or(|bound| attempt_id >= bound)
    }

    /// The amount subtracted from the run's attempt-count hint when
    /// estimating the in-scope attempt total: the bound when positive,
    /// otherwise zero. An estimate, not a recount of the filtered set.
    pub fn count_adjustment(&self) -> i32 {
        self.lower_bound.unwrap_or(0).max(0)
    }
}
