//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod analyze;
pub mod export;
pub mod segment;

use anyhow::{Context, Result};
use splitlens_core::{Run, Scope};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::prompter;

/// Histories above this size trigger the scope-narrowing prompt.
const SCOPE_PROMPT_THRESHOLD: usize = 200;

/// Resolve the file argument, prompting when it was omitted.
pub(crate) fn resolve_file(file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => Ok(prompter::prompt_file_path()?),
    }
}

pub(crate) fn load_run(path: &Path) -> Result<Run> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let run = splitlens_core::decode(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    info!(
        game = %run.game_name,
        category = %run.category_name,
        attempts = run.attempts.len(),
        segments = run.segments.len(),
        "loaded splits record"
    );
    Ok(run)
}

/// Build the analysis scope from the `--from` flag, falling back to an
/// interactive prompt for very large histories.
pub(crate) fn resolve_scope(run: &Run, from: Option<i32>) -> Scope {
    if let Some(bound) = from {
        return Scope::starting_at(bound);
    }
    if run.attempts.len() > SCOPE_PROMPT_THRESHOLD {
        return Scope::from_bound(prompter::prompt_scope_bound(run.attempts.len()));
    }
    Scope::UNBOUNDED
}
