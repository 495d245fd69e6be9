//! Analyze command implementation.

use anyhow::Result;
use clap::Args;
use splitlens_core::{AnalysisResult, Granularity, ResetSeries, Run, TimeSpan, analyze};
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to the splits file (prompted for when omitted)
    pub file: Option<PathBuf>,

    /// Only include attempts with an id greater than or equal to this bound
    #[arg(long)]
    pub from: Option<i32>,

    /// Also write the full JSON report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let path = super::resolve_file(args.file)?;
    let run = super::load_run(&path)?;
    let scope = super::resolve_scope(&run, args.from);
    let result = analyze(&run, scope);

    render(&run, &result);

    if let Some(report_path) = args.report {
        let report = super::export::build_report(&run, scope, &result);
        fs::write(&report_path, serde_json::to_string_pretty(&report)?)?;
        println!();
        println!("Report written to {}", report_path.display());
    }

    Ok(())
}

fn render(run: &Run, result: &AnalysisResult) {
    let summary = result.summary();

    println!();
    println!("{} - {}", run.game_name, run.category_name);
    println!();
    println!("  Best time:          {}", display_time(summary.best_time));
    println!("  Sum of best:        {}", display_time(summary.sob));
    println!(
        "  Possible timesave:  {}",
        display_time(summary.possible_timesave)
    );
    println!("  Attempts:           {}", summary.attempts);
    println!("  Playtime:           {}", summary.playtime);

    render_resets(result.reset_series(Granularity::Coarse));
    render_breakdown(run, result);
}

fn render_resets(resets: &ResetSeries) {
    for (label, entries) in [
        ("game time", &resets.game_time),
        ("real time", &resets.real_time),
    ] {
        if entries.is_empty() {
            continue;
        }
        println!();
        println!("Resets by segment, {} (grouped):", label);
        for entry in entries {
            println!("  {:>5}x  {}", entry.count, entry.segment);
        }
    }
}

fn render_breakdown(run: &Run, result: &AnalysisResult) {
    let breakdown = result.breakdown();
    if breakdown.data.is_empty() {
        return;
    }

    println!();
    println!("Fastest attempts:");
    for curve in &breakdown.data {
        let total = run
            .attempts
            .iter()
            .find(|a| a.id == curve.id)
            .map(|a| a.game_time.to_string())
            .unwrap_or_default();
        println!(
            "  #{:<6} {}  ({} of {} segments timed)",
            curve.id,
            total,
            curve.details.len(),
            breakdown.segments.len()
        );
    }
}

/// Sentinel-max values mean "undefined"; render a dash instead of an
/// astronomically large time.
fn display_time(time: TimeSpan) -> String {
    if time == TimeSpan::MAX {
        "-".to_string()
    } else {
        time.to_string()
    }
}
