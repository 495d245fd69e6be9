//! Segment statistics command implementation.

use anyhow::Result;
use clap::Args;
use splitlens_core::segment_statistics;
use std::path::PathBuf;

#[derive(Args)]
pub struct SegmentArgs {
    /// Segment index, 0-based in progression order
    pub index: i64,

    /// Path to the splits file (prompted for when omitted)
    pub file: Option<PathBuf>,

    /// Only include attempts with an id greater than or equal to this bound
    #[arg(long)]
    pub from: Option<i32>,
}

pub fn run(args: SegmentArgs) -> Result<()> {
    let path = super::resolve_file(args.file)?;
    let run = super::load_run(&path)?;
    let scope = super::resolve_scope(&run, args.from);

    let stats = segment_statistics(&run, scope, args.index)?;
    let name = &run.segments[args.index as usize].name;

    println!();
    println!("Segment {}: {}", args.index, name);
    println!();
    println!("  Entries:  {}", stats.details.len());
    println!("  Min:      {}", stats.min);
    println!("  Max:      {}", stats.max);
    println!("  Average:  {}", stats.average);
    println!("  Median:   {}", stats.median);
    println!("  Std dev:  {}s", stats.standard_deviation);

    Ok(())
}
