use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod prompter;

#[derive(Parser)]
#[command(name = "splitlens")]
#[command(about = "Splits-history analyzer for LiveSplit records")]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Bare invocation behaves like `analyze`.
    #[command(flatten)]
    analyze: commands::analyze::AnalyzeArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a splits file and render every derived view
    Analyze(commands::analyze::AnalyzeArgs),
    /// Show descriptive statistics for a single segment
    Segment(commands::segment::SegmentArgs),
    /// Write the full analysis report as JSON
    Export(commands::export::ExportArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("splitlens_core=info".parse()?)
                .add_directive("splitlens=info".parse()?),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Some(Command::Analyze(analyze)) => commands::analyze::run(analyze),
        Some(Command::Segment(segment)) => commands::segment::run(segment),
        Some(Command::Export(export)) => commands::export::run(export),
        None => commands::analyze::run(args.analyze),
    }
}
