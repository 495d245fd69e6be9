//! JSON report export.
//!
//! Serializes every derived view of one analysis, plus per-segment
//! statistics for each segment that has any in-scope history.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use splitlens_core::{
    AnalysisResult, AttemptSeries, Breakdown, Granularity, ResetSeries, Run, Scope,
    SegmentStatistics, Summary, analyze, segment_statistics,
};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the splits file (prompted for when omitted)
    pub file: Option<PathBuf>,

    /// Only include attempts with an id greater than or equal to this bound
    #[arg(long)]
    pub from: Option<i32>,

    /// Output path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let path = super::resolve_file(args.file)?;
    let run = super::load_run(&path)?;
    let scope = super::resolve_scope(&run, args.from);
    let result = analyze(&run, scope);

    let report = build_report(&run, scope, &result);
    let json = serde_json::to_string_pretty(&report)?;

    match args.output {
        Some(output) => {
            fs::write(&output, json)?;
            println!("Report written to {}", output.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Report<'a> {
    game_name: &'a str,
    category_name: &'a str,
    scope_bound: Option<i32>,
    summary: &'a Summary,
    total_series: &'a AttemptSeries,
    resets: ResetReport<'a>,
    breakdown: &'a Breakdown,
    segments: Vec<SegmentReport<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetReport<'a> {
    fine: &'a ResetSeries,
    coarse: &'a ResetSeries,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SegmentReport<'a> {
    index: usize,
    name: &'a str,
    statistics: SegmentStatistics,
}

pub(crate) fn build_report<'a>(
    run: &'a Run,
    scope: Scope,
    result: &'a AnalysisResult,
) -> Report<'a> {
    let segments = run
        .segments
        .iter()
        .enumerate()
        .filter_map(|(index, segment)| {
            match segment_statistics(run, scope, index as i64) {
                Ok(statistics) => Some(SegmentReport {
                    index,
                    name: &segment.name,
                    statistics,
                }),
                Err(err) => {
                    debug!(index, %err, "segment skipped in report");
                    None
                }
            }
        })
        .collect();

    Report {
        game_name: &run.game_name,
        category_name: &run.category_name,
        scope_bound: scope.lower_bound(),
        summary: result.summary(),
        total_series: result.total_series(),
        resets: ResetReport {
            fine: result.reset_series(Granularity::Fine),
            coarse: result.reset_series(Granularity::Coarse),
        },
        breakdown: result.breakdown(),
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Run>
  <GameName>Celeste</GameName>
  <CategoryName>Any%</CategoryName>
  <AttemptCount>2</AttemptCount>
  <AttemptHistory>
    <Attempt id="1">
      <RealTime>0:31:00</RealTime>
      <GameTime>0:29:30</GameTime>
    </Attempt>
    <Attempt id="2">
      <GameTime>0:28:10</GameTime>
    </Attempt>
  </AttemptHistory>
  <Segments>
    <Segment>
      <Name>Forsaken City</Name>
      <BestSegmentTime>
        <GameTime>0:05:30</GameTime>
      </BestSegmentTime>
      <SegmentHistory>
        <Time id="1">
          <GameTime>0:05:45</GameTime>
        </Time>
        <Time id="2">
          <GameTime>0:05:32</GameTime>
        </Time>
      </SegmentHistory>
    </Segment>
    <Segment>
      <Name>Granny</Name>
      <BestSegmentTime />
      <SegmentHistory />
    </Segment>
  </Segments>
</Run>"#;

    #[test]
    fn test_report_shape_and_segment_filtering() {
        let run = splitlens_core::decode(SAMPLE.as_bytes()).unwrap();
        let scope = Scope::UNBOUNDED;
        let result = analyze(&run, scope);

        let report = build_report(&run, scope, &result);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["gameName"], "Celeste");
        assert_eq!(value["summary"]["bestTime"], "00:28:10");
        assert_eq!(value["totalSeries"]["gameTime"].as_array().unwrap().len(), 2);
        assert!(value["resets"]["fine"]["realTime"].is_array());
        assert_eq!(value["breakdown"]["segments"][0], "Forsaken City");

        // "Granny" has no history and is left out of the per-segment list.
        let segments = value["segments"].as_array().unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0]["name"], "Forsaken City");
        assert_eq!(segments[0]["statistics"]["details"][0]["id"], 1);
    }

    #[test]
    fn test_report_records_the_scope_bound() {
        let run = splitlens_core::decode(SAMPLE.as_bytes()).unwrap();
        let scope = Scope::starting_at(2);
        let result = analyze(&run, scope);

        let report = build_report(&run, scope, &result);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["scopeBound"], 2);
        assert_eq!(value["summary"]["attempts"], 0);
        assert_eq!(value["totalSeries"]["gameTime"].as_array().unwrap().len(), 1);
    }
}
