//! Decoding the XML splits record into the data model.
//!
//! The raw markup is deserialized into private mirror structs with
//! quick-xml, then converted field by field so duration and timestamp text
//! surface as this crate's own format errors rather than serde messages.

use chrono::NaiveDateTime;
use encoding_rs::UTF_8;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::run::{Attempt, HistoryEntry, Run, Segment, SegmentTime};
use crate::timespan::TimeSpan;

/// Wall-clock stamp format used by attempt attributes.
const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Decode a source record from its raw bytes.
///
/// The buffer must be UTF-8 (a leading BOM is tolerated). Any structural,
/// duration, or timestamp failure aborts the whole decode; no partial run
/// is ever returned.
pub fn decode(bytes: &[u8]) -> Result<Run> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        return Err(Error::Encoding("input is not valid UTF-8".to_string()));
    }

    let raw: XmlRun =
        quick_xml::de::from_str(&text).map_err(|e| Error::MalformedRun(e.to_string()))?;

    let run = convert(raw)?;
    debug!(
        attempts = run.attempts.len(),
        segments = run.segments.len(),
        "decoded splits record"
    );
    Ok(run)
}

fn convert(raw: XmlRun) -> Result<Run> {
    let attempts = raw
        .attempt_history
        .attempts
        .into_iter()
        .map(|a| {
            Ok(Attempt {
                id: a.id,
                started: parse_stamp(a.started)?,
                ended: parse_stamp(a.ended)?,
                real_time: parse_time(a.real_time)?,
                game_time: parse_time(a.game_time)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let segments = raw
        .segments
        .segments
        .into_iter()
        .map(|s| {
            Ok(Segment {
                name: s.name,
                best_segment: SegmentTime {
                    real_time: parse_time(s.best_segment_time.real_time)?,
                    game_time: parse_time(s.best_segment_time.game_time)?,
                },
                history: s
                    .segment_history
                    .times
                    .into_iter()
                    .map(|t| {
                        Ok(HistoryEntry {
                            attempt_id: t.id,
                            real_time: parse_time(t.real_time)?,
                            game_time: parse_time(t.game_time)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Run {
        game_name: raw.game_name,
        category_name: raw.category_name,
        attempt_count: raw.attempt_count,
        attempts,
        segments,
    })
}

fn parse_time(text: Option<String>) -> Result<TimeSpan> {
    match text {
        Some(s) => TimeSpan::parse(&s),
        None => Ok(TimeSpan::ZERO),
    }
}

fn parse_stamp(text: Option<String>) -> Result<Option<NaiveDateTime>> {
    let Some(s) = text else {
        return Ok(None);
    };
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map(Some)
        .map_err(|_| Error::InvalidTimestamp(s.to_string()))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct XmlRun {
    #[serde(default)]
    game_name: String,
    #[serde(default)]
    category_name: String,
    #[serde(default)]
    attempt_count: i32,
    #[serde(default)]
    attempt_history: XmlAttemptHistory,
    #[serde(default)]
    segments: XmlSegments,
}

#[derive(Debug, Default, Deserialize)]
struct XmlAttemptHistory {
    #[serde(rename = "Attempt", default)]
    attempts: Vec<XmlAttempt>,
}

#[derive(Debug, Deserialize)]
struct XmlAttempt {
    #[serde(rename = "@id", default)]
    id: i32,
    #[serde(rename = "@started", default)]
    started: Option<String>,
    #[serde(rename = "@ended", default)]
    ended: Option<String>,
    #[serde(rename = "RealTime", default)]
    real_time: Option<String>,
    #[serde(rename = "GameTime", default)]
    game_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlSegments {
    #[serde(rename = "Segment", default)]
    segments: Vec<XmlSegment>,
}

#[derive(Debug, Deserialize)]
struct XmlSegment {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "BestSegmentTime", default)]
    best_segment_time: XmlSegmentTime,
    #[serde(rename = "SegmentHistory", default)]
    segment_history: XmlSegmentHistory,
}

#[derive(Debug, Default, Deserialize)]
struct XmlSegmentTime {
    #[serde(rename = "RealTime", default)]
    real_time: Option<String>,
    #[serde(rename = "GameTime", default)]
    game_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlSegmentHistory {
    #[serde(rename = "Time", default)]
    times: Vec<XmlHistoryTime>,
}

#[derive(Debug, Deserialize)]
struct XmlHistoryTime {
    #[serde(rename = "@id", default)]
    id: i32,
    #[serde(rename = "RealTime", default)]
    real_time: Option<String>,
    #[serde(rename = "GameTime", default)]
    game_time: Option<String>,
}
