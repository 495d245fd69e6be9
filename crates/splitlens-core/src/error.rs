use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid duration: {0:?}")]
    InvalidDuration(String),

    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("Malformed splits record: {0}")]
    MalformedRun(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Segment index {index} out of range (run has {count} segments)")]
    SegmentOutOfRange { index: i64, count: usize },

    #[error("Segment {segment:?} has no recorded history in scope")]
    UndefinedStatistic { segment: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a decode-time format error.
    ///
    /// Format errors abort the whole decode; no partial run is usable.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Error::InvalidDuration(_)
                | Error::InvalidTimestamp(_)
                | Error::MalformedRun(_)
                | Error::Encoding(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_format() {
        assert!(Error::InvalidDuration("x".to_string()).is_format());
        assert!(Error::MalformedRun("broken".to_string()).is_format());
        assert!(Error::Encoding("bad utf-8".to_string()).is_format());

        let oob = Error::SegmentOutOfRange { index: -1, count: 4 };
        assert!(!oob.is_format());

        let undefined = Error::UndefinedStatistic {
            segment: "Any%".to_string(),
        };
        assert!(!undefined.is_format());
    }
}
