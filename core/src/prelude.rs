use serde::{Deserialize, Serialize};

/// A `(time, value)` pair, used for anchors and region endpoints alike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub time: f64,
    pub value: f64,
}

impl Point {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<(f64, f64)> for Point {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}

/// Common error type for every engine operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    #[error("point ({time}, {value}) does not match any sample of the series")]
    InvalidAnchor { time: f64, value: f64 },
    #[error("{} anchor(s) do not match any sample of the series", .0.len())]
    InvalidAnchors(Vec<Point>),
    #[error("two anchors share timestamp {time}")]
    DegenerateAnchorSpan { time: f64 },
    #[error("series has no samples")]
    EmptyDomain,
    #[error("series has {times} timestamps but {values} values")]
    LengthMismatch { times: usize, values: usize },
    #[error("sample at index {index} has a non-finite time or value")]
    NonFiniteSample { index: usize },
    #[error("timestamp at index {index} is not strictly greater than its predecessor")]
    NonMonotonicTime { index: usize },
    #[error("point at time {time} is already the start of the open region")]
    DuplicateSelection { time: f64 },
    #[error("region index {index} out of range for {len} region(s)")]
    PairIndexOutOfRange { index: usize, len: usize },
    #[error("region starting at {start} has no end point")]
    IncompleteRegion { start: f64 },
    #[error("region {index} is pending but is not the last region")]
    PendingPairNotLast { index: usize },
    #[error("conversion constant {0} must be finite and non-zero")]
    InvalidConversionConstant(f64),
}

impl ChannelError {
    pub(crate) fn invalid_anchor(point: Point) -> Self {
        ChannelError::InvalidAnchor {
            time: point.time,
            value: point.value,
        }
    }
}

pub type ChannelResult<T> = Result<T, ChannelError>;
