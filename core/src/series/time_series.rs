use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::prelude::{ChannelError, ChannelResult, Point};

/// Immutable, strictly time-ordered samples of one channel.
///
/// Construction enforces the invariants every downstream stage relies on:
/// at least one sample, index-aligned `times`/`values`, and strictly
/// increasing timestamps. A series is replaced wholesale when new data is
/// ingested, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl TryFrom<RawSeries> for TimeSeries {
    type Error = ChannelError;

    fn try_from(raw: RawSeries) -> ChannelResult<Self> {
        TimeSeries::new(raw.times, raw.values)
    }
}

impl TimeSeries {
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> ChannelResult<Self> {
        if times.len() != values.len() {
            return Err(ChannelError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if times.is_empty() {
            return Err(ChannelError::EmptyDomain);
        }
        if let Some(index) = times
            .iter()
            .zip(&values)
            .position(|(t, v)| !t.is_finite() || !v.is_finite())
        {
            return Err(ChannelError::NonFiniteSample { index });
        }
        if let Some(index) = times
            .windows(2)
            .position(|pair| pair[0] >= pair[1])
            .map(|i| i + 1)
        {
            return Err(ChannelError::NonMonotonicTime { index });
        }

        Ok(Self { times, values })
    }

    /// Builds a series from `(time, value)` tuples.
    pub fn from_pairs<I>(samples: I) -> ChannelResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (times, values) = samples.into_iter().unzip();
        Self::new(times, values)
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false` for a constructed series; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        Some(Point::new(*self.times.get(index)?, *self.values.get(index)?))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.times
            .iter()
            .zip(&self.values)
            .map(|(&time, &value)| Point::new(time, value))
    }

    /// Index of the sample equal to `point` in both coordinates, if any.
    ///
    /// Equality is exact; there is no nearest-neighbour snapping here.
    pub fn index_of(&self, point: Point) -> Option<usize> {
        let index = self.times.partition_point(|&t| t < point.time);
        let matches = self.times.get(index) == Some(&point.time)
            && self.values.get(index) == Some(&point.value);
        matches.then_some(index)
    }

    /// Sample indices with `t0 <= time <= t1`, in time order.
    pub fn indices_within(&self, t0: f64, t1: f64) -> Range<usize> {
        let start = self.times.partition_point(|&t| t < t0);
        let end = self.times.partition_point(|&t| t <= t1);
        start..end.max(start)
    }

    /// Same timestamps, new values. Callers guarantee the length matches.
    pub(crate) fn with_values(&self, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), self.times.len());
        Self {
            times: self.times.clone(),
            values,
        }
    }
}

/// Succeeds iff `point` coincides exactly with one of the series' samples.
pub fn validate_anchor(series: &TimeSeries, point: Point) -> ChannelResult<()> {
    series
        .index_of(point)
        .map(|_| ())
        .ok_or_else(|| ChannelError::invalid_anchor(point))
}
