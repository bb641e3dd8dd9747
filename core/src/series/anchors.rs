use serde::Serialize;

use crate::prelude::{ChannelError, ChannelResult, Point};
use crate::series::time_series::{validate_anchor, TimeSeries};

/// Outcome of [`AnchorSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorChange {
    Added(Point),
    Removed(Point),
}

/// Baseline-defining points, kept sorted by time with no shared timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnchorSet {
    points: Vec<Point>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every point against `series`, reporting all mismatches at once.
    pub fn from_points<I>(series: &TimeSeries, points: I) -> ChannelResult<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let (valid, invalid): (Vec<Point>, Vec<Point>) = points
            .into_iter()
            .partition(|&point| validate_anchor(series, point).is_ok());
        if !invalid.is_empty() {
            return Err(ChannelError::InvalidAnchors(invalid));
        }

        let set = Self::unchecked(valid);
        if let Some(pair) = set.points.windows(2).find(|pair| pair[0].time == pair[1].time) {
            return Err(ChannelError::DegenerateAnchorSpan { time: pair[0].time });
        }
        Ok(set)
    }

    /// Restores anchors from storage without validating them.
    ///
    /// Points are sorted by time but duplicates are kept, so a corrupted record
    /// still surfaces as an error from the baseline builder.
    pub fn unchecked<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points: Vec<Point> = points.into_iter().collect();
        points.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { points }
    }

    /// Adds `point`, or removes the anchor already sitting at its time.
    pub fn toggle(&mut self, series: &TimeSeries, point: Point) -> ChannelResult<AnchorChange> {
        validate_anchor(series, point)?;
        if let Some(removed) = self.remove(point.time) {
            return Ok(AnchorChange::Removed(removed));
        }
        let index = self.points.partition_point(|p| p.time < point.time);
        self.points.insert(index, point);
        Ok(AnchorChange::Added(point))
    }

    pub fn remove(&mut self, time: f64) -> Option<Point> {
        let index = self.points.iter().position(|p| p.time == time)?;
        Some(self.points.remove(index))
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}
