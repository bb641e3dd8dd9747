use serde::{Deserialize, Serialize};

use crate::prelude::{ChannelError, ChannelResult, Point};
use crate::series::{validate_anchor, TimeSeries};

/// A user-chosen span over the corrected curve, pending until `end` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPair {
    pub start: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Point>,
    pub label: String,
}

impl RegionPair {
    pub fn pending(start: Point, label: impl Into<String>) -> Self {
        Self {
            start,
            end: None,
            label: label.into(),
        }
    }

    pub fn complete(start: Point, end: Point, label: impl Into<String>) -> Self {
        Self {
            start,
            end: Some(end),
            label: label.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// `(min, max)` of the endpoint times, or `None` while pending.
    pub fn span(&self) -> Option<(f64, f64)> {
        let end = self.end?;
        Some((
            self.start.time.min(end.time),
            self.start.time.max(end.time),
        ))
    }
}

const DEFAULT_LABEL_PREFIX: &str = "Sample ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// No open pair; the next click starts a new one.
    Empty,
    /// The last pair has a start and is waiting for its end.
    PendingStart,
}

/// Turns point clicks into an ordered list of region pairs.
///
/// At most one pair is pending at a time, and it is always the last one.
#[derive(Debug, Clone)]
pub struct RegionSelector {
    series: TimeSeries,
    pairs: Vec<RegionPair>,
    state: SelectorState,
    opened: usize,
}

impl RegionSelector {
    pub fn bound_to(series: TimeSeries) -> Self {
        Self {
            series,
            pairs: Vec::new(),
            state: SelectorState::Empty,
            opened: 0,
        }
    }

    /// Restores stored pairs. Endpoint values are not re-validated because they
    /// were picked against whatever baseline was current at the time.
    pub fn restore(series: TimeSeries, pairs: Vec<RegionPair>) -> ChannelResult<Self> {
        let last = pairs.len().saturating_sub(1);
        if let Some(index) = pairs
            .iter()
            .position(|pair| !pair.is_complete())
            .filter(|&index| index != last)
        {
            return Err(ChannelError::PendingPairNotLast { index });
        }

        let state = match pairs.last() {
            Some(pair) if !pair.is_complete() => SelectorState::PendingStart,
            _ => SelectorState::Empty,
        };
        // Continue numbering past every restored default label.
        let opened = pairs
            .iter()
            .filter_map(|pair| pair.label.strip_prefix(DEFAULT_LABEL_PREFIX))
            .filter_map(|number| number.parse::<usize>().ok())
            .fold(pairs.len(), usize::max);
        Ok(Self {
            series,
            opened,
            pairs,
            state,
        })
    }

    /// Binds the selector to a new series, keeping existing pairs.
    pub fn rebind(&mut self, series: TimeSeries) {
        self.series = series;
    }

    pub fn select_point(&mut self, point: Point) -> ChannelResult<()> {
        validate_anchor(&self.series, point)?;

        match self.state {
            SelectorState::Empty => {
                self.opened += 1;
                let label = format!("{}{}", DEFAULT_LABEL_PREFIX, self.opened);
                self.pairs.push(RegionPair::pending(point, label));
                self.state = SelectorState::PendingStart;
            }
            SelectorState::PendingStart => {
                let open = self
                    .pairs
                    .last_mut()
                    .ok_or(ChannelError::PairIndexOutOfRange { index: 0, len: 0 })?;
                if open.start.time == point.time {
                    return Err(ChannelError::DuplicateSelection { time: point.time });
                }
                open.end = Some(point);
                self.state = SelectorState::Empty;
            }
        }
        Ok(())
    }

    pub fn remove_pair(&mut self, index: usize) -> ChannelResult<RegionPair> {
        self.check_index(index)?;
        let removed = self.pairs.remove(index);
        if !removed.is_complete() {
            self.state = SelectorState::Empty;
        }
        Ok(removed)
    }

    pub fn rename_label(&mut self, index: usize, label: impl Into<String>) -> ChannelResult<()> {
        self.check_index(index)?;
        self.pairs[index].label = label.into();
        Ok(())
    }

    pub fn pairs(&self) -> &[RegionPair] {
        &self.pairs
    }

    pub fn completed(&self) -> impl Iterator<Item = &RegionPair> {
        self.pairs.iter().filter(|pair| pair.is_complete())
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    fn check_index(&self, index: usize) -> ChannelResult<()> {
        if index < self.pairs.len() {
            Ok(())
        } else {
            Err(ChannelError::PairIndexOutOfRange {
                index,
                len: self.pairs.len(),
            })
        }
    }
}
