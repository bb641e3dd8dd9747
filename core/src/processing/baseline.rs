use serde::{Deserialize, Serialize};

use crate::math::interp::InterpHelper;
use crate::prelude::{ChannelError, ChannelResult, Point};
use crate::series::{AnchorSet, TimeSeries};

/// Baseline values, index-aligned with the series they were built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub values: Vec<f64>,
}

impl Baseline {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// How a baseline was derived, used for logging by the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineMode {
    Zero,
    Constant,
    Piecewise,
}

impl BaselineMode {
    pub fn for_anchor_count(count: usize) -> Self {
        match count {
            0 => BaselineMode::Zero,
            1 => BaselineMode::Constant,
            _ => BaselineMode::Piecewise,
        }
    }
}

/// Derives a full-domain baseline from anchor points.
pub struct BaselineBuilder<'a> {
    series: &'a TimeSeries,
}

impl<'a> BaselineBuilder<'a> {
    pub fn new(series: &'a TimeSeries) -> Self {
        Self { series }
    }

    /// Builds the baseline from an anchor set, which is time-sorted by construction.
    ///
    /// No anchors gives zeros, one anchor a constant, two or more a piecewise
    /// linear curve with flat extrapolation beyond the outermost anchors.
    pub fn build(&self, anchors: &AnchorSet) -> ChannelResult<Baseline> {
        let anchors = anchors.points();
        let times = self.series.times();
        let values = match anchors {
            [] => vec![0.0; times.len()],
            [only] => vec![only.value; times.len()],
            _ => {
                if let Some(pair) = anchors.windows(2).find(|pair| pair[0].time == pair[1].time) {
                    return Err(ChannelError::DegenerateAnchorSpan { time: pair[0].time });
                }
                times.iter().map(|&t| Self::piecewise(anchors, t)).collect()
            }
        };
        Ok(Baseline { values })
    }

    fn piecewise(anchors: &[Point], t: f64) -> f64 {
        let first = anchors[0];
        let last = anchors[anchors.len() - 1];
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // first.time < t < last.time, so 1 <= upper <= len - 1.
        let upper = anchors.partition_point(|a| a.time <= t);
        let a = anchors[upper - 1];
        if a.time == t {
            return a.value;
        }
        let b = anchors[upper];
        InterpHelper::lerp(a.time, a.value, b.time, b.value, t)
    }
}

pub fn build_baseline(series: &TimeSeries, anchors: &AnchorSet) -> ChannelResult<Baseline> {
    BaselineBuilder::new(series).build(anchors)
}
