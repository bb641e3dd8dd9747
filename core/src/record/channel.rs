use serde::{Deserialize, Serialize};

use crate::prelude::{ChannelResult, Point};
use crate::processing::{ChannelProcessor, ProcessOutput};
use crate::selection::RegionPair;
use crate::series::{AnchorSet, TimeSeries};
use crate::session::EditingSession;

/// Stored state of one channel, as exchanged with the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRecord {
    #[serde(default)]
    pub name: String,
    pub times: Vec<f64>,
    pub values: Vec<f64>,
    #[serde(default)]
    pub anchors: Vec<Point>,
    #[serde(default)]
    pub pairs: Vec<RegionPair>,
    pub k: f64,
}

impl ChannelRecord {
    pub fn series(&self) -> ChannelResult<TimeSeries> {
        TimeSeries::new(self.times.clone(), self.values.clone())
    }

    /// Recomputes baseline, corrected series and integrals from the stored state.
    pub fn process(&self) -> ChannelResult<ProcessOutput> {
        let series = self.series()?;
        let anchors = AnchorSet::unchecked(self.anchors.iter().copied());
        ChannelProcessor::for_channel(self.name.clone()).process(
            &series,
            &anchors,
            &self.pairs,
            self.k,
        )
    }

    /// Reopens the record for editing.
    pub fn into_session(self) -> ChannelResult<EditingSession> {
        let series = TimeSeries::new(self.times, self.values)?;
        let anchors = AnchorSet::from_points(&series, self.anchors)?;
        EditingSession::from_parts(self.name, series, anchors, self.pairs, self.k)
    }
}
