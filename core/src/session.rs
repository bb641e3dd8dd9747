//! Explicit editing state for one channel.
//!
//! Anchors and region selections live in an [`EditingSession`] value that the
//! caller owns and threads through every edit. After an anchor edit the
//! corrected curve changes, so the region selector is rebound to the new
//! corrected series while its pairs are kept as they are.

use crate::prelude::{ChannelResult, Point};
use crate::processing::{build_baseline, build_corrected, ChannelProcessor, ProcessOutput};
use crate::record::ChannelRecord;
use crate::selection::{RegionPair, RegionSelector};
use crate::series::{AnchorChange, AnchorSet, TimeSeries};

#[derive(Debug, Clone)]
pub struct EditingSession {
    name: String,
    series: TimeSeries,
    anchors: AnchorSet,
    selector: RegionSelector,
    k: f64,
}

impl EditingSession {
    pub fn new(name: impl Into<String>, series: TimeSeries, k: f64) -> ChannelResult<Self> {
        Self::from_parts(name.into(), series, AnchorSet::new(), Vec::new(), k)
    }

    pub fn from_parts(
        name: String,
        series: TimeSeries,
        anchors: AnchorSet,
        pairs: Vec<RegionPair>,
        k: f64,
    ) -> ChannelResult<Self> {
        let corrected = Self::corrected_series(&series, &anchors)?;
        let selector = RegionSelector::restore(corrected, pairs)?;
        Ok(Self {
            name,
            series,
            anchors,
            selector,
            k,
        })
    }

    pub fn toggle_anchor(&mut self, point: Point) -> ChannelResult<AnchorChange> {
        let change = self.anchors.toggle(&self.series, point)?;
        self.rebind_selector()?;
        Ok(change)
    }

    pub fn remove_anchor(&mut self, time: f64) -> ChannelResult<Option<Point>> {
        let removed = self.anchors.remove(time);
        if removed.is_some() {
            self.rebind_selector()?;
        }
        Ok(removed)
    }

    pub fn clear_anchors(&mut self) -> ChannelResult<()> {
        self.anchors.clear();
        self.rebind_selector()
    }

    /// Selects a point on the current corrected curve.
    pub fn select_point(&mut self, point: Point) -> ChannelResult<()> {
        self.selector.select_point(point)
    }

    pub fn remove_pair(&mut self, index: usize) -> ChannelResult<RegionPair> {
        self.selector.remove_pair(index)
    }

    pub fn rename_label(&mut self, index: usize, label: impl Into<String>) -> ChannelResult<()> {
        self.selector.rename_label(index, label)
    }

    pub fn recompute(&self) -> ChannelResult<ProcessOutput> {
        ChannelProcessor::for_channel(self.name.clone()).process(
            &self.series,
            &self.anchors,
            self.selector.pairs(),
            self.k,
        )
    }

    pub fn to_record(&self) -> ChannelRecord {
        ChannelRecord {
            name: self.name.clone(),
            times: self.series.times().to_vec(),
            values: self.series.values().to_vec(),
            anchors: self.anchors.points().to_vec(),
            pairs: self.selector.pairs().to_vec(),
            k: self.k,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    pub fn selector(&self) -> &RegionSelector {
        &self.selector
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    fn rebind_selector(&mut self) -> ChannelResult<()> {
        let corrected = Self::corrected_series(&self.series, &self.anchors)?;
        self.selector.rebind(corrected);
        Ok(())
    }

    fn corrected_series(series: &TimeSeries, anchors: &AnchorSet) -> ChannelResult<TimeSeries> {
        let baseline = build_baseline(series, anchors)?;
        Ok(build_corrected(series, &baseline).into_series())
    }
}
