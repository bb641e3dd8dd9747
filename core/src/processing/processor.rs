use serde::{Deserialize, Serialize};

use crate::prelude::{ChannelError, ChannelResult, Point};
use crate::processing::baseline::{Baseline, BaselineBuilder, BaselineMode};
use crate::processing::corrected::{build_corrected, CorrectedSeries};
use crate::processing::integrator::{IntegralResult, RegionIntegrator};
use crate::selection::RegionPair;
use crate::series::{validate_anchor, AnchorSet, TimeSeries};
use crate::telemetry::log::LogManager;

/// Everything a caller persists and renders after one recompute pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessOutput {
    pub baseline: Baseline,
    pub corrected: CorrectedSeries,
    /// One entry per completed pair, in input order.
    pub results: Vec<IntegralResult>,
}

/// Runs anchor validation, baseline correction and region integration.
///
/// Holds nothing but a logger, so separate channels can be processed from
/// separate threads with separate processors.
pub struct ChannelProcessor {
    logger: LogManager,
}

impl ChannelProcessor {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    pub fn for_channel(name: impl Into<String>) -> Self {
        Self {
            logger: LogManager::scoped(name),
        }
    }

    pub fn process(
        &self,
        series: &TimeSeries,
        anchors: &AnchorSet,
        pairs: &[RegionPair],
        k: f64,
    ) -> ChannelResult<ProcessOutput> {
        let invalid: Vec<Point> = anchors
            .iter()
            .copied()
            .filter(|&anchor| validate_anchor(series, anchor).is_err())
            .collect();
        if !invalid.is_empty() {
            self.logger.warn(&format!(
                "{} of {} anchors do not match a sample",
                invalid.len(),
                anchors.len()
            ));
            return Err(ChannelError::InvalidAnchors(invalid));
        }

        let baseline = BaselineBuilder::new(series).build(anchors)?;
        self.logger.record(&format!(
            "baseline {:?} from {} anchors over {} samples",
            BaselineMode::for_anchor_count(anchors.len()),
            anchors.len(),
            series.len()
        ));
        let corrected = build_corrected(series, &baseline);

        let integrator = RegionIntegrator::new(&corrected, k)?;
        let results = pairs
            .iter()
            .filter(|pair| pair.is_complete())
            .map(|pair| integrator.integrate(pair))
            .collect::<ChannelResult<Vec<_>>>()?;
        self.logger.record(&format!(
            "integrated {} of {} regions",
            results.len(),
            pairs.len()
        ));

        Ok(ProcessOutput {
            baseline,
            corrected,
            results,
        })
    }
}

impl Default for ChannelProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Single entry point for callers: pure given its inputs.
pub fn process(
    series: &TimeSeries,
    anchors: &AnchorSet,
    pairs: &[RegionPair],
    k: f64,
) -> ChannelResult<ProcessOutput> {
    ChannelProcessor::new().process(series, anchors, pairs, k)
}
