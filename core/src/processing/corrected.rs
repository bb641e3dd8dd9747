use serde::{Deserialize, Serialize};

use crate::processing::baseline::Baseline;
use crate::series::TimeSeries;

/// Raw signal minus baseline, on the raw series' time domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrectedSeries {
    series: TimeSeries,
}

impl CorrectedSeries {
    pub fn as_series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn into_series(self) -> TimeSeries {
        self.series
    }

    pub fn times(&self) -> &[f64] {
        self.series.times()
    }

    pub fn values(&self) -> &[f64] {
        self.series.values()
    }
}

/// `corrected[i] = raw[i] - baseline[i]`.
///
/// The baseline is expected to come from [`super::build_baseline`] on the
/// same series, so the domains match by construction.
pub fn build_corrected(series: &TimeSeries, baseline: &Baseline) -> CorrectedSeries {
    debug_assert_eq!(series.len(), baseline.len());
    let values = series
        .values()
        .iter()
        .zip(&baseline.values)
        .map(|(raw, base)| raw - base)
        .collect();
    CorrectedSeries {
        series: series.with_values(values),
    }
}
