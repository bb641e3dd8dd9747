use serde::{Deserialize, Serialize};

use crate::math::quadrature::QuadratureHelper;
use crate::prelude::{ChannelError, ChannelResult};
use crate::processing::corrected::CorrectedSeries;
use crate::selection::RegionPair;

/// Integrated quantity for one completed region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegralResult {
    pub start: f64,
    pub end: f64,
    /// Trapezoidal area divided by the conversion constant.
    pub area: f64,
    /// Trapezoidal area of the corrected signal before conversion.
    pub signal_area: f64,
    pub label: String,
}

/// Integrates the corrected signal over completed regions.
///
/// The conversion constant is supplied by the caller; its physical meaning
/// (for instance charge per mole of electrons) is not the engine's concern.
pub struct RegionIntegrator<'a> {
    corrected: &'a CorrectedSeries,
    k: f64,
}

impl<'a> RegionIntegrator<'a> {
    pub fn new(corrected: &'a CorrectedSeries, k: f64) -> ChannelResult<Self> {
        if k == 0.0 || !k.is_finite() {
            return Err(ChannelError::InvalidConversionConstant(k));
        }
        if corrected.times().is_empty() {
            return Err(ChannelError::EmptyDomain);
        }
        Ok(Self { corrected, k })
    }

    pub fn integrate(&self, pair: &RegionPair) -> ChannelResult<IntegralResult> {
        let (t0, t1) = pair.span().ok_or(ChannelError::IncompleteRegion {
            start: pair.start.time,
        })?;

        // Regions covering fewer than two samples fall out as zero here.
        let range = self.corrected.as_series().indices_within(t0, t1);
        let signal_area = QuadratureHelper::trapezoid(
            &self.corrected.times()[range.clone()],
            &self.corrected.values()[range],
        );

        Ok(IntegralResult {
            start: t0,
            end: t1,
            area: signal_area / self.k,
            signal_area,
            label: pair.label.clone(),
        })
    }
}

pub fn integrate_region(
    corrected: &CorrectedSeries,
    pair: &RegionPair,
    k: f64,
) -> ChannelResult<IntegralResult> {
    RegionIntegrator::new(corrected, k)?.integrate(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Point;
    use crate::processing::{build_corrected, Baseline};
    use crate::series::TimeSeries;

    fn corrected(values: Vec<f64>) -> CorrectedSeries {
        let times = (0..values.len()).map(|i| i as f64).collect();
        let series = TimeSeries::new(times, values).unwrap();
        let baseline = Baseline {
            values: vec![0.0; series.len()],
        };
        build_corrected(&series, &baseline)
    }

    #[test]
    fn integrates_and_converts() {
        let corrected = corrected(vec![0.0, 10.0, 0.0, 10.0, 0.0]);
        let pair = RegionPair::complete(Point::new(1.0, 10.0), Point::new(3.0, 10.0), "peak");
        let result = integrate_region(&corrected, &pair, 2.0).unwrap();
        assert_eq!(result.signal_area, 10.0);
        assert_eq!(result.area, 5.0);
        assert_eq!((result.start, result.end), (1.0, 3.0));
        assert_eq!(result.label, "peak");
    }

    #[test]
    fn single_sample_region_is_zero() {
        let corrected = corrected(vec![0.0, 10.0, 0.0]);
        let pair = RegionPair::complete(Point::new(1.0, 10.0), Point::new(1.0, 10.0), "dot");
        let result = integrate_region(&corrected, &pair, 1.0).unwrap();
        assert_eq!(result.area, 0.0);
    }

    #[test]
    fn negative_signal_keeps_its_sign() {
        let corrected = corrected(vec![-1.0, -2.0, -1.0]);
        let pair = RegionPair::complete(Point::new(2.0, -1.0), Point::new(0.0, -1.0), "dip");
        let result = integrate_region(&corrected, &pair, 4.0).unwrap();
        assert_eq!(result.signal_area, -3.0);
        assert_eq!(result.area, -0.75);
    }

    #[test]
    fn rejects_pending_pairs_and_bad_constants() {
        let corrected = corrected(vec![1.0, 1.0]);
        let pending = RegionPair::pending(Point::new(0.0, 1.0), "open");
        assert_eq!(
            integrate_region(&corrected, &pending, 1.0).unwrap_err(),
            ChannelError::IncompleteRegion { start: 0.0 }
        );

        let pair = RegionPair::complete(Point::new(0.0, 1.0), Point::new(1.0, 1.0), "x");
        assert!(matches!(
            integrate_region(&corrected, &pair, 0.0),
            Err(ChannelError::InvalidConversionConstant(_))
        ));
        assert!(integrate_region(&corrected, &pair, f64::NAN).is_err());
    }
}
