pub mod baseline;
pub mod corrected;
pub mod integrator;
pub mod processor;

pub use baseline::{build_baseline, Baseline, BaselineBuilder, BaselineMode};
pub use corrected::{build_corrected, CorrectedSeries};
pub use integrator::{integrate_region, IntegralResult, RegionIntegrator};
pub use processor::{process, ChannelProcessor, ProcessOutput};
