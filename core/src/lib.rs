//! Baseline-correction and peak-integration core for instrument channel traces.
//!
//! A channel is an ordered series of `(time, value)` samples. Users pick anchor
//! points that define a baseline, the baseline is subtracted from the raw
//! signal, and selected regions of the corrected signal are integrated with
//! the trapezoidal rule. Everything here is pure computation; persistence and
//! rendering belong to the caller.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod record;
pub mod selection;
pub mod series;
pub mod session;
pub mod telemetry;

pub use prelude::{ChannelError, ChannelResult, Point};
pub use processing::{
    build_baseline, build_corrected, integrate_region, process, Baseline, ChannelProcessor,
    CorrectedSeries, IntegralResult, ProcessOutput,
};
pub use record::ChannelRecord;
pub use selection::{RegionPair, RegionSelector, SelectorState};
pub use series::{validate_anchor, AnchorChange, AnchorSet, TimeSeries};
pub use session::EditingSession;
