pub mod anchors;
pub mod time_series;

pub use anchors::{AnchorChange, AnchorSet};
pub use time_series::{validate_anchor, TimeSeries};
