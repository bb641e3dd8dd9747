pub mod region;

pub use region::{RegionPair, RegionSelector, SelectorState};
