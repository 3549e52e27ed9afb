pub mod dimensions;
pub mod indicators;
pub mod themes;
pub mod thresholds;
pub mod vector;
