pub mod indicators;
pub mod region;
pub mod weights;
