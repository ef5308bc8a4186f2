pub mod algorithm;
pub mod config;

pub use algorithm::classify;
pub use config::{NormalRanges, ParamRange};
