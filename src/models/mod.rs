pub mod classification;
pub mod entry;
pub mod reading;

pub use classification::{Classification, RangeState};
pub use entry::{Entry, Provenance};
pub use reading::{Parameter, Reading};
