mod probe;

pub use probe::{DurationProbe, FfprobeDurationProbe};
