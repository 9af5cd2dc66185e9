mod builder;
mod types;

pub use builder::build_tiers;
pub use types::{Interval, Tier, Timeline};
