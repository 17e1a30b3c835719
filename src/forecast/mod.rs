//! Mock grid forecast generation: region profiles and synthetic series.

pub mod generator;
pub mod profile;
pub mod types;

pub use generator::GridForecaster;
pub use profile::RegionProfile;
pub use types::TimePoint;
