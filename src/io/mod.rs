//! I/O modules for demo data generation.

pub mod sample_data;

// Re-export commonly used types
pub use sample_data::{SampleElection, Region, RegionResult};
