pub mod checksum;
pub mod dataset;

pub use checksum::calculate_checksum;
pub use dataset::*;
