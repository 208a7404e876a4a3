//! Domain models for the vendor directory.

mod vendor;

pub use vendor::*;
