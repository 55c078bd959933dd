// Mon Oct 19 2026 - Alex

pub mod error;
pub mod window;

pub use error::GeometryError;
pub use window::Geometry;

/// Sector index on a logical device.
pub type Sector = i64;
