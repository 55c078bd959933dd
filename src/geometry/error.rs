// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Invalid start sector: {0} (must be >= 0)")]
    InvalidStart(i64),
    #[error("Invalid length: {0} (must be >= 1)")]
    InvalidLength(i64),
    #[error("Geometry end overflows: start {start} + length {length}")]
    Overflow { start: i64, length: i64 },
}
