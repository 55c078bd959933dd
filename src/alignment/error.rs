// Mon Oct 19 2026 - Alex

use crate::geometry::{Geometry, GeometryError, Sector};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlignmentError {
    #[error("Invalid grain size: {0} (must be >= 0)")]
    InvalidGrainSize(Sector),
    #[error("Missing argument: {0}")]
    MissingArgument(String),
    #[error("Conflicting arguments: {0}")]
    ConflictingArguments(String),
    #[error("Type error: {name} must be an integer, got {found}")]
    Type { name: String, found: String },
    #[error("No such attribute: {0}")]
    NoSuchAttribute(String),
    #[error("No aligned sector for {sector} exists in {geometry}")]
    NoAlignedSector { sector: Sector, geometry: Geometry },
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Construction,
    Type,
    Attribute,
    Domain,
    Overflow,
}

impl AlignmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AlignmentError::InvalidGrainSize(_)
            | AlignmentError::MissingArgument(_)
            | AlignmentError::ConflictingArguments(_)
            | AlignmentError::Geometry(_) => ErrorKind::Construction,
            AlignmentError::Type { .. } => ErrorKind::Type,
            AlignmentError::NoSuchAttribute(_) => ErrorKind::Attribute,
            AlignmentError::NoAlignedSector { .. } => ErrorKind::Domain,
            AlignmentError::Overflow(_) => ErrorKind::Overflow,
        }
    }
}
