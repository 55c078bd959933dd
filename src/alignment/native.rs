// Mon Oct 19 2026 - Alex

use crate::alignment::{Alignment, AlignmentError};
use crate::geometry::Sector;
use serde::{Deserialize, Serialize};

/// The `(offset, grain_size)` pair as held by the native partitioning library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PedAlignment {
    pub offset: Sector,
    pub grain_size: Sector,
}

impl PedAlignment {
    pub fn new(offset: Sector, grain_size: Sector) -> Self {
        Self { offset, grain_size }
    }
}

impl Alignment {
    pub fn from_ped(ped: &PedAlignment) -> Result<Self, AlignmentError> {
        Self::new(ped.offset, ped.grain_size)
    }

    pub fn to_ped(&self) -> PedAlignment {
        PedAlignment::new(self.offset(), self.grain_size())
    }
}

impl TryFrom<PedAlignment> for Alignment {
    type Error = AlignmentError;

    fn try_from(ped: PedAlignment) -> Result<Self, Self::Error> {
        Self::from_ped(&ped)
    }
}

impl From<Alignment> for PedAlignment {
    fn from(alignment: Alignment) -> Self {
        alignment.to_ped()
    }
}

impl PartialEq<PedAlignment> for Alignment {
    fn eq(&self, other: &PedAlignment) -> bool {
        self.offset() == other.offset && self.grain_size() == other.grain_size
    }
}

impl PartialEq<Alignment> for PedAlignment {
    fn eq(&self, other: &Alignment) -> bool {
        other == self
    }
}
