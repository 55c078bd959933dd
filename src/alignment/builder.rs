// Mon Oct 19 2026 - Alex

use crate::alignment::{Alignment, AlignmentError, PedAlignment};
use crate::geometry::Sector;

/// Builds an [`Alignment`] from either an explicit `(offset, grain_size)` pair
/// or a native [`PedAlignment`]. Anything else is rejected.
#[derive(Debug, Clone, Default)]
pub struct AlignmentBuilder {
    offset: Option<Sector>,
    grain_size: Option<Sector>,
    ped: Option<PedAlignment>,
}

impl AlignmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: Sector) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn grain_size(mut self, grain_size: Sector) -> Self {
        self.grain_size = Some(grain_size);
        self
    }

    pub fn ped(mut self, ped: PedAlignment) -> Self {
        self.ped = Some(ped);
        self
    }

    pub fn build(self) -> Result<Alignment, AlignmentError> {
        match (self.ped, self.offset, self.grain_size) {
            (Some(ped), None, None) => Alignment::from_ped(&ped),
            (Some(_), _, _) => Err(AlignmentError::ConflictingArguments(
                "PedAlignment cannot be combined with offset or grain_size".to_string(),
            )),
            (None, Some(offset), Some(grain_size)) => Alignment::new(offset, grain_size),
            (None, Some(_), None) => Err(AlignmentError::MissingArgument("grain_size".to_string())),
            (None, None, Some(_)) => Err(AlignmentError::MissingArgument("offset".to_string())),
            (None, None, None) => Err(AlignmentError::MissingArgument(
                "offset and grain_size, or a PedAlignment".to_string(),
            )),
        }
    }
}
