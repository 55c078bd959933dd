// Mon Oct 19 2026 - Alex

use crate::alignment::{AlignmentError, PedAlignment};
use crate::geometry::{Geometry, Sector};
use crate::utils::MathUtils;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A periodic sector constraint: `sector ≡ offset (mod grain_size)`.
///
/// A grain size of zero is the degenerate rule where only `offset` itself
/// counts as aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PedAlignment", into = "PedAlignment")]
pub struct Alignment {
    offset: Sector,
    grain_size: Sector,
}

impl Alignment {
    pub fn new(offset: Sector, grain_size: Sector) -> Result<Self, AlignmentError> {
        if grain_size < 0 {
            return Err(AlignmentError::InvalidGrainSize(grain_size));
        }
        Ok(Self { offset, grain_size })
    }

    pub fn offset(&self) -> Sector {
        self.offset
    }

    pub fn grain_size(&self) -> Sector {
        self.grain_size
    }

    pub fn set_offset(&mut self, offset: Sector) {
        self.offset = offset;
    }

    pub fn set_grain_size(&mut self, grain_size: Sector) -> Result<(), AlignmentError> {
        if grain_size < 0 {
            return Err(AlignmentError::InvalidGrainSize(grain_size));
        }
        self.grain_size = grain_size;
        Ok(())
    }

    /// Whether `sector` satisfies the congruence, ignoring any geometry.
    pub fn satisfies(&self, sector: Sector) -> bool {
        if self.grain_size == 0 {
            return sector == self.offset;
        }
        let diff = sector as i128 - self.offset as i128;
        MathUtils::mod_floor(diff, self.grain_size as i128) == 0
    }

    pub fn is_aligned(&self, geometry: &Geometry, sector: Sector) -> bool {
        geometry.contains(sector) && self.satisfies(sector)
    }

    pub fn align_up(&self, geometry: &Geometry, sector: Sector) -> Result<Sector, AlignmentError> {
        let result = self.search_up(geometry, sector);
        trace!("align_up({}) in {} with {} -> {:?}", sector, geometry, self, result);
        result.ok_or(AlignmentError::NoAlignedSector { sector, geometry: *geometry })
    }

    pub fn align_down(
        &self,
        geometry: &Geometry,
        sector: Sector,
    ) -> Result<Sector, AlignmentError> {
        let result = self.search_down(geometry, sector);
        trace!("align_down({}) in {} with {} -> {:?}", sector, geometry, self, result);
        result.ok_or(AlignmentError::NoAlignedSector { sector, geometry: *geometry })
    }

    /// Closest aligned sector inside `geometry`; ties go to the lower sector.
    pub fn align_nearest(
        &self,
        geometry: &Geometry,
        sector: Sector,
    ) -> Result<Sector, AlignmentError> {
        let below = self.search_down(geometry, sector);
        let above = self.search_up(geometry, sector);

        let result = match (below, above) {
            (Some(down), Some(up)) => {
                let down_dist = sector as i128 - down as i128;
                let up_dist = up as i128 - sector as i128;
                if up_dist < down_dist {
                    Some(up)
                } else {
                    Some(down)
                }
            }
            (down, up) => down.or(up),
        };

        trace!("align_nearest({}) in {} with {} -> {:?}", sector, geometry, self, result);
        result.ok_or(AlignmentError::NoAlignedSector { sector, geometry: *geometry })
    }

    fn search_up(&self, geometry: &Geometry, sector: Sector) -> Option<Sector> {
        let floor = sector.max(geometry.start());
        if floor > geometry.end() {
            return None;
        }
        let candidate = self.first_at_or_above(floor)?;
        if candidate > geometry.end() as i128 {
            return None;
        }
        Some(candidate as Sector)
    }

    fn search_down(&self, geometry: &Geometry, sector: Sector) -> Option<Sector> {
        let ceiling = sector.min(geometry.end());
        if ceiling < geometry.start() {
            return None;
        }
        let candidate = self.last_at_or_below(ceiling)?;
        if candidate < geometry.start() as i128 {
            return None;
        }
        Some(candidate as Sector)
    }

    fn first_at_or_above(&self, floor: Sector) -> Option<i128> {
        let floor = floor as i128;
        let offset = self.offset as i128;
        if self.grain_size == 0 {
            return (offset >= floor).then_some(offset);
        }
        let grain = self.grain_size as i128;
        let rem = MathUtils::mod_floor(floor - offset, grain);
        if rem == 0 {
            Some(floor)
        } else {
            Some(floor + grain - rem)
        }
    }

    fn last_at_or_below(&self, ceiling: Sector) -> Option<i128> {
        let ceiling = ceiling as i128;
        let offset = self.offset as i128;
        if self.grain_size == 0 {
            return (offset <= ceiling).then_some(offset);
        }
        let grain = self.grain_size as i128;
        Some(ceiling - MathUtils::mod_floor(ceiling - offset, grain))
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alignment(offset={}, grain_size={})", self.offset, self.grain_size)
    }
}
