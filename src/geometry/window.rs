// Mon Oct 19 2026 - Alex

use crate::geometry::{GeometryError, Sector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive window `[start, end]` of sectors on a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GeometrySpec")]
pub struct Geometry {
    start: Sector,
    length: Sector,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct GeometrySpec {
    start: Sector,
    length: Sector,
}

impl TryFrom<GeometrySpec> for Geometry {
    type Error = GeometryError;

    fn try_from(spec: GeometrySpec) -> Result<Self, Self::Error> {
        Self::new(spec.start, spec.length)
    }
}

impl Geometry {
    pub fn new(start: Sector, length: Sector) -> Result<Self, GeometryError> {
        if start < 0 {
            return Err(GeometryError::InvalidStart(start));
        }
        if length < 1 {
            return Err(GeometryError::InvalidLength(length));
        }
        if start.checked_add(length - 1).is_none() {
            return Err(GeometryError::Overflow { start, length });
        }
        Ok(Self { start, length })
    }

    pub fn start(&self) -> Sector {
        self.start
    }

    pub fn length(&self) -> Sector {
        self.length
    }

    pub fn end(&self) -> Sector {
        self.start + (self.length - 1)
    }

    pub fn contains(&self, sector: Sector) -> bool {
        sector >= self.start && sector <= self.end()
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Geometry(start={}, length={}, end={})", self.start, self.length, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let g = Geometry::new(0, 100).unwrap();
        assert_eq!(g.end(), 99);
        assert!(g.contains(0));
        assert!(g.contains(99));
        assert!(!g.contains(100));
        assert!(!g.contains(-1));
    }

    #[test]
    fn test_single_sector() {
        let g = Geometry::new(7, 1).unwrap();
        assert_eq!(g.start(), g.end());
        assert!(g.contains(7));
        assert!(!g.contains(8));
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(Geometry::new(-1, 10), Err(GeometryError::InvalidStart(-1)));
        assert_eq!(Geometry::new(0, 0), Err(GeometryError::InvalidLength(0)));
        assert_eq!(Geometry::new(0, -5), Err(GeometryError::InvalidLength(-5)));
        assert!(matches!(Geometry::new(i64::MAX, 2), Err(GeometryError::Overflow { .. })));
        assert!(Geometry::new(i64::MAX, 1).is_ok());
    }

    #[test]
    fn test_top_of_sector_range() {
        let g = Geometry::new(i64::MAX, 1).unwrap();
        assert_eq!(g.end(), i64::MAX);
        assert!(g.contains(i64::MAX));
        assert!(!g.contains(i64::MAX - 1));

        let g = Geometry::new(i64::MAX - 10, 11).unwrap();
        assert_eq!(g.end(), i64::MAX);
        assert!(g.contains(i64::MAX - 10));
        assert_eq!(
            g.to_string(),
            format!("Geometry(start={}, length=11, end={})", i64::MAX - 10, i64::MAX)
        );
    }

    #[test]
    fn test_serde_validates() {
        let g: Geometry = serde_json::from_str(r#"{"start": 2048, "length": 4096}"#).unwrap();
        assert_eq!(g.end(), 6143);
        assert!(serde_json::from_str::<Geometry>(r#"{"start": 0, "length": 0}"#).is_err());

        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"start":2048,"length":4096}"#);
    }

    #[test]
    fn test_display() {
        let g = Geometry::new(34, 66).unwrap();
        assert_eq!(g.to_string(), "Geometry(start=34, length=66, end=99)");
    }
}
