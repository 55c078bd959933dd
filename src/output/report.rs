// Mon Oct 19 2026 - Alex

use crate::alignment::Alignment;
use crate::geometry::{Geometry, Sector};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Nearest,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Nearest => write!(f, "nearest"),
        }
    }
}

/// Outcome of a single command, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Check {
        geometry: Geometry,
        alignment: Alignment,
        sector: Sector,
        aligned: bool,
    },
    Search {
        direction: Direction,
        geometry: Geometry,
        alignment: Alignment,
        sector: Sector,
        result: Sector,
    },
    Intersect {
        first: Alignment,
        second: Alignment,
        result: Option<Alignment>,
    },
}
