// Mon Oct 19 2026 - Alex

pub mod alignment;
pub mod config;
pub mod geometry;
pub mod output;
pub mod ui;
pub mod utils;

pub use alignment::{Alignment, AlignmentBuilder, AlignmentError, PedAlignment};
pub use config::Config;
pub use geometry::{Geometry, GeometryError, Sector};
pub use output::{Report, ReportFormatter};
