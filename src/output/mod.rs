// Mon Oct 19 2026 - Alex

pub mod formatter;
pub mod report;

pub use formatter::ReportFormatter;
pub use report::{Direction, Report};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
