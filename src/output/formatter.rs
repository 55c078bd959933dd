// Mon Oct 19 2026 - Alex

use crate::output::{OutputError, OutputFormat, Report};
use colored::Colorize;

pub struct ReportFormatter {
    format: OutputFormat,
    pretty_print: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_print: true,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn render(&self, report: &Report) -> Result<String, OutputError> {
        match self.format {
            OutputFormat::Json if self.pretty_print => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Json => Ok(serde_json::to_string(report)?),
            OutputFormat::Text => Ok(self.render_text(report)),
        }
    }

    fn render_text(&self, report: &Report) -> String {
        match report {
            Report::Check { geometry, alignment, sector, aligned } => {
                let verdict = if *aligned {
                    "aligned".green().bold()
                } else {
                    "not aligned".red().bold()
                };
                format!(
                    "{} sector {} is {} ({}, {})",
                    "[*]".blue(),
                    sector,
                    verdict,
                    alignment,
                    geometry
                )
            }
            Report::Search { direction, geometry, alignment, sector, result } => {
                format!(
                    "{} align {} {} -> {} ({}, {})",
                    "[+]".green(),
                    direction,
                    sector,
                    result.to_string().cyan().bold(),
                    alignment,
                    geometry
                )
            }
            Report::Intersect { first, second, result: Some(merged) } => {
                let merged = merged.to_string().cyan().bold();
                format!("{} {} ∩ {} = {}", "[+]".green(), first, second, merged)
            }
            Report::Intersect { first, second, result: None } => {
                let empty = "no intersection".yellow().bold();
                format!("{} {} ∩ {} = {}", "[!]".yellow(), first, second, empty)
            }
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
