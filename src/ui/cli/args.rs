// Mon Oct 19 2026 - Alex

use crate::geometry::Sector;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sector-align")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Sector alignment arithmetic for partition layouts", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[arg(long, global = true)]
    pub json: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Test whether a sector satisfies the alignment
    Check(SectorArgs),
    /// Smallest aligned sector at or above the given one
    Up(SectorArgs),
    /// Largest aligned sector at or below the given one
    Down(SectorArgs),
    /// Closest aligned sector, preferring the lower one on a tie
    Nearest(SectorArgs),
    /// Merge two alignment rules into one
    Intersect(IntersectArgs),
}

#[derive(Parser, Debug)]
pub struct SectorArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub start: Sector,

    #[arg(long, allow_hyphen_values = true)]
    pub length: Sector,

    #[arg(long, allow_hyphen_values = true)]
    pub sector: Sector,

    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<Sector>,

    #[arg(long, allow_hyphen_values = true)]
    pub grain: Option<Sector>,
}

#[derive(Parser, Debug)]
pub struct IntersectArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub offset_a: Sector,

    #[arg(long, allow_hyphen_values = true)]
    pub grain_a: Sector,

    #[arg(long, allow_hyphen_values = true)]
    pub offset_b: Sector,

    #[arg(long, allow_hyphen_values = true)]
    pub grain_b: Sector,
}
