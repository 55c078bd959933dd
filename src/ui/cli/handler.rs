// Mon Oct 19 2026 - Alex

use super::args::{Args, Command, IntersectArgs, SectorArgs};
use crate::alignment::Alignment;
use crate::config::Config;
use crate::geometry::Geometry;
use crate::output::{Direction, OutputFormat, Report, ReportFormatter};
use crate::utils::LoggingUtils;
use anyhow::Context;
use log::debug;

pub struct CommandHandler {
    config: Config,
}

impl CommandHandler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?,
            None => Config::default(),
        };

        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }
        if args.json {
            config.output_format = OutputFormat::Json;
        }
        config.validate()?;

        Ok(Self::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging();

        if args.no_color {
            colored::control::set_override(false);
        }

        let report = self.report(&args.command)?;
        let output = ReportFormatter::new()
            .with_format(self.config.output_format)
            .with_pretty_print(self.config.pretty_print)
            .render(&report)?;
        println!("{}", output);
        Ok(())
    }

    fn setup_logging(&self) {
        LoggingUtils::init_logger(LoggingUtils::level_from_str(&self.config.log_level));
    }

    pub fn report(&self, command: &Command) -> anyhow::Result<Report> {
        match command {
            Command::Check(args) => self.handle_check(args),
            Command::Up(args) => self.handle_search(Direction::Up, args),
            Command::Down(args) => self.handle_search(Direction::Down, args),
            Command::Nearest(args) => self.handle_search(Direction::Nearest, args),
            Command::Intersect(args) => self.handle_intersect(args),
        }
    }

    fn resolve(&self, args: &SectorArgs) -> anyhow::Result<(Geometry, Alignment)> {
        let geometry = Geometry::new(args.start, args.length).context("Invalid geometry")?;
        let mut alignment = self
            .config
            .default_alignment()
            .context("Invalid default alignment")?;
        if let Some(offset) = args.offset {
            alignment.set_offset(offset);
        }
        if let Some(grain) = args.grain {
            alignment.set_grain_size(grain).context("Invalid alignment")?;
        }
        debug!("Using {} over {}", alignment, geometry);
        Ok((geometry, alignment))
    }

    fn handle_check(&self, args: &SectorArgs) -> anyhow::Result<Report> {
        let (geometry, alignment) = self.resolve(args)?;
        Ok(Report::Check {
            geometry,
            alignment,
            sector: args.sector,
            aligned: alignment.is_aligned(&geometry, args.sector),
        })
    }

    fn handle_search(&self, direction: Direction, args: &SectorArgs) -> anyhow::Result<Report> {
        let (geometry, alignment) = self.resolve(args)?;
        let result = match direction {
            Direction::Up => alignment.align_up(&geometry, args.sector),
            Direction::Down => alignment.align_down(&geometry, args.sector),
            Direction::Nearest => alignment.align_nearest(&geometry, args.sector),
        }?;

        Ok(Report::Search {
            direction,
            geometry,
            alignment,
            sector: args.sector,
            result,
        })
    }

    fn handle_intersect(&self, args: &IntersectArgs) -> anyhow::Result<Report> {
        let first =
            Alignment::new(args.offset_a, args.grain_a).context("Invalid first alignment")?;
        let second =
            Alignment::new(args.offset_b, args.grain_b).context("Invalid second alignment")?;
        let result = first.intersect(&second)?;
        Ok(Report::Intersect { first, second, result })
    }
}
