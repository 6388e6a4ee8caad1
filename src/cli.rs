use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use rayon::prelude::*;
use yearexpr::solver::constants::DEFAULT_MAX_STEPS;
use yearexpr::utils::constants::YEAR_LENGTH;
use yearexpr::{YearSolver, year_prefix};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Yearexpr - Write 1, 2, 3, ... using the digits of a year
#[derive(Parser, Debug)]
#[command(name = "yearexpr")]
#[command(
    about = "Read a year from stdin and print the shortest expression for each consecutive integer"
)]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Reduction steps allowed per digit grouping
    #[arg(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report how far the consecutive listing reaches for a range of years
    Reach {
        /// First year of the range
        first: u16,
        /// Last year of the range (inclusive)
        last: u16,
    },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Option<Command>,
    pub max_steps: usize,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    if let Some(Command::Reach { first, last }) = &args.command {
        anyhow::ensure!(first <= last, "Empty year range {}..={}", first, last);
        anyhow::ensure!(
            usize::from(*last) < 10usize.pow(YEAR_LENGTH as u32),
            "Year {} has more than {} digits",
            last,
            YEAR_LENGTH
        );
    }

    Ok(CliConfig {
        command: args.command,
        max_steps: args.max_steps,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Read a year from stdin and print `v = expr` for each consecutive integer
fn run_listing(solver: &YearSolver) -> Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read year from stdin")?;
    let year = year_prefix(&line).context("Invalid year")?;

    let solutions = solver.solve(&year)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (value, expr) in solutions.consecutive() {
        writeln!(out, "{} = {}", value, expr)?;
    }

    if solutions.reach() == 0 {
        warn!("No expression found for 1");
    }
    Ok(())
}

/// Print how far each year in `first..=last` reaches, best first
fn run_reach(solver: &YearSolver, first: u16, last: u16) -> Result<()> {
    info!("Measuring reach for years {}..={}", first, last);

    let mut reaches = (first..=last)
        .into_par_iter()
        .map(|year| -> Result<(String, usize)> {
            let digits = format!("{:0width$}", year, width = YEAR_LENGTH);
            let reach = solver.reach(&digits)?;
            Ok((digits, reach))
        })
        .collect::<Result<Vec<_>>>()?;
    reaches.sort_by(|left, right| right.1.cmp(&left.1));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (digits, reach) in reaches {
        writeln!(out, "{} yields results up to {}", digits, reach)?;
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = YearSolver::with_max_steps(config.max_steps);

    match config.command {
        None => run_listing(&solver),
        Some(Command::Reach { first, last }) => run_reach(&solver, first, last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing_defaults() {
        let args = CliArgs::try_parse_from(["yearexpr"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(args.command.is_none());
            assert_eq!(args.max_steps, DEFAULT_MAX_STEPS);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_parsing_reach() {
        let args = CliArgs::try_parse_from(["yearexpr", "-m", "2", "reach", "1980", "1989"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.max_steps, 2);
            assert!(matches!(
                args.command,
                Some(Command::Reach {
                    first: 1980,
                    last: 1989
                })
            ));
        }
    }

    #[test]
    fn test_cli_args_rejects_bad_level() {
        assert!(CliArgs::try_parse_from(["yearexpr", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
