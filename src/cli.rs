use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use numcomb::solver::constants::{DEFAULT_MAX_COUNT, DEFAULT_RESULT_COUNT};
use numcomb::{LogProgress, OperatorSet, SearchConfig, search};

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

/// Numcomb - Find arithmetic expressions over small integers that reach a target
#[derive(Parser, Debug)]
#[command(name = "numcomb")]
#[command(about = "Find expressions over a pool of integers that evaluate to a target value")]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// Largest integer in the pool (the pool starts at 1)
    #[arg(long, default_value_t = 25)]
    pub max_int: i64,

    /// Disable addition
    #[arg(long)]
    pub no_add: bool,

    /// Enable multiplication
    #[arg(long)]
    pub multiply: bool,

    /// Enable subtraction
    #[arg(long)]
    pub subtract: bool,

    /// Enable exact division
    #[arg(long)]
    pub divide: bool,

    /// Enable exponentiation
    #[arg(long)]
    pub exponentiate: bool,

    /// Integers to leave out of the pool, comma separated
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<i64>,

    /// Most integers a single expression may use
    #[arg(long, default_value_t = DEFAULT_MAX_COUNT)]
    pub max_numbers: usize,

    /// Number of solutions to print
    #[arg(long, default_value_t = DEFAULT_RESULT_COUNT)]
    pub top: usize,

    /// Keep every intermediate result and never stop early
    #[arg(long)]
    pub exhaustive: bool,

    /// Log level (default: info)
    #[arg(short, long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl CliArgs {
    pub fn operators(&self) -> OperatorSet {
        OperatorSet {
            add: !self.no_add,
            subtract: self.subtract,
            multiply: self.multiply,
            divide: self.divide,
            exponentiate: self.exponentiate,
        }
    }

    pub fn to_config(&self) -> SearchConfig {
        SearchConfig::new(self.target, self.max_int)
            .with_operators(self.operators())
            .with_excluded(self.exclude.iter().copied())
            .with_max_count(self.max_numbers)
            .with_result_count(self.top)
            .with_exhaustive(self.exhaustive)
            .with_progress(LogProgress)
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    let config = args.to_config();
    info!("Searching with {:?}", config);

    let solutions = search(&config).context("Search could not run")?;
    if solutions.is_empty() {
        warn!("No matching expression found");
        println!("No solutions found.");
        return Ok(());
    }

    for solution in solutions {
        println!("{}", solution);
    }
    Ok(())
}
