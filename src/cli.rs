use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::display::{render_input, render_solutions};
use crate::solver::GameSolver;
use crate::utils::validate_numbers;

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

/// Twentyfour - solve the 24 Game
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Find every way to combine four numbers into 24 with +, -, * and /")]
#[command(version)]
pub struct CliArgs {
    /// The four numbers to play with
    #[arg(short, long, value_name = "num", num_args = 1.., required = true)]
    pub numbers: Vec<f64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: [f64; 4],
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    validate_numbers(&args.numbers)?;

    Ok(CliConfig {
        numbers: [
            args.numbers[0],
            args.numbers[1],
            args.numbers[2],
            args.numbers[3],
        ],
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

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let mut solver = GameSolver::new();

    info!(
        "Searching for ways to make 24 from {}",
        render_input(&config.numbers)
    );

    let solutions = solver.solve(config.numbers);
    if solutions.is_empty() {
        warn!("No combination reaches 24");
        println!("No solution found for {}", render_input(&config.numbers));
        return Ok(());
    }

    println!("Input numbers: {}", render_input(&config.numbers));
    print!("{}", render_solutions(&solutions, &config.numbers));
    Ok(())
}
