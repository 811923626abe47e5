use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// stod: turn duration expressions like "1h 30 min" into numbers.
#[derive(Debug, Parser)]
#[command(name = "stod")]
#[command(about = "Parse human-written durations into numbers", long_about = None)]
pub struct Cli {
    /// Expressions to parse (reads lines from stdin when none are given)
    pub exprs: Vec<String>,

    /// Unit of the printed result (d, h, m, s, ms or any alias)
    #[arg(short = 'u', long)]
    pub unit: Option<String>,

    /// Round the millisecond total before converting (the default)
    #[arg(long, overrides_with = "no_round_ms")]
    pub round_ms: bool,

    /// Keep fractional milliseconds
    #[arg(long)]
    pub no_round_ms: bool,

    /// Round the converted value to a whole number of --unit
    #[arg(long, overrides_with = "no_round_unit")]
    pub round_unit: bool,

    /// Keep the converted value fractional
    #[arg(long)]
    pub no_round_unit: bool,

    /// JSON options file; flags given on the command line take precedence
    #[arg(long, value_name = "PATH")]
    pub options: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Quiet output (print only values)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbosity (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Print the unit table and exit
    #[arg(long)]
    pub list_units: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
