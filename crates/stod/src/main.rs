mod args;
mod render;

use crate::args::Cli;
use crate::render::Outcome;
use clap::Parser;
use std::io::{self, BufRead};
use std::process::ExitCode;
use stod_core::{Error, ParseOptions, ParseSettings, Unit, parse_with_settings};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbosity);

    if cli.list_units {
        print!("{}", render::render_units());
        return ExitCode::SUCCESS;
    }

    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("stod: {e}");
            return ExitCode::from(2);
        }
    };

    let exprs = if cli.exprs.is_empty() {
        match read_stdin_lines() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("stod: {}", Error::from(e));
                return ExitCode::from(2);
            }
        }
    } else {
        cli.exprs.clone()
    };

    let outcomes: Vec<Outcome<'_>> = exprs
        .iter()
        .map(|input| Outcome {
            input: input.as_str(),
            value: parse_with_settings(input, &settings),
            unit: settings.return_unit,
        })
        .collect();

    let out = render::render(&outcomes, &settings, cli.format, cli.verbosity, cli.quiet);
    print!("{out}");

    ExitCode::SUCCESS
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

// Options file first, then command-line flags on top.
fn resolve_settings(cli: &Cli) -> Result<ParseSettings, Error> {
    let base = match cli.options.as_deref() {
        Some(path) => ParseOptions::load(path)?,
        None => ParseOptions::default(),
    };

    // The CLI is stricter than the library: a typo in --unit is an error
    // rather than a silent fallback to milliseconds.
    if let Some(unit) = cli.unit.as_deref() {
        unit.parse::<Unit>()?;
    }

    let flags = ParseOptions {
        return_unit_as: cli.unit.clone(),
        round_milliseconds: if cli.no_round_ms {
            Some(false)
        } else if cli.round_ms {
            Some(true)
        } else {
            None
        },
        round_return_unit: if cli.no_round_unit {
            Some(false)
        } else if cli.round_unit {
            Some(true)
        } else {
            None
        },
    };

    let settings = base.merged_with(flags).resolve();
    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}

fn read_stdin_lines() -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        lines.push(line.to_string());
    }
    Ok(lines)
}
