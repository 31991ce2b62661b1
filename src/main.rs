//! Interactive radix calculator.
//!
//! Reads commands from stdin, prints results in all four radixes and appends
//! applied operations to a history file.

use clap::Parser;
use radix_calculator::prelude::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "radix-calc")]
#[command(about = "Running-total calculator with binary, octal, decimal and hexadecimal input")]
#[command(version)]
struct Cli {
    /// Input radix (2, 8, 10 or 16); asked interactively when omitted
    #[arg(short, long, value_parser = parse_radix)]
    radix: Option<Radix>,

    /// Append applied operations to this file
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    log_file: PathBuf,

    /// Do not write a history file
    #[arg(long)]
    no_log: bool,

    /// Only print the result in the active radix
    #[arg(long)]
    active_only: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_radix(text: &str) -> Result<Radix, String> {
    text.parse::<Radix>().map_err(|e| e.to_string())
}

impl Cli {
    fn config(&self) -> CalculatorConfig {
        let mut config = match self.radix {
            Some(radix) => CalculatorConfig::headless(radix),
            None => CalculatorConfig::interactive().without_history_file(),
        };
        if !self.no_log {
            config = config.with_history_file(&self.log_file);
        }
        if self.active_only {
            config = config.with_active_radix_only();
        }
        config
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "radix_calculator=warn",
        1 => "radix_calculator=debug",
        _ => "radix_calculator=trace",
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    let calculator = match create_from_config(&config) {
        Ok(calculator) => calculator,
        Err(err) => {
            eprintln!("radix-calc: {}", err);
            return ExitCode::FAILURE;
        },
    };

    let stdin = io::stdin();
    let mut session = Session::new(calculator, &config, stdin.lock(), io::stdout());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("radix-calc: {}", err);
            ExitCode::FAILURE
        },
    }
}
