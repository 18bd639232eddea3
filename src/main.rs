// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use mibonacci::config::{Config, DEFAULT_MAX_TERMS};
use mibonacci::programs::{self, Operation};

#[derive(Parser, Debug)]
#[command(name = "mibonacci")]
#[command(about = "Generate, filter and reconcile Mibonacci sequences")]
#[command(version)]
struct Cli {
    /// Maximum number of query values read, and last position the checker visits
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_TERMS,
        value_parser = Config::parse_max_terms
    )]
    max_terms: usize,

    /// Log level: error | warn | info | debug | trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input file (defaults to the operation's task file)
    input: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a list of integers in reverse order
    Reverse(InputArgs),
    /// Print terms 0..=n of a sequence
    Generate(InputArgs),
    /// Print the terms at the listed positions
    Encrypt(InputArgs),
    /// Reconcile listed values against a sequence
    Check(InputArgs),
    /// Print the buffer-prime terms 0..=n of a sequence
    Prime(InputArgs),
}

impl Command {
    fn split(self) -> (Operation, Option<PathBuf>) {
        match self {
            Command::Reverse(args) => (Operation::Reverse, args.input),
            Command::Generate(args) => (Operation::Generate, args.input),
            Command::Encrypt(args) => (Operation::Encrypt, args.input),
            Command::Check(args) => (Operation::Check, args.input),
            Command::Prime(args) => (Operation::Prime, args.input),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::new(cli.max_terms);
    let (operation, input) = cli.command.split();
    let path = input.unwrap_or_else(|| PathBuf::from(operation.default_input()));

    info!("{} reading {:?}", operation, path);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read input file {:?}", path))?;

    let output = programs::run(operation, &text, &config)
        .with_context(|| format!("{} failed on {:?}", operation, path))?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
