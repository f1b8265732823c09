// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `seqgen` command-line entry point.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use seqgen::driver::{self, DriverOptions, Problem};
use tracing::{info, Level};

#[derive(Parser)]
#[command(
    name = "seqgen",
    about = "Enumerate constrained sequences in lexicographic order",
    version
)]
struct Cli {
    /// Which family of sequences to generate
    #[arg(value_enum)]
    problem: Problem,

    /// Read parameters from this file instead of stdin
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Fail on out-of-domain parameters instead of printing nothing
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let options = DriverOptions { strict: cli.strict };
    let mut output = BufWriter::new(io::stdout().lock());

    let lines = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            driver::run(cli.problem, options, BufReader::new(file), &mut output)?
        }
        None => driver::run(cli.problem, options, io::stdin().lock(), &mut output)?,
    };
    output.flush().context("failed to flush output")?;

    info!(problem = ?cli.problem, lines, "done");
    Ok(())
}
