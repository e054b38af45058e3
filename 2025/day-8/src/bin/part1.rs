use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_8::config::DEFAULT_CONNECTIONS;
use aoc2025_day_8::{part1, Config};

/// Multiplies the sizes of the three largest circuits after wiring up the
/// closest junction boxes.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Puzzle input, one `x,y,z` junction box per line
    #[arg(default_value = "input1.txt")]
    input: PathBuf,

    /// Number of closest pairs to connect
    #[arg(short, long, default_value_t = DEFAULT_CONNECTIONS)]
    connections: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let input = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", args.input.display()))?;
    let result = part1::process_with(&input, Config::with_connections(args.connections))?;
    println!("Result: {}", result);
    Ok(())
}
