use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_8::part2;

/// Finds the connection that joins every junction box into one circuit.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Puzzle input, one `x,y,z` junction box per line
    #[arg(default_value = "input2.txt")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let input = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", args.input.display()))?;
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
