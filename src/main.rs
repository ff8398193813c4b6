//! Command-line front end for the solver.

use anyhow::Result;
use clap::Parser;

use muggins::{best, parse_ends, parse_hand};

/// Find the highest-scoring line of play for a rack of dominoes.
#[derive(Parser)]
#[command(name = "muggins", version, about)]
struct Cli {
    /// Rack tiles as two-digit pairs, e.g. `62,01,40,61,24`
    hand: String,

    /// Open ends, e.g. `2,44,1`. List the showing number once for an open
    /// end, twice for a crossed double with both stubs open, a number and
    /// a dash for a crossed double with one stub open, and three times for
    /// an unattached double
    ends: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let hand = parse_hand(&cli.hand)?;
    let layout = parse_ends(&cli.ends)?;

    let solution = best(&hand, &layout);

    println!("Top Score: {}", solution.score);
    println!("=== PATH ===");
    for (i, step) in solution.path.iter().enumerate() {
        println!("  {}) {}", i + 1, step);
    }

    Ok(())
}
