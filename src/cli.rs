//! Command-line interface

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of rows in the box
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Number of columns in the box
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Seed for a reproducible shuffle (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the shuffled box and the number of toggles
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}
