#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_states, print_output};

    let args = Args::parse();
    let states = parse_states(&args)?;
    print_output(&states, &args)
}
