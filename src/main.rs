//! pwaicons CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, generate the
//! icon set and report the outcome. Generation failures are logged and the
//! process still exits normally. For programmatic use, prefer the library
//! API (`pwaicons::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
