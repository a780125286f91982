//! numerus CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run one
//! conversion, and exit with a failure status if the input is invalid.
//! For programmatic use, prefer the library API (`numerus::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(error) = cli::run(args) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
