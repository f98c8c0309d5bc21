//! Binary entry point for the `binsearch` command-line tool.
//!
//! Parses arguments with `clap`, dispatches to the `info` / `lookup` /
//! `bench` subcommand implementations in `cli::dispatch`, and prints
//! top-level errors through the crate's own `displaylevel!` convention
//! before exiting non-zero.

use clap::Parser;

use binsearch::cli::args::{Cli, Command};
use binsearch::cli::constants::set_display_level;
use binsearch::displaylevel;

fn main() {
    let cli = Cli::parse();
    set_display_level(cli.verbose);

    let result = match cli.command {
        Command::Info { file } => binsearch::cli::dispatch::run_info(&file),
        Command::Lookup(args) => binsearch::cli::dispatch::run_lookup(args),
        Command::Bench(args) => binsearch::cli::dispatch::run_bench(args),
    };

    if let Err(e) = result {
        displaylevel!(1, "binsearch: {e}\n");
        std::process::exit(1);
    }
}
