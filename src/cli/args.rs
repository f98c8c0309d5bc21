//! Command-line argument parsing for the `binsearch` binary, via `clap`'s
//! derive API.
//!
//! The CLI surface is small and uniform enough (three subcommands, each a
//! flat set of typed flags) that deriving `Parser`/`Subcommand` is a good
//! fit over hand-rolled argument scanning.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "binsearch", author, version, about = "Binary search over memory-mapped sorted integer arrays")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity: 0 = silent, 1 = errors, 2 = normal, 3 = detailed, 4 = verbose.
    #[arg(short, long, global = true, default_value_t = 2)]
    pub verbose: u32,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the footer-derived size, doffset, dlength, and nrows of a file.
    Info { file: PathBuf },

    /// Run a single find-first / find-last query, optionally walking the
    /// matched run of equal keys.
    Lookup(LookupArgs),

    /// Repeat a lookup `--iters` times and report elapsed time.
    Bench(BenchArgs),
}

#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    pub file: PathBuf,

    /// Key width in bits.
    #[arg(long, value_enum)]
    pub width: Width,

    /// Byte order of the stored keys.
    #[arg(long, value_enum)]
    pub endian: Endian,

    /// Column index to search (column-oriented layout). Requires `--col-bytes`.
    #[arg(long, conflicts_with_all = ["blklen", "blkpos"])]
    pub column: Option<usize>,

    /// Comma-separated per-column byte widths, in non-increasing order.
    #[arg(long, value_delimiter = ',', requires = "column")]
    pub col_bytes: Vec<u8>,

    /// Record stride in bytes (block-oriented layout). Requires `--blkpos`.
    #[arg(long, requires = "blkpos", conflicts_with = "column")]
    pub blklen: Option<u64>,

    /// Byte offset of the key within each record (block-oriented layout).
    #[arg(long, requires = "blklen", conflicts_with = "column")]
    pub blkpos: Option<u64>,

    /// Which end of a run of equal keys to report.
    #[arg(long, value_enum)]
    pub family: Family,

    /// Value to search for.
    pub value: u128,

    /// First index of the search range (default 0).
    #[arg(long)]
    pub first: Option<u64>,

    /// Last index of the search range (default nrows - 1).
    #[arg(long)]
    pub last: Option<u64>,

    /// Inclusive start (MSB-indexed) of a bit sub-range to compare instead of
    /// the full key.
    #[arg(long, requires = "bit_end")]
    pub bit_start: Option<u32>,

    /// Inclusive end (MSB-indexed) of a bit sub-range to compare instead of
    /// the full key.
    #[arg(long, requires = "bit_start")]
    pub bit_end: Option<u32>,

    /// After the initial match, walk the full run of equal keys and print
    /// every matching index.
    #[arg(long)]
    pub walk: bool,
}

#[derive(clap::Args, Debug)]
pub struct BenchArgs {
    pub file: PathBuf,

    #[arg(long, value_enum)]
    pub width: Width,

    #[arg(long, value_enum)]
    pub endian: Endian,

    #[arg(long, conflicts_with_all = ["blklen", "blkpos"])]
    pub column: Option<usize>,

    #[arg(long, value_delimiter = ',', requires = "column")]
    pub col_bytes: Vec<u8>,

    #[arg(long, requires = "blkpos", conflicts_with = "column")]
    pub blklen: Option<u64>,

    #[arg(long, requires = "blklen", conflicts_with = "column")]
    pub blkpos: Option<u64>,

    #[arg(long, value_enum)]
    pub family: Family,

    pub value: u128,

    /// Number of repeated lookups to time.
    #[arg(long, default_value_t = 1000)]
    pub iters: u32,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Width {
    #[value(name = "8")]
    W8,
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Endian {
    Be,
    Le,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Family {
    First,
    Last,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_info_subcommand() {
        let cli = Cli::try_parse_from(["binsearch", "info", "data.bin"]).unwrap();
        assert!(matches!(cli.command, Command::Info { .. }));
    }

    #[test]
    fn parses_lookup_with_column_layout() {
        let cli = Cli::try_parse_from([
            "binsearch", "lookup", "data.bin",
            "--width", "32", "--endian", "be",
            "--column", "0", "--col-bytes", "4,8",
            "--family", "first", "42",
        ])
        .unwrap();
        match cli.command {
            Command::Lookup(args) => {
                assert_eq!(args.column, Some(0));
                assert_eq!(args.col_bytes, vec![4, 8]);
                assert_eq!(args.value, 42);
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn column_and_blklen_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "binsearch", "lookup", "data.bin",
            "--width", "32", "--endian", "be",
            "--column", "0", "--col-bytes", "4",
            "--blklen", "20", "--blkpos", "4",
            "--family", "first", "42",
        ]);
        assert!(result.is_err());
    }
}
