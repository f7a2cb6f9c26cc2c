/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

use crate::cut::DEFAULT_DELIMITER;

/// fcut — select and re-join delimited fields from each input line.
#[derive(Debug, Parser)]
#[command(
    name = "fcut",
    about = "Select and re-join delimited fields from lines of text",
    version
)]
pub struct Cli {
    /// Fields to extract: comma-separated numbers and inclusive ranges (e.g. 1,3-5).
    /// Output keeps the listed order; malformed entries are ignored.
    #[arg(
        short = 'f',
        long = "fields",
        value_name = "LIST",
        allow_hyphen_values = true
    )]
    pub fields: Option<String>,

    /// Field delimiter, used for splitting and joining [default: TAB].
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "DELIM",
        default_value = DEFAULT_DELIMITER,
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub delimiter: String,

    /// Only print lines that contain the delimiter.
    #[arg(short = 's', long = "only-delimited")]
    pub only_delimited: bool,

    /// Print phase timings to stderr for debugging.
    #[arg(long)]
    pub debug: bool,

    /// Input files, read in order. Reads stdin when none are given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
