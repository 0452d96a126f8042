//! Command line interface for twinpack - uses the external CLAP crate.
//!
//! Everything the pipeline needs to know about an invocation ends up in a
//! PackOpts struct passed by reference; there is no global state beyond the
//! log level.

use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::LevelFilter;

/// The two supported compression methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Lzw,
    Bwt,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// User settable options that control program behavior
#[derive(Debug)]
pub struct PackOpts {
    /// Name of the file to read for input
    pub file: String,
    /// Method to compress with. None means decompress, with the method
    /// recognized from the input file suffix.
    pub method: Option<Method>,
    /// Silently overwrite an existing file with the same name
    pub force_overwrite: bool,
}

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Compress and uncompress files with the LZW or BWT technique.",
    long_about = None)]
struct Args {
    /// File to compress, or to uncompress when it ends in .lzw or .bwt
    #[clap()]
    filename: String,

    /// Compress with the Lempel-Ziv-Welch dictionary coder
    #[clap(long, conflicts_with = "bwt")]
    lzw: bool,

    /// Compress with the Burrows-Wheeler block-sorting pipeline
    #[clap(long)]
    bwt: bool,

    /// Force overwriting the output file
    #[clap(short, long)]
    force: bool,

    /// Be verbose (-v shows per-chunk progress, -vv is chattier still)
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Report errors only
    #[clap(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Put command line information from CLAP into our internal structure,
/// and set the log level.
pub fn pack_opts_init() -> PackOpts {
    let args = Args::parse();

    match (args.quiet, args.verbose) {
        (true, _) => log::set_max_level(LevelFilter::Error),
        (false, 0) => log::set_max_level(LevelFilter::Info),
        (false, 1) => log::set_max_level(LevelFilter::Debug),
        (false, _) => log::set_max_level(LevelFilter::Trace),
    };

    let method = if args.lzw {
        Some(Method::Lzw)
    } else if args.bwt {
        Some(Method::Bwt)
    } else {
        None
    };

    PackOpts {
        file: args.filename,
        method,
        force_overwrite: args.force,
    }
}
