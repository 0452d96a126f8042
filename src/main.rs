//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]
mod bitstream;
mod bwt;
mod compression;
mod lzw;
mod tools;

use compression::compress::compress;
use compression::decompress::decompress;

use log::LevelFilter;
use simplelog::{Config, TermLogger, TerminalMode};

use crate::tools::cli::pack_opts_init;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let options = pack_opts_init();

    //----- Figure out what we need to do and go do it
    match options.method {
        Some(method) => compress(&options, method),
        None => decompress(&options),
    }
}
