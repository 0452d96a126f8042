//! File decompression, keyed off the compressed suffix.
//!
//! A compressed file carries no header; the .lzw or .bwt suffix names the
//! method, and the restored file is the input with that suffix stripped.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use log::{debug, error, info};

use crate::bwt::decoder::BwtDecoder;
use crate::compression::{create_output, drain, BWT_SUFFIX, LZW_SUFFIX};
use crate::lzw::decoder::LzwDecoder;
use crate::tools::cli::{Method, PackOpts};
use crate::tools::rle::RleDecoder;

/// Decompress the input file defined in opts (PackOpts), choosing the method
/// from its suffix.
pub fn decompress(opts: &PackOpts) -> io::Result<()> {
    let (target, method) = if let Some(stem) = opts.file.strip_suffix(LZW_SUFFIX) {
        (stem, Method::Lzw)
    } else if let Some(stem) = opts.file.strip_suffix(BWT_SUFFIX) {
        (stem, Method::Bwt)
    } else {
        error!(
            "{} ends in neither {} nor {}; pick --lzw or --bwt to compress it instead",
            opts.file, LZW_SUFFIX, BWT_SUFFIX
        );
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no compressed suffix to recognize and no method requested",
        ));
    };

    let source = File::open(&opts.file)?;
    let mut sink = BufWriter::new(create_output(target, opts.force_overwrite)?);

    info!("Restoring {} from {} with the {} method", target, opts.file, method);

    let restored_size = match method {
        Method::Lzw => {
            let mut decoder = LzwDecoder::new(source);
            let restored_size = drain(&mut decoder, &mut sink)?;
            debug!("Table ended at {} entries", decoder.table_size());
            restored_size
        }
        Method::Bwt => drain(BwtDecoder::new(RleDecoder::new(source)), &mut sink)?,
    };
    sink.flush()?;

    info!("Wrote {} ({} bytes)", target, restored_size);
    Ok(())
}
