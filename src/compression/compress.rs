//! File compression for both methods.
//!
//! Opens the input, runs the method's codec stages, and writes the packed
//! bytes to a sibling file named with the method suffix.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

use log::{debug, info};

use crate::bwt::encoder::BwtEncoder;
use crate::compression::{create_output, drain, BWT_SUFFIX, LZW_SUFFIX};
use crate::lzw::encoder::LzwEncoder;
use crate::tools::cli::{Method, PackOpts};
use crate::tools::rle::RleEncoder;

/// Compress the input file defined in opts (PackOpts) with the given method.
pub fn compress(opts: &PackOpts, method: Method) -> io::Result<()> {
    // Prepare to read the data
    let source = File::open(&opts.file)?;
    let original_size = fs::metadata(&opts.file)?.len();

    // The output sits next to the input, suffixed by method
    let mut target = opts.file.clone();
    target.push_str(match method {
        Method::Lzw => LZW_SUFFIX,
        Method::Bwt => BWT_SUFFIX,
    });
    let mut sink = BufWriter::new(create_output(&target, opts.force_overwrite)?);

    info!(
        "Compressing {} ({} bytes) with the {} method",
        opts.file, original_size, method
    );

    let packed_size = match method {
        Method::Lzw => {
            let mut encoder = LzwEncoder::new(source);
            let packed_size = drain(&mut encoder, &mut sink)?;
            debug!("Dictionary ended at {} entries", encoder.dictionary_size());
            packed_size
        }
        Method::Bwt => drain(RleEncoder::new(BwtEncoder::new(source)), &mut sink)?,
    };
    sink.flush()?;

    if original_size > 0 {
        info!(
            "Wrote {} ({} bytes, {:.1}% of the original)",
            target,
            packed_size,
            packed_size as f64 * 100.0 / original_size as f64
        );
    } else {
        info!("Wrote {} ({} bytes)", target, packed_size);
    }
    Ok(())
}
