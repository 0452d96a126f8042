//! The compression module manages the file-to-file pipelines of the twinpack tool.
//!
//! Compression runs one of two pipelines over the input file:
//! - LZW: Adaptive dictionary coding - raw bytes straight to packed 12-bit codes.
//! - BWT: Burrows-Wheeler transform to cluster identical bytes, then run-length
//!   encoding to collapse the clusters.
//!
//! The compressed file sits next to the input with a method suffix attached, and
//! decompression recognizes the method from that suffix, so a compressed file
//! carries no header of its own.
//!
//! Decompression follows the inverse pipeline:
//! - LZW: Unpack codes, replay the dictionary growth.
//! - BWT: Expand the run-length records, invert the transform chunk by chunk.
//!

pub mod compress;
pub mod decompress;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::error;

/// Suffix given to files compressed with the LZW method.
pub const LZW_SUFFIX: &str = ".lzw";

/// Suffix given to files compressed with the BWT method.
pub const BWT_SUFFIX: &str = ".bwt";

/// Open `path` for writing, refusing to clobber an existing file unless forced.
pub(crate) fn create_output(path: &str, force: bool) -> io::Result<File> {
    if !force && Path::new(path).exists() {
        error!("{} already exists; use --force to overwrite it", path);
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "output file already exists",
        ));
    }
    File::create(path)
}

/// Pump every byte of a codec stage into the sink, counting what was written.
pub(crate) fn drain<I, W>(stage: I, sink: &mut W) -> io::Result<u64>
where
    I: Iterator<Item = io::Result<u8>>,
    W: Write,
{
    let mut written = 0_u64;
    for byte in stage {
        sink.write_all(&[byte?])?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod test {
    use super::drain;
    use crate::bwt::decoder::BwtDecoder;
    use crate::bwt::encoder::BwtEncoder;
    use crate::lzw::decoder::LzwDecoder;
    use crate::lzw::encoder::LzwEncoder;
    use crate::tools::rle::{RleDecoder, RleEncoder};

    fn lzw_round_trip(data: &[u8]) -> Vec<u8> {
        let mut wire = Vec::new();
        drain(LzwEncoder::new(data), &mut wire).unwrap();

        let mut out = Vec::new();
        drain(LzwDecoder::new(wire.as_slice()), &mut out).unwrap();
        out
    }

    fn bwt_round_trip(data: &[u8]) -> Vec<u8> {
        let mut wire = Vec::new();
        drain(RleEncoder::new(BwtEncoder::new(data)), &mut wire).unwrap();

        let mut out = Vec::new();
        drain(BwtDecoder::new(RleDecoder::new(wire.as_slice())), &mut out).unwrap();
        out
    }

    #[test]
    fn drain_counts_test() {
        let data = b"count me".as_slice();
        let mut sink = Vec::new();
        let written = drain(data.iter().map(|&byte| Ok(byte)), &mut sink).unwrap();
        assert_eq!(written, 8);
        assert_eq!(sink, data);
    }

    #[test]
    fn lzw_pipeline_test() {
        let data = b"banana bandana banana bandana ".as_slice();
        assert_eq!(lzw_round_trip(data), data);
        assert_eq!(lzw_round_trip(b""), b"");
    }

    #[test]
    fn bwt_pipeline_test() {
        assert_eq!(bwt_round_trip(b"abc"), b"abc");
        assert_eq!(bwt_round_trip(b""), b"");
        assert_eq!(bwt_round_trip(b"banana bandana"), b"banana bandana");
    }

    #[test]
    fn bwt_pipeline_spans_chunks_test() {
        // Repetitive text well past one chunk, so several wrapped chunks
        // travel through the run-length records
        let data = b"it was the best of times, it was the worst of times. ".repeat(400);
        assert!(data.len() > crate::bwt::CHUNK_SIZE);
        assert_eq!(bwt_round_trip(&data), data);
    }

    #[test]
    fn lzw_pipeline_long_input_test() {
        let data = b"it was the age of wisdom, it was the age of foolishness. ".repeat(400);
        assert_eq!(lzw_round_trip(&data), data);
    }
}
