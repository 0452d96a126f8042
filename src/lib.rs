//! Lossless compression and decompression of byte streams with two classic methods.
//!
//! twinpack compresses files with either an adaptive-dictionary coder
//! (Lempel-Ziv-Welch with 12-bit codes) or a block-sorting pipeline
//! (Burrows-Wheeler transform followed by run-length encoding). Every codec
//! stage is a pull-based iterator over bytes, so the stages compose without
//! holding more than one chunk of data at a time.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> twinpack --lzw notes.txt`
//!
//! This will compress the file and create the file notes.txt.lzw.
//! The original file is left in place. Running
//!
//! `$> twinpack notes.txt.lzw`
//!
//! recognizes the suffix and restores notes.txt.
//!
pub mod bitstream;
pub mod bwt;
pub mod compression;
pub mod lzw;
pub mod tools;
