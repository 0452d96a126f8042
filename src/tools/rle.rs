//! Run-Length-Encoding for the byte stream around the block-sorting transform.
//!
//! The transform groups identical bytes together, so its output compresses
//! well as (byte, count) records. Counts run 1-255; a longer run splits into
//! several records. The decoder expands each record back into its run.

use std::collections::VecDeque;
use std::io;

use log::error;

use crate::bitstream::bytereader::ByteReader;

/// Longest run a single record can describe.
pub const MAX_RUN: u8 = 255;

/// Iteratable struct that run-length encodes the bytes pulled from its source stage.
pub struct RleEncoder<I> {
    source: I,
    run_byte: Option<u8>,
    run_len: u8,
    pending: VecDeque<u8>,
    done: bool,
}

impl<I: Iterator<Item = io::Result<u8>>> RleEncoder<I> {
    pub fn new(source: I) -> Self {
        RleEncoder {
            source,
            run_byte: None,
            run_len: 0,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Pull source bytes until one record is ready or the input ends.
    fn fill_pending(&mut self) -> io::Result<()> {
        loop {
            match self.source.next() {
                None => {
                    // Flush the run in progress, if any
                    if let Some(byte) = self.run_byte.take() {
                        self.pending.push_back(byte);
                        self.pending.push_back(self.run_len);
                    }
                    self.done = true;
                    return Ok(());
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Err(e);
                }
                Some(Ok(byte)) => match self.run_byte {
                    Some(run) if run == byte && self.run_len < MAX_RUN => {
                        self.run_len += 1;
                    }
                    Some(run) => {
                        // Run broken (or capped at 255): emit the record and
                        // start counting the new byte
                        self.pending.push_back(run);
                        self.pending.push_back(self.run_len);
                        self.run_byte = Some(byte);
                        self.run_len = 1;
                        return Ok(());
                    }
                    None => {
                        self.run_byte = Some(byte);
                        self.run_len = 1;
                    }
                },
            }
        }
    }
}

impl<I: Iterator<Item = io::Result<u8>>> Iterator for RleEncoder<I> {
    type Item = io::Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() && !self.done {
            if let Err(e) = self.fill_pending() {
                return Some(Err(e));
            }
        }
        self.pending.pop_front().map(Ok)
    }
}

/// Iteratable struct that expands (byte, count) records read from its source.
pub struct RleDecoder<R> {
    source: ByteReader<R>,
    current: u8,
    remaining: u8,
    done: bool,
}

impl<R: io::Read> RleDecoder<R> {
    pub fn new(source: R) -> Self {
        RleDecoder {
            source: ByteReader::new(source),
            current: 0,
            remaining: 0,
            done: false,
        }
    }

    /// Read the next record, skipping any with a zero count.
    /// Returns false when the stream has ended cleanly.
    fn next_record(&mut self) -> io::Result<bool> {
        while self.remaining == 0 {
            let byte = match self.source.byte()? {
                Some(byte) => byte,
                None => return Ok(false),
            };
            match self.source.byte()? {
                Some(count) => {
                    self.current = byte;
                    self.remaining = count;
                }
                None => {
                    error!("Run-length record for byte {:#04x} is missing its count", byte);
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "run-length record missing its count byte",
                    ));
                }
            }
        }
        Ok(true)
    }
}

impl<R: io::Read> Iterator for RleDecoder<R> {
    type Item = io::Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.remaining == 0 {
            match self.next_record() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        self.remaining -= 1;
        Some(Ok(self.current))
    }
}
