//! ByteReader: buffered input for the twinpack codec stages.
//!
//! Both compression methods consume their input a byte at a time (LZW) or a
//! chunk at a time (BWT). Reading a File that way is painfully slow, so this
//! wraps the source in a refillable buffer.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.
//!

use std::io;

const BUFFER_SIZE: usize = 64 * 1024;

/// Buffered reader giving byte-at-a-time and chunk-at-a-time access to a source.
#[derive(Debug)]
pub struct ByteReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    source: R,
}

impl<R: io::Read> ByteReader<R> {
    /// Creates a new ByteReader (with a 64k buffer).
    pub fn new(source: R) -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
            source,
        }
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more.
    fn have_data(&mut self) -> io::Result<bool> {
        // Only try to read more data when the cursor has caught up with the buffer
        if self.cursor == self.buffer.len() {
            self.buffer.resize(BUFFER_SIZE, 0);
            let size = self.source.read(&mut self.buffer)?;
            // Adjust the buffer if we read less than the buffer size
            self.buffer.truncate(size);
            self.cursor = 0;
            if size == 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Return the next byte, or None if there is no more data to read.
    pub fn byte(&mut self) -> io::Result<Option<u8>> {
        if !self.have_data()? {
            return Ok(None);
        }
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        Ok(Some(byte))
    }

    /// Return up to `want` bytes. Fewer than `want` means the source ran out;
    /// an empty vec means it was already exhausted.
    pub fn chunk(&mut self, want: usize) -> io::Result<Vec<u8>> {
        let mut chunk = Vec::with_capacity(want);
        while chunk.len() < want {
            if !self.have_data()? {
                break;
            }
            let available = (self.buffer.len() - self.cursor).min(want - chunk.len());
            chunk.extend_from_slice(&self.buffer[self.cursor..self.cursor + available]);
            self.cursor += available;
        }
        Ok(chunk)
    }
}
