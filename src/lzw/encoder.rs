//! Streaming LZW compression.
//!
//! The encoder walks the input greedily: it extends the current match while
//! the dictionary knows the string, and on the first miss emits the match's
//! code, learns the missed extension, and starts over from the new byte.
//! Codes leave through the 12-bit packer in pairs.

use std::collections::VecDeque;
use std::io;

use crate::bitstream::bytereader::ByteReader;
use crate::bitstream::pack12::{pack_pair, pack_single, MAX_CODES};
use crate::lzw::dictionary::Dictionary;

/// Default dictionary limit, the largest the wire format permits.
pub const DEFAULT_DICT_SIZE: usize = MAX_CODES;

/// Iteratable struct that reads raw bytes from its source and returns the
/// packed 12-bit code stream one byte at a time.
pub struct LzwEncoder<R> {
    source: ByteReader<R>,
    dictionary: Dictionary,
    /// Longest match so far
    current: Vec<u8>,
    /// Its code - meaningless while `current` is empty
    current_code: u16,
    /// First code of an unfinished output pair
    held: Option<u16>,
    pending: VecDeque<u8>,
    done: bool,
}

impl<R: io::Read> LzwEncoder<R> {
    pub fn new(source: R) -> Self {
        Self::with_dict_size(source, DEFAULT_DICT_SIZE)
    }

    /// Encoder with a smaller dictionary limit. Decoding needs the same limit.
    pub fn with_dict_size(source: R, dict_size: usize) -> Self {
        LzwEncoder {
            source: ByteReader::new(source),
            dictionary: Dictionary::seeded(dict_size),
            current: Vec::new(),
            current_code: 0,
            held: None,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Entries in the dictionary so far.
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// Route one finished code toward the wire. Codes travel in pairs, so the
    /// first of each pair waits here for its partner.
    fn emit(&mut self, code: u16) {
        match self.held.take() {
            None => self.held = Some(code),
            Some(first) => self.pending.extend(pack_pair(first, code)),
        }
    }

    /// Flush at end of input: the final match, then any unpaired code.
    fn finish(&mut self) {
        if !self.current.is_empty() {
            let code = self.current_code;
            self.current.clear();
            self.emit(code);
        }
        if let Some(code) = self.held.take() {
            self.pending.extend(pack_single(code));
        }
        self.done = true;
    }

    /// Consume input until at least one wire byte is ready or the input ends.
    fn fill_pending(&mut self) -> io::Result<()> {
        while self.pending.is_empty() {
            let byte = match self.source.byte()? {
                Some(byte) => byte,
                None => {
                    self.finish();
                    return Ok(());
                }
            };

            self.current.push(byte);
            match self.dictionary.code(&self.current) {
                // Still a known string - keep extending the match
                Some(code) => self.current_code = code,
                None => {
                    // The match ended one byte ago. Emit its code, learn the
                    // extension, and restart the match from this byte. The
                    // seed entries guarantee a single byte is its own code.
                    let code = self.current_code;
                    self.dictionary.insert(std::mem::take(&mut self.current));
                    self.current.push(byte);
                    self.current_code = byte as u16;
                    self.emit(code);
                }
            }
        }
        Ok(())
    }
}

impl<R: io::Read> Iterator for LzwEncoder<R> {
    type Item = io::Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() && !self.done {
            if let Err(e) = self.fill_pending() {
                self.done = true;
                return Some(Err(e));
            }
        }
        self.pending.pop_front().map(Ok)
    }
}
