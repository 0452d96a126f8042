//! Streaming LZW expansion.
//!
//! The decoder rebuilds the encoder's dictionary from the code stream itself:
//! each decoded entry, extended by the first byte of the next one, is exactly
//! the string the encoder learned when it emitted that next code. One case is
//! special: a code equal to the table length references the entry the encoder
//! was in the middle of learning, which can only be the previous entry
//! extended by its own first byte.

use std::collections::VecDeque;
use std::io;

use log::error;

use crate::bitstream::bytereader::ByteReader;
use crate::bitstream::pack12::{unpack_pair, unpack_single};
use crate::lzw::dictionary::CodeTable;
use crate::lzw::encoder::DEFAULT_DICT_SIZE;

/// Iteratable struct that reads a packed 12-bit code stream from its source
/// and returns the original bytes.
pub struct LzwDecoder<R> {
    source: ByteReader<R>,
    table: CodeTable,
    /// Entry decoded from the previous code - empty until the first code lands
    previous: Vec<u8>,
    /// Second code of a three-byte group, waiting its turn
    queued_code: Option<u16>,
    pending: VecDeque<u8>,
    done: bool,
}

impl<R: io::Read> LzwDecoder<R> {
    pub fn new(source: R) -> Self {
        Self::with_dict_size(source, DEFAULT_DICT_SIZE)
    }

    /// Decoder with a smaller table limit, matching the encoder's.
    pub fn with_dict_size(source: R, dict_size: usize) -> Self {
        LzwDecoder {
            source: ByteReader::new(source),
            table: CodeTable::seeded(dict_size),
            previous: Vec::new(),
            queued_code: None,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Entries rebuilt in the table so far.
    pub fn table_size(&self) -> usize {
        self.table.len()
    }

    /// Next 12-bit code off the wire, or None when the stream ends. A lone
    /// trailing byte cannot hold a code and ends the stream too.
    fn next_code(&mut self) -> io::Result<Option<u16>> {
        if let Some(code) = self.queued_code.take() {
            return Ok(Some(code));
        }
        let byte_1 = match self.source.byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };
        let byte_2 = match self.source.byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };
        match self.source.byte()? {
            Some(byte_3) => {
                let (first, second) = unpack_pair([byte_1, byte_2, byte_3]);
                self.queued_code = Some(second);
                Ok(Some(first))
            }
            None => Ok(Some(unpack_single([byte_1, byte_2]))),
        }
    }

    fn bad_code(&self, code: u16) -> io::Error {
        error!(
            "Code {} is out of range for a table of {} entries; the stream is corrupt",
            code,
            self.table.len()
        );
        io::Error::new(
            io::ErrorKind::InvalidData,
            "compressed stream holds a code the dictionary never produced",
        )
    }

    /// Decode one code into `pending`.
    fn fill_pending(&mut self) -> io::Result<()> {
        let code = match self.next_code()? {
            Some(code) => code,
            None => {
                self.done = true;
                return Ok(());
            }
        };

        // The first code of a stream must come straight from the seed table
        if self.previous.is_empty() {
            let entry = match self.table.entry(code) {
                Some(entry) => entry.to_vec(),
                None => return Err(self.bad_code(code)),
            };
            self.pending.extend(entry.iter().copied());
            self.previous = entry;
            return Ok(());
        }

        let entry: Vec<u8> = if code as usize == self.table.len() {
            // The encoder used the entry it was still learning; only the
            // previous entry extended by its own first byte fits
            let mut entry = self.previous.clone();
            entry.push(self.previous[0]);
            entry
        } else {
            match self.table.entry(code) {
                Some(entry) => entry.to_vec(),
                None => return Err(self.bad_code(code)),
            }
        };

        // Mirror the growth the encoder performed when it emitted this code
        let mut grown = self.previous.clone();
        grown.push(entry[0]);
        self.table.push(grown);

        self.pending.extend(entry.iter().copied());
        self.previous = entry;
        Ok(())
    }
}

impl<R: io::Read> Iterator for LzwDecoder<R> {
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

#[cfg(test)]
mod test {
    use super::LzwDecoder;
    use crate::bitstream::pack12::{pack_pair, pack_single};
    use crate::lzw::encoder::LzwEncoder;

    fn round_trip(data: &[u8]) -> Vec<u8> {
        let wire: Vec<u8> = LzwEncoder::new(data).map(|byte| byte.unwrap()).collect();
        LzwDecoder::new(wire.as_slice())
            .map(|byte| byte.unwrap())
            .collect()
    }

    #[test]
    fn empty_stream_test() {
        assert_eq!(round_trip(b""), b"");
    }

    #[test]
    fn short_round_trips_test() {
        assert_eq!(round_trip(b"a"), b"a");
        assert_eq!(round_trip(b"abc"), b"abc");
        assert_eq!(round_trip(b"banana bandana"), b"banana bandana");
    }

    #[test]
    fn self_referential_code_test() {
        // "aaa" packs to ('a', 256): code 256 arrives before the decoder has
        // built entry 256
        let wire = pack_pair(b'a' as u16, 256);
        let out: Vec<u8> = LzwDecoder::new(wire.as_slice())
            .map(|byte| byte.unwrap())
            .collect();
        assert_eq!(out, b"aaa");
    }

    #[test]
    fn table_matches_dictionary_test() {
        let data = b"the theory of the thespian".as_slice();
        let mut encoder = LzwEncoder::new(data);
        let wire: Vec<u8> = (&mut encoder).map(|byte| byte.unwrap()).collect();

        let mut decoder = LzwDecoder::new(wire.as_slice());
        let out: Vec<u8> = (&mut decoder).map(|byte| byte.unwrap()).collect();

        assert_eq!(out, data);
        assert_eq!(decoder.table_size(), encoder.dictionary_size());
    }

    #[test]
    fn long_repetitive_round_trip_test() {
        let data = b"wabba dabba yabba dabba doo ".repeat(900);
        assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn small_dictionary_round_trip_test() {
        // Saturate a tiny dictionary and make sure both sides stay in step
        let data = b"how can a clam cram in a clean cream can ".repeat(20);
        let mut encoder = LzwEncoder::with_dict_size(data.as_slice(), 300);
        let wire: Vec<u8> = (&mut encoder).map(|byte| byte.unwrap()).collect();
        assert_eq!(encoder.dictionary_size(), 300);

        let mut decoder = LzwDecoder::with_dict_size(wire.as_slice(), 300);
        let out: Vec<u8> = (&mut decoder).map(|byte| byte.unwrap()).collect();
        assert_eq!(out, data);
        assert_eq!(decoder.table_size(), 300);
    }

    #[test]
    fn out_of_range_code_test() {
        // Code 300 with a fresh 256-entry table cannot be resolved
        let wire = pack_single(300);
        let mut decoder = LzwDecoder::new(wire.as_slice());
        let err = decoder.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(decoder.next().is_none());
    }

    #[test]
    fn stray_trailing_byte_test() {
        // A stream length of 1 mod 3 leaves one byte that cannot hold a
        // code; it is ignored rather than failed on
        let mut wire = pack_pair(b'h' as u16, b'i' as u16).to_vec();
        wire.push(0xff);
        let out: Vec<u8> = LzwDecoder::new(wire.as_slice())
            .map(|byte| byte.unwrap())
            .collect();
        assert_eq!(out, b"hi");
    }
}
