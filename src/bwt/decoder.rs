//! The inverse Burrows-Wheeler transform.
//!
//! The last column of the sorted rotation table is all the decoder receives,
//! but counting-sorting it rebuilds the first column, and the two columns
//! together link every byte to its predecessor in the original chunk. Walking
//! those links once, starting from the rotation that ends in ETX, restores the
//! wrapped chunk in O(n) without ever rebuilding the rotation table.

use std::collections::VecDeque;
use std::io;

use log::{debug, error};

use crate::bwt::{CHUNK_SIZE, ETX};
use crate::tools::counting_sort::counting_sort;

/// Iteratable struct that pulls transformed bytes from its source stage in
/// chunk-sized groups and returns the original bytes.
pub struct BwtDecoder<I> {
    source: I,
    chunk_size: usize,
    chunk_seq: usize,
    pending: VecDeque<u8>,
    done: bool,
}

impl<I: Iterator<Item = io::Result<u8>>> BwtDecoder<I> {
    pub fn new(source: I) -> Self {
        Self::with_chunk_size(source, CHUNK_SIZE)
    }

    /// Decoder for a stream produced with a custom chunk size.
    pub fn with_chunk_size(source: I, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        BwtDecoder {
            source,
            chunk_size,
            chunk_seq: 0,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Pull the next transformed chunk. Every chunk but the last carries
    /// exactly chunk size + 2 bytes because of the sentinel wrapping.
    fn read_chunk(&mut self) -> io::Result<Vec<u8>> {
        let mut chunk = Vec::with_capacity(self.chunk_size + 2);
        while chunk.len() < self.chunk_size + 2 {
            match self.source.next() {
                Some(Ok(byte)) => chunk.push(byte),
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }
        Ok(chunk)
    }

    fn fill_pending(&mut self) -> io::Result<()> {
        let chunk = self.read_chunk()?;
        if chunk.is_empty() {
            self.done = true;
            return Ok(());
        }
        self.chunk_seq += 1;
        debug!("Restoring chunk {} ({} bytes)", self.chunk_seq, chunk.len());

        self.pending.extend(restore_chunk(&chunk)?);
        Ok(())
    }
}

impl<I: Iterator<Item = io::Result<u8>>> Iterator for BwtDecoder<I> {
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

/// Undo the transform for one sentinel-wrapped chunk.
fn restore_chunk(chunk: &[u8]) -> io::Result<Vec<u8>> {
    if chunk.len() < 2 {
        error!("Transform chunk of {} byte cannot carry its sentinels", chunk.len());
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "transform chunk shorter than its sentinel wrapping",
        ));
    }

    // The wrapped chunk ends in ETX, so the restoring walk starts from the
    // rotation whose last byte is ETX
    let mut position = match chunk.iter().position(|&byte| byte == ETX) {
        Some(position) => position,
        None => {
            error!("Transform chunk holds no ETX sentinel; the stream is corrupt");
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "transform chunk holds no end sentinel",
            ));
        }
    };

    let length = chunk.len();
    let (byte_start, rank) = column_indices(chunk);

    // Walk the predecessor links, filling the wrapped chunk back to front
    let mut wrapped = vec![0_u8; length];
    for slot in (0..length).rev() {
        let byte = chunk[position];
        wrapped[slot] = byte;
        position = byte_start[byte as usize] + rank[position];
    }

    // Strip the sentinel wrapping
    Ok(wrapped[1..length - 1].to_vec())
}

/// Index the two columns for the restoring walk: byte_start[b] is where byte
/// b first appears in the sorted first column, and rank[i] counts earlier
/// occurrences of last-column byte i's value.
fn column_indices(chunk: &[u8]) -> ([usize; 256], Vec<usize>) {
    let first_column = counting_sort(chunk, 256);

    let mut byte_start = [0_usize; 256];
    let mut seen = [false; 256];
    let mut counts = [0_usize; 256];
    let mut rank = vec![0_usize; chunk.len()];

    for index in 0..chunk.len() {
        let last = chunk[index] as usize;
        rank[index] = counts[last];
        counts[last] += 1;

        let first = first_column[index] as usize;
        if !seen[first] {
            seen[first] = true;
            byte_start[first] = index;
        }
    }
    (byte_start, rank)
}

#[cfg(test)]
mod test {
    use super::BwtDecoder;
    use crate::bwt::encoder::BwtEncoder;
    use crate::bwt::{ETX, STX};

    fn ok_stream(data: &[u8]) -> impl Iterator<Item = std::io::Result<u8>> + '_ {
        data.iter().map(|&byte| Ok(byte))
    }

    fn decode(data: &[u8]) -> Vec<u8> {
        BwtDecoder::new(ok_stream(data))
            .map(|byte| byte.unwrap())
            .collect()
    }

    fn round_trip(data: &[u8], chunk_size: usize) -> Vec<u8> {
        let transformed: Vec<u8> = BwtEncoder::with_chunk_size(data, chunk_size)
            .map(|byte| byte.unwrap())
            .collect();
        BwtDecoder::with_chunk_size(ok_stream(&transformed), chunk_size)
            .map(|byte| byte.unwrap())
            .collect()
    }

    #[test]
    fn known_chunk_test() {
        // The transform of "abc", worked by hand
        assert_eq!(decode(&[ETX, b'c', STX, b'a', b'b']), b"abc");
    }

    #[test]
    fn empty_encoding_test() {
        // An empty input transforms to the bare sentinel pair
        assert_eq!(decode(&[ETX, STX]), b"");
        assert_eq!(decode(&[]), b"");
    }

    #[test]
    fn round_trip_test() {
        assert_eq!(round_trip(b"", 10), b"");
        assert_eq!(round_trip(b"a", 10), b"a");
        assert_eq!(round_trip(b"banana bandana", 10), b"banana bandana");
    }

    #[test]
    fn multi_chunk_round_trip_test() {
        let data = b"she sells sea shells by the sea shore ".repeat(12);
        // A chunk size that does not divide the input length, so the final
        // chunk comes up short
        assert_eq!(round_trip(&data, 100), data);
        assert_eq!(round_trip(&data, data.len()), data);
    }

    #[test]
    fn missing_sentinel_test() {
        let mut decoder = BwtDecoder::new(ok_stream(b"no sentinel here"));
        let err = decoder.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(decoder.next().is_none());
    }

    #[test]
    fn short_chunk_test() {
        let wire = [ETX];
        let mut decoder = BwtDecoder::new(ok_stream(&wire));
        let err = decoder.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
