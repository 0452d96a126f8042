//! The forward Burrows-Wheeler transform.
//!
//! Sorting every rotation of a chunk puts similar contexts next to each other,
//! and the last byte of each sorted rotation (the byte "before" that context,
//! cyclically) is what gets emitted. Rotations are never materialized for the
//! sort; only their start offsets move.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::io;

use log::debug;

use crate::bitstream::bytereader::ByteReader;
use crate::bwt::{CHUNK_SIZE, ETX, STX};

/// Iteratable struct that reads raw bytes from its source chunk by chunk and
/// returns the transformed bytes.
pub struct BwtEncoder<R> {
    source: ByteReader<R>,
    chunk_size: usize,
    chunk_seq: usize,
    pending: VecDeque<u8>,
    done: bool,
}

impl<R: io::Read> BwtEncoder<R> {
    pub fn new(source: R) -> Self {
        Self::with_chunk_size(source, CHUNK_SIZE)
    }

    /// Encoder with a custom chunk size. Decoding needs the same size.
    pub fn with_chunk_size(source: R, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        BwtEncoder {
            source: ByteReader::new(source),
            chunk_size,
            chunk_seq: 0,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Read and transform the next chunk into `pending`.
    fn fill_pending(&mut self) -> io::Result<()> {
        let chunk = self.source.chunk(self.chunk_size)?;
        if chunk.is_empty() && self.chunk_seq > 0 {
            self.done = true;
            return Ok(());
        }
        // An empty first read still goes through the transform, so an empty
        // input comes out as the two-byte transform of the bare sentinels
        let mut wrapped = Vec::with_capacity(chunk.len() + 2);
        wrapped.push(STX);
        wrapped.extend_from_slice(&chunk);
        wrapped.push(ETX);

        self.chunk_seq += 1;
        debug!("Transforming chunk {} ({} bytes)", self.chunk_seq, wrapped.len());

        for offset in sorted_rotations(&wrapped) {
            // Cyclically, the last byte of the rotation starting at `offset`
            // is the byte just before the offset
            let offset = offset as usize;
            let last = if offset == 0 {
                wrapped[wrapped.len() - 1]
            } else {
                wrapped[offset - 1]
            };
            self.pending.push_back(last);
        }
        Ok(())
    }
}

impl<R: io::Read> Iterator for BwtEncoder<R> {
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

/// Start offsets of every cyclic rotation of `chunk`, ordered so the rotations
/// they name are in ascending byte order.
pub fn sorted_rotations(chunk: &[u8]) -> Vec<u32> {
    let mut table: Vec<u32> = (0..chunk.len() as u32).collect();
    table.sort_unstable_by(|a, b| rotation_compare(*a as usize, *b as usize, chunk));
    table
}

/// Compare the rotations starting at `a` and `b` without building them.
fn rotation_compare(a: usize, b: usize, chunk: &[u8]) -> Ordering {
    let min = (chunk.len() - a).min(chunk.len() - b);

    // Lexicographical comparison of the in-place parts
    let result = chunk[a..a + min].cmp(&chunk[b..b + min]);

    // Implement wraparound if needed
    if result == Ordering::Equal {
        return [&chunk[a + min..], &chunk[0..a]]
            .concat()
            .cmp(&[&chunk[b + min..], &chunk[0..b]].concat());
    }
    result
}

#[cfg(test)]
mod test {
    use super::{sorted_rotations, BwtEncoder};
    use crate::bwt::{ETX, STX};

    /// Build the rotation starting at `offset` the slow, obvious way.
    fn rotation(chunk: &[u8], offset: usize) -> Vec<u8> {
        [&chunk[offset..], &chunk[..offset]].concat()
    }

    fn encode(data: &[u8]) -> Vec<u8> {
        BwtEncoder::new(data).map(|byte| byte.unwrap()).collect()
    }

    #[test]
    fn sorted_rotations_test() {
        // "abcde" rotations sort in offset order already
        assert_eq!(sorted_rotations(b"abcde"), vec![0, 1, 2, 3, 4]);
        // "cab" rotations: "abc" (1), "bca" (2), "cab" (0)
        assert_eq!(sorted_rotations(b"cab"), vec![1, 2, 0]);
    }

    #[test]
    fn rotations_are_permutation_test() {
        let chunk = b"the quick brown fox jumps over the lazy dog";
        let table = sorted_rotations(chunk);

        let mut offsets = table.clone();
        offsets.sort_unstable();
        assert_eq!(offsets, (0..chunk.len() as u32).collect::<Vec<u32>>());

        // And the rotations the table names really are in ascending order
        for pair in table.windows(2) {
            let a = rotation(chunk, pair[0] as usize);
            let b = rotation(chunk, pair[1] as usize);
            assert!(a < b);
        }
    }

    #[test]
    fn known_transform_test() {
        // Wrapped "abc" is [STX a b c ETX]; its sorted rotations leave the
        // last column [ETX c STX a b]
        assert_eq!(encode(b"abc"), vec![ETX, b'c', STX, b'a', b'b']);
    }

    #[test]
    fn empty_input_test() {
        // The wrapped empty chunk still goes through the transform
        assert_eq!(encode(b""), vec![ETX, STX]);
    }

    #[test]
    fn chunking_test() {
        // Four bytes with a chunk size of two make two wrapped chunks
        let mut encoder = BwtEncoder::with_chunk_size(b"abcd".as_slice(), 2);
        let out: Vec<u8> = (&mut encoder).map(|byte| byte.unwrap()).collect();
        assert_eq!(out.len(), 8);
        assert_eq!(out[..4], encode(b"ab")[..4]);
    }
}
