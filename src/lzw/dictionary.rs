//! The adaptive LZW dictionary, in both directions.
//!
//! The encoder asks "what is the code for this string?" and the decoder asks
//! "what is the string for this code?", so each side gets the representation
//! that answers its question in O(1): a hash map keyed by string, and a plain
//! vec indexed by code. Codes are assigned in insertion order on both sides,
//! which keeps the two in lockstep without any shared state.

use rustc_hash::FxHashMap;

use crate::bitstream::pack12::MAX_CODES;

/// Number of single-byte entries both directions are seeded with.
pub const SEED_ENTRIES: usize = 256;

/// Byte-string to code mapping used while encoding.
pub struct Dictionary {
    entries: FxHashMap<Vec<u8>, u16>,
    limit: usize,
}

impl Dictionary {
    /// A dictionary holding the 256 single-byte strings, codes 0-255.
    pub fn seeded(limit: usize) -> Self {
        assert!(
            (SEED_ENTRIES..=MAX_CODES).contains(&limit),
            "dictionary limit must stay within the 12-bit code space"
        );
        let mut entries = FxHashMap::default();
        for byte in 0..=255_u8 {
            entries.insert(vec![byte], byte as u16);
        }
        Self { entries, limit }
    }

    /// Code for `string`, if it has been seen before.
    pub fn code(&self, string: &[u8]) -> Option<u16> {
        self.entries.get(string).copied()
    }

    /// Record a new string under the next free code. Once the dictionary is
    /// full this quietly does nothing; existing codes stay usable.
    pub fn insert(&mut self, string: Vec<u8>) {
        if self.entries.len() < self.limit {
            let code = self.entries.len() as u16;
            self.entries.insert(string, code);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Code to byte-string mapping used while decoding. Mirrors the encoder's
/// growth rule as the codes arrive.
pub struct CodeTable {
    entries: Vec<Vec<u8>>,
    limit: usize,
}

impl CodeTable {
    /// A table holding the 256 single-byte strings, codes 0-255.
    pub fn seeded(limit: usize) -> Self {
        assert!(
            (SEED_ENTRIES..=MAX_CODES).contains(&limit),
            "table limit must stay within the 12-bit code space"
        );
        let mut entries = Vec::with_capacity(limit);
        for byte in 0..=255_u8 {
            entries.push(vec![byte]);
        }
        Self { entries, limit }
    }

    /// The string a code resolves to, if the table has grown that far.
    pub fn entry(&self, code: u16) -> Option<&[u8]> {
        self.entries.get(code as usize).map(|entry| entry.as_slice())
    }

    /// Append the next entry. Saturates at the limit like the encode side.
    pub fn push(&mut self, string: Vec<u8>) {
        if self.entries.len() < self.limit {
            self.entries.push(string);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
