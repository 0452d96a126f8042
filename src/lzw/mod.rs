//! The lzw module implements Lempel-Ziv-Welch coding with 12-bit codes.
//!
//! LZW learns its dictionary as it goes: both sides start from the 256
//! single-byte strings and grow identically, so no dictionary ever travels
//! with the data.
//!
//! The pieces are:
//! - dictionary: The adaptive dictionary, one representation per direction.
//! - encoder: Streaming compression of raw bytes into packed 12-bit codes.
//! - decoder: Streaming expansion of packed codes back into the raw bytes.
//!
pub mod decoder;
pub mod dictionary;
pub mod encoder;
