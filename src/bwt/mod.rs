//! The bwt module implements the Burrows-Wheeler block transform.
//!
//! The transform itself compresses nothing: it permutes each chunk of input so
//! identical bytes cluster, which is what makes the run-length stage behind it
//! effective. Input is processed in fixed-size chunks, each wrapped in STX/ETX
//! sentinel bytes before its rotations are sorted; the sentinels let the
//! inverse transform find where the cycle starts and ends without any
//! out-of-band index.
//!
//! Known limitation: input that itself contains the STX (0x02) or ETX (0x03)
//! byte confuses the sentinel scan, and such data will not survive a round
//! trip. Text does not contain these bytes; arbitrary binary data may.
//!
//! The pieces are:
//! - encoder: Chunk, wrap, sort rotations, keep the last column.
//! - decoder: Rebuild each chunk from its last column and strip the wrapping.
//!
pub mod decoder;
pub mod encoder;

/// Bytes of input transformed per chunk.
pub const CHUNK_SIZE: usize = 10_000;

/// Marks the start of a wrapped chunk (ASCII STX).
pub const STX: u8 = 0x02;

/// Marks the end of a wrapped chunk (ASCII ETX).
pub const ETX: u8 = 0x03;
