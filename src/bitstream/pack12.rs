//! Packs 12-bit dictionary codes into bytes and unpacks them again.
//!
//! Two codes fit exactly into three bytes, so codes travel in pairs. A lone
//! code left at the end of a stream takes the two-byte form, with the low
//! four bits of its second byte zero. The unpacker tells the forms apart by
//! how many bytes remain on the stream.

/// One past the largest code the wire format can carry.
pub const MAX_CODES: usize = 4096;

/// Pack two codes into three bytes.
pub fn pack_pair(first: u16, second: u16) -> [u8; 3] {
    assert!(
        (first as usize) < MAX_CODES && (second as usize) < MAX_CODES,
        "codes must fit in 12 bits"
    );
    [
        (first >> 4) as u8,
        ((first << 4) & 0xff) as u8 | (second >> 8) as u8,
        (second & 0xff) as u8,
    ]
}

/// Pack a final unpaired code into two bytes.
pub fn pack_single(code: u16) -> [u8; 2] {
    assert!((code as usize) < MAX_CODES, "codes must fit in 12 bits");
    [(code >> 4) as u8, ((code << 4) & 0xff) as u8]
}

/// Recover two codes from a three-byte group.
pub fn unpack_pair(group: [u8; 3]) -> (u16, u16) {
    let first = (group[0] as u16) << 4 | (group[1] >> 4) as u16;
    let second = ((group[1] & 0x0f) as u16) << 8 | group[2] as u16;
    (first, second)
}

/// Recover the final unpaired code from a two-byte group.
pub fn unpack_single(group: [u8; 2]) -> u16 {
    (group[0] as u16) << 4 | (group[1] >> 4) as u16
}
