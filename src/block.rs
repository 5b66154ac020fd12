//! Byte <-> word packing for 64-bit cipher blocks.
//!
//! Big-endian within each word: byte 0 lands in bits 31..24 of the first
//! word, bytes 4..8 fill the second word the same way.

/// Cipher block size in bytes.
pub const BLOCK_LEN: usize = 8;

/// Packs up to eight bytes into a two-word block. Missing trailing bytes
/// contribute zero — that only happens for a truncated final ciphertext
/// chunk on decrypt, and the padding check downstream catches it.
pub fn pack(chunk: &[u8]) -> [u32; 2] {
    debug_assert!(chunk.len() <= BLOCK_LEN);
    let mut bytes = [0u8; BLOCK_LEN];
    bytes[..chunk.len()].copy_from_slice(chunk);
    [
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
    ]
}

/// Serializes a two-word block back to eight bytes.
pub fn unpack(block: &[u32; 2]) -> [u8; BLOCK_LEN] {
    let mut bytes = [0u8; BLOCK_LEN];
    bytes[..4].copy_from_slice(&block[0].to_be_bytes());
    bytes[4..].copy_from_slice(&block[1].to_be_bytes());
    bytes
}
