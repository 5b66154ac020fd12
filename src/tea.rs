//! TEA block cipher core.
//!
//! Reference Feistel network: 64-bit blocks, 128-bit key, 32 rounds with
//! the golden-ratio constant `DELTA`. All arithmetic is wrapping u32 —
//! the cipher is defined over Z/2^32 and a checked overflow anywhere
//! would change the output.

/// Golden-ratio round constant, 2^32 / phi.
pub const DELTA: u32 = 0x9E37_79B9;

/// Number of Feistel rounds.
pub const ROUNDS: u32 = 32;

/// Encrypts one 64-bit block in place.
///
/// Within a round, `v0` mixes the previous round's `v1`, and `v1` mixes
/// the freshly updated `v0`. That ordering is what makes the network
/// invertible; do not reorder.
pub fn encrypt_block(v: &mut [u32; 2], k: &[u32; 4]) {
    let (mut v0, mut v1) = (v[0], v[1]);
    let mut sum = 0u32;
    for _ in 0..ROUNDS {
        sum = sum.wrapping_add(DELTA);
        v0 = v0.wrapping_add(
            (v1 << 4).wrapping_add(k[0]) ^ v1.wrapping_add(sum) ^ (v1 >> 5).wrapping_add(k[1]),
        );
        v1 = v1.wrapping_add(
            (v0 << 4).wrapping_add(k[2]) ^ v0.wrapping_add(sum) ^ (v0 >> 5).wrapping_add(k[3]),
        );
    }
    v[0] = v0;
    v[1] = v1;
}

/// Decrypts one 64-bit block in place. Exact inverse of [`encrypt_block`]:
/// rounds run backwards, `v1` is undone before `v0`, and `sum` starts at
/// `DELTA * ROUNDS` and counts down.
pub fn decrypt_block(v: &mut [u32; 2], k: &[u32; 4]) {
    let (mut v0, mut v1) = (v[0], v[1]);
    let mut sum = DELTA.wrapping_mul(ROUNDS);
    for _ in 0..ROUNDS {
        v1 = v1.wrapping_sub(
            (v0 << 4).wrapping_add(k[2]) ^ v0.wrapping_add(sum) ^ (v0 >> 5).wrapping_add(k[3]),
        );
        v0 = v0.wrapping_sub(
            (v1 << 4).wrapping_add(k[0]) ^ v1.wrapping_add(sum) ^ (v1 >> 5).wrapping_add(k[1]),
        );
        sum = sum.wrapping_sub(DELTA);
    }
    v[0] = v0;
    v[1] = v1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_key_zero_block_vector() {
        let mut block = [0u32; 2];
        encrypt_block(&mut block, &[0; 4]);
        assert_eq!(block, [0x41EA_3A0A, 0x94BA_A940]);
        decrypt_block(&mut block, &[0; 4]);
        assert_eq!(block, [0, 0]);
    }

    #[test]
    fn known_key_vector() {
        let key = [0x0123_4567, 0x89AB_CDEF, 0xFEDC_BA98, 0x7654_3210];
        let mut block = [0x0123_4567, 0x89AB_CDEF];
        encrypt_block(&mut block, &key);
        assert_eq!(block, [0x17B5_BA51, 0x9858_1091]);
        decrypt_block(&mut block, &key);
        assert_eq!(block, [0x0123_4567, 0x89AB_CDEF]);
    }

    #[test]
    fn roundtrip_assorted_blocks() {
        let key = [0xDEAD_BEEF, 0x0BAD_F00D, 0xCAFE_BABE, 0x8BAD_BEEF];
        for original in [
            [0u32, 0u32],
            [u32::MAX, u32::MAX],
            [1, 0],
            [0x8000_0000, 0x7FFF_FFFF],
            [12345, 67890],
        ] {
            let mut block = original;
            encrypt_block(&mut block, &key);
            assert_ne!(block, original, "encryption must change the block");
            decrypt_block(&mut block, &key);
            assert_eq!(block, original);
        }
    }

    #[test]
    fn wrong_key_does_not_invert() {
        let mut block = [0x1111_1111, 0x2222_2222];
        encrypt_block(&mut block, &[1, 2, 3, 4]);
        decrypt_block(&mut block, &[4, 3, 2, 1]);
        assert_ne!(block, [0x1111_1111, 0x2222_2222]);
    }
}
