//! 128-bit key derivation from a key string.

use zeroize::Zeroize;

/// Minimum accepted key string length in bytes. Enforced by the CLI
/// before derivation; bytes past this limit never influence the key.
pub const MIN_KEY_LEN: usize = 16;

/// Derived 128-bit TEA key. Key words are wiped on drop.
pub struct TeaKey {
    words: [u32; 4],
}

impl TeaKey {
    /// Derives the four key words from a key string in a single
    /// left-to-right pass: each word big-endian-accumulates up to four
    /// bytes (`w = (w << 8) | b`); once the input runs out the remaining
    /// accumulation steps are skipped, so a short key leaves trailing
    /// words (and low-order positions of the word it ran out in) zero.
    pub fn derive(key_str: &[u8]) -> Self {
        let mut words = [0u32; 4];
        let mut bytes = key_str.iter();
        for word in words.iter_mut() {
            for _ in 0..4 {
                if let Some(&b) = bytes.next() {
                    *word = (*word << 8) | u32::from(b);
                }
            }
        }
        TeaKey { words }
    }

    pub fn words(&self) -> &[u32; 4] {
        &self.words
    }
}

impl Drop for TeaKey {
    fn drop(&mut self) {
        self.words.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_big_endian_words() {
        let key = TeaKey::derive(b"0123456789ABCDEF");
        assert_eq!(
            key.words(),
            &[0x3031_3233, 0x3435_3637, 0x3839_4142, 0x4344_4546]
        );
    }

    #[test]
    fn ignores_bytes_past_sixteen() {
        let short = TeaKey::derive(b"0123456789ABCDEF");
        let long = TeaKey::derive(b"0123456789ABCDEFextra material here");
        assert_eq!(short.words(), long.words());
    }

    #[test]
    fn deterministic() {
        let a = TeaKey::derive(b"correct horse battery staple");
        let b = TeaKey::derive(b"correct horse battery staple");
        assert_eq!(a.words(), b.words());
    }

    #[test]
    fn short_key_zero_fills() {
        // Reachable only if the CLI length check is bypassed, but the
        // behavior must stay deterministic.
        let key = TeaKey::derive(b"abcde");
        assert_eq!(key.words(), &[0x6162_6364, 0x0000_0065, 0, 0]);
    }

    #[test]
    fn empty_key_is_all_zero() {
        assert_eq!(TeaKey::derive(b"").words(), &[0; 4]);
    }
}
