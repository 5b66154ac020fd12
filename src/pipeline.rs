//! Whole-file transform: read, pad/chunk/cipher, write.
//!
//! Each 8-byte block is enciphered independently with the one derived
//! key (plain ECB), so the ciphertext carries no header, no IV and no
//! MAC. Everything is buffered in memory; file size is the bound.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use zeroize::Zeroize;

use crate::block::{self, BLOCK_LEN};
use crate::key::TeaKey;
use crate::padding::{self, PaddingError};
use crate::tea;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// Result of a completed transform. A padding mismatch on decrypt is not
/// an error: the (unstripped) decrypted bytes are still on disk and the
/// caller decides how loudly to complain.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    PaddingMismatch(PaddingError),
}

/// Transforms `input` into `output` under `key`.
///
/// Encrypt: pad non-empty input to a block multiple, encipher each block.
/// Decrypt: decipher each block, then validate and strip the trailing
/// padding in memory before the single write. An empty input produces an
/// empty output in both modes. A ciphertext that is not a block multiple
/// is processed anyway with the gap zero-filled; the padding check flags
/// it afterwards.
pub fn process_file(input: &Path, output: &Path, key: &TeaKey, mode: Mode) -> Result<Outcome> {
    let mut data =
        fs::read(input).with_context(|| format!("opening input '{}'", input.display()))?;

    if mode == Mode::Encrypt && !data.is_empty() {
        padding::add(&mut data);
    }

    let mut out = Vec::with_capacity(data.len());
    for chunk in data.chunks(BLOCK_LEN) {
        let mut b = block::pack(chunk);
        match mode {
            Mode::Encrypt => tea::encrypt_block(&mut b, key.words()),
            Mode::Decrypt => tea::decrypt_block(&mut b, key.words()),
        }
        out.extend_from_slice(&block::unpack(&b));
    }
    data.zeroize();

    let outcome = if mode == Mode::Decrypt && !out.is_empty() {
        match padding::strip(&mut out) {
            Ok(()) => Outcome::Clean,
            Err(e) => Outcome::PaddingMismatch(e),
        }
    } else {
        Outcome::Clean
    };

    fs::write(output, &out).with_context(|| format!("writing output '{}'", output.display()))?;
    Ok(outcome)
}
