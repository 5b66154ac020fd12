//! PKCS#5-style padding for 8-byte cipher blocks.
//!
//! The padding check is the only integrity signal this format has: a
//! wrong key scrambles the final block, and the 255/256-per-byte chance
//! of an invalid pad run is what surfaces it.

use thiserror::Error;

use crate::block::BLOCK_LEN;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaddingError {
    #[error("buffer is empty")]
    Empty,
    #[error("invalid padding value {0}")]
    BadValue(u8),
    #[error("padding bytes are inconsistent")]
    Mismatch,
}

/// Appends `8 - (len % 8)` bytes, each equal to the count appended.
/// Always adds between 1 and 8 bytes: an already-aligned buffer gets a
/// full dummy block, never zero padding.
pub fn add(data: &mut Vec<u8>) {
    let pad = (BLOCK_LEN - data.len() % BLOCK_LEN) as u8;
    data.extend(std::iter::repeat(pad).take(pad as usize));
}

/// Validates and removes trailing padding. On any failure the buffer is
/// left untouched: empty buffer, pad value of 0 or above 8, a buffer
/// shorter than the claimed pad run, or any trailing byte that differs
/// from the pad value.
pub fn strip(data: &mut Vec<u8>) -> Result<(), PaddingError> {
    let pad = *data.last().ok_or(PaddingError::Empty)?;
    if pad == 0 || pad as usize > BLOCK_LEN {
        return Err(PaddingError::BadValue(pad));
    }
    if data.len() < pad as usize {
        return Err(PaddingError::Mismatch);
    }
    if data[data.len() - pad as usize..].iter().any(|&b| b != pad) {
        return Err(PaddingError::Mismatch);
    }
    data.truncate(data.len() - pad as usize);
    Ok(())
}
