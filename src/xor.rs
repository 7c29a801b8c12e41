// Copyright (C) myl7
// SPDX-License-Identifier: Apache-2.0

//! Strict and flexible XOR of 2 byte buffers

use tracing::trace;

use crate::error::{Result, XorError};
use crate::validate::{validate, Mode};
use crate::word::{xor_tail, xor_words, LittleEndian, WordView};

/// XOR 2 buffers made of whole 64-bit words.
///
/// Both inputs must have the same len, which must be a positive multiple of 8.
/// Non-conforming inputs are rejected instead of falling back to [`xor_flexible`],
/// so a successful call never takes the byte-wise tail path.
///
/// ```
/// let a = b"12345678".repeat(16);
/// let b = b"abcdefgh".repeat(16);
/// let out = fastxor::xor_strict(&a, &b).unwrap();
/// assert_eq!(out.len(), 128);
/// ```
pub fn xor_strict(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    validate(a.len(), b.len(), Mode::Strict)?;
    let mut out = alloc_output(a.len())?;
    xor_words::<LittleEndian>(a, b, &mut out);
    trace!(len = a.len(), words = a.len() / crate::WORD_BYTES, "xor_strict");
    Ok(out)
}

/// XOR 2 buffers of any same len.
///
/// Whole words are XORed 64 bits at a time and the last `len % 8` bytes one by one.
///
/// ```
/// let key = b"Secret Key123";
/// let masked = fastxor::xor_flexible(b"Hello, World!", key).unwrap();
/// assert_eq!(masked.len(), 13);
/// assert_eq!(fastxor::xor_flexible(&masked, key).unwrap(), b"Hello, World!");
/// ```
pub fn xor_flexible(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    validate(a.len(), b.len(), Mode::Flexible)?;
    if a.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = alloc_output(a.len())?;
    xor_words::<LittleEndian>(a, b, &mut out);
    xor_tail(a, b, &mut out);
    let view = WordView::new(a);
    trace!(
        len = a.len(),
        words = view.full_words(),
        tail = view.tail().len(),
        "xor_flexible"
    );
    Ok(out)
}

/// The only allocation of a call.
/// Nothing has been written when it fails.
fn alloc_output(len: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|source| XorError::AllocationFailure { len, source })?;
    out.resize(len, 0);
    Ok(out)
}
