// Copyright (C) myl7
// SPDX-License-Identifier: Apache-2.0

//! 64-bit word view of byte buffers and the XOR kernels on it

// XOR is bitwise, so any byte order gives the same output bytes as long as
// loading and storing use the same one.
// The public operations use little-endian.

use std::slice::ChunksExact;

use crate::WORD_BYTES;

/// Byte assembly order of a 64-bit word
pub trait WordOrder {
    fn load(bytes: [u8; WORD_BYTES]) -> u64;
    fn store(word: u64) -> [u8; WORD_BYTES];
}

pub struct LittleEndian;

impl WordOrder for LittleEndian {
    #[inline(always)]
    fn load(bytes: [u8; WORD_BYTES]) -> u64 {
        u64::from_le_bytes(bytes)
    }

    #[inline(always)]
    fn store(word: u64) -> [u8; WORD_BYTES] {
        word.to_le_bytes()
    }
}

pub struct BigEndian;

impl WordOrder for BigEndian {
    #[inline(always)]
    fn load(bytes: [u8; WORD_BYTES]) -> u64 {
        u64::from_be_bytes(bytes)
    }

    #[inline(always)]
    fn store(word: u64) -> [u8; WORD_BYTES] {
        word.to_be_bytes()
    }
}

pub struct NativeEndian;

impl WordOrder for NativeEndian {
    #[inline(always)]
    fn load(bytes: [u8; WORD_BYTES]) -> u64 {
        u64::from_ne_bytes(bytes)
    }

    #[inline(always)]
    fn store(word: u64) -> [u8; WORD_BYTES] {
        word.to_ne_bytes()
    }
}

/// Leading `floor(len / 8) * 8` bytes of a buffer read as `u64` words,
/// plus the remaining tail bytes
#[derive(Debug, Clone, Copy)]
pub struct WordView<'a> {
    bytes: &'a [u8],
}

impl<'a> WordView<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// `fullWords`, the number of whole words
    pub fn full_words(&self) -> usize {
        self.bytes.len() / WORD_BYTES
    }

    /// Offset where the tail starts
    pub fn tail_start(&self) -> usize {
        self.full_words() * WORD_BYTES
    }

    pub fn tail(&self) -> &'a [u8] {
        &self.bytes[self.tail_start()..]
    }

    /// Words assembled in order `O`
    pub fn words<O: WordOrder>(&self) -> Words<'a, O> {
        Words {
            chunks: self.bytes.chunks_exact(WORD_BYTES),
            order: std::marker::PhantomData,
        }
    }
}

/// Iterator returned by [`WordView::words`]
pub struct Words<'a, O> {
    chunks: ChunksExact<'a, u8>,
    order: std::marker::PhantomData<O>,
}

impl<'a, O: WordOrder> Iterator for Words<'a, O> {
    type Item = u64;

    #[inline(always)]
    fn next(&mut self) -> Option<u64> {
        self.chunks.next().map(|chunk| O::load(word_bytes(chunk)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a, O: WordOrder> ExactSizeIterator for Words<'a, O> {}

#[inline(always)]
fn word_bytes(chunk: &[u8]) -> [u8; WORD_BYTES] {
    let mut bytes = [0; WORD_BYTES];
    bytes.copy_from_slice(chunk);
    bytes
}

/// XOR the whole words of `a` and `b` into the whole words of `out`.
/// All 3 should have the same len. Tail bytes of `out` are not touched.
pub fn xor_words<O: WordOrder>(a: &[u8], b: &[u8], out: &mut [u8]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let words = WordView::new(a)
        .words::<O>()
        .zip(WordView::new(b).words::<O>());
    for (dst, (x, y)) in out.chunks_exact_mut(WORD_BYTES).zip(words) {
        dst.copy_from_slice(&O::store(x ^ y));
    }
}

/// XOR the tail bytes after the last whole word one by one
pub fn xor_tail(a: &[u8], b: &[u8], out: &mut [u8]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let start = WordView::new(a).tail_start();
    out[start..]
        .iter_mut()
        .zip(a[start..].iter().zip(&b[start..]))
        .for_each(|(o, (x, y))| *o = x ^ y);
}
