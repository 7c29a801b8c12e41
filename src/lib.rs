// Copyright (C) myl7
// SPDX-License-Identifier: Apache-2.0

//! Fast 64-bit XOR operations over equal-length byte buffers.
//!
//! - [`xor_strict`] takes buffers of whole 64-bit words only.
//! - [`xor_flexible`] takes buffers of any same len and XORs the trailing bytes one by one.
//! - [`get_info`] reports the static capabilities.
//!
//! Every call is a pure function of its inputs and allocates only the output,
//! so calls can run concurrently from any number of threads.

pub mod error;
pub mod info;
pub mod validate;
pub mod word;
pub mod xor;

pub use error::{Result, XorError};
pub use info::{get_info, Info, INFO};
pub use xor::{xor_flexible, xor_strict};

/// Bits of the native XOR word
pub const WORD_SIZE: u32 = u64::BITS;
/// Bytes of the native XOR word
pub const WORD_BYTES: usize = std::mem::size_of::<u64>();
/// Min input len in bytes accepted by [`xor_strict`]
pub const MIN_SIZE: usize = WORD_BYTES;
