// Copyright (C) myl7
// SPDX-License-Identifier: Apache-2.0

//! Static capabilities of the implementation

use std::fmt;

use crate::{WORD_BYTES, WORD_SIZE};

/// What [`get_info`] reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Info {
    /// Bits of the integer XORed at a time
    pub word_size: u32,
    /// Byte len that [`crate::xor_strict`] inputs must be a multiple of
    pub alignment: usize,
    pub version: &'static str,
    pub description: &'static str,
}

pub const INFO: Info = Info {
    word_size: WORD_SIZE,
    alignment: WORD_BYTES,
    version: env!("CARGO_PKG_VERSION"),
    description: "Fast 64-bit XOR operations",
};

pub fn get_info() -> Info {
    INFO
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fastxor {}: {} (word size: {} bits, alignment: {} bytes)",
            self.version, self.description, self.word_size, self.alignment
        )
    }
}
