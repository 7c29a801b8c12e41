// Copyright (C) myl7
// SPDX-License-Identifier: Apache-2.0

//! Length checks run before any XOR work

use tracing::debug;

use crate::error::{Result, XorError};
use crate::{MIN_SIZE, WORD_BYTES};

/// Which operation the lengths are checked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Whole words only, at least one. See [`crate::xor_strict`].
    Strict,
    /// Any equal lengths, including 0. See [`crate::xor_flexible`].
    Flexible,
}

/// Check the lengths of both inputs for `mode`.
/// The checks run in order: mismatch, too short, misaligned.
pub fn validate(len1: usize, len2: usize, mode: Mode) -> Result<()> {
    let err = if len1 != len2 {
        XorError::LengthMismatch {
            left: len1,
            right: len2,
        }
    } else {
        match mode {
            Mode::Flexible => return Ok(()),
            Mode::Strict if len1 < MIN_SIZE => XorError::TooShort { len: len1 },
            Mode::Strict if len1 % WORD_BYTES != 0 => XorError::Misaligned { len: len1 },
            Mode::Strict => return Ok(()),
        }
    };
    debug!(len1, len2, ?mode, error = %err, "rejected xor input");
    Err(err)
}
