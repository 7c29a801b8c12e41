// Copyright (C) myl7
// SPDX-License-Identifier: Apache-2.0

//! Errors of the XOR operations

use std::collections::TryReserveError;

use thiserror::Error;

/// Every way a XOR call can fail.
/// Validation errors are reported before any byte is computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XorError {
    #[error("byte buffers must have the same length (left: {left}, right: {right})")]
    LengthMismatch { left: usize, right: usize },

    /// Strict mode only
    #[error("input data must be at least 64 bits (8 bytes), got {len} bytes")]
    TooShort { len: usize },

    /// Strict mode only
    #[error("input data length must be a multiple of 8 bytes, got {len} bytes")]
    Misaligned { len: usize },

    #[error("failed to allocate {len} bytes for the result")]
    AllocationFailure {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type Result<T> = std::result::Result<T, XorError>;
