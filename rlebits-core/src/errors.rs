// rlebits
// Copyright (c) 2024 The rlebits Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type returned by the query engine.

use std::error::Error as StdError;
use std::fmt;
use std::result;

/// `RleBitsError` enumerates all possible errors reported by the query engine.
#[derive(Debug)]
pub enum RleBitsError {
    /// `mode` was not one of LIST, COUNT, or EXIST.
    ModeInvalid,
    /// A multi-stream query was given fewer than two streams.
    TooFewStreams,
    /// A query was given more streams than `MAX_STREAMS`.
    TooManyStreams(usize),
    /// A caller-supplied buffer view could not be borrowed.
    BufferInaccessible,
    /// LIST mode emitted more indices than the declared capacity.
    CapacityExceeded(usize),
    /// Allocation of the LIST result buffer failed.
    AllocationFailed,
}

impl fmt::Display for RleBitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RleBitsError::ModeInvalid => {
                write!(f, "mode must be one of LIST, COUNT, or EXIST")
            }
            RleBitsError::TooFewStreams => {
                write!(f, "at least two streams are required for an AND query")
            }
            RleBitsError::TooManyStreams(n) => {
                write!(f, "{} streams exceeds the maximum of {}", n, crate::query::MAX_STREAMS)
            }
            RleBitsError::BufferInaccessible => {
                write!(f, "a supplied buffer could not be borrowed")
            }
            RleBitsError::CapacityExceeded(cap) => {
                write!(f, "result count exceeded the declared capacity of {}", cap)
            }
            RleBitsError::AllocationFailed => {
                write!(f, "failed to allocate the result buffer")
            }
        }
    }
}

impl StdError for RleBitsError {}

pub type Result<T> = result::Result<T, RleBitsError>;

/// Convenience function to create a mode-invalid error.
pub fn mode_invalid_error<T>() -> Result<T> {
    Err(RleBitsError::ModeInvalid)
}

/// Convenience function to create a too-few-streams error.
pub fn too_few_streams_error<T>() -> Result<T> {
    Err(RleBitsError::TooFewStreams)
}

/// Convenience function to create a too-many-streams error.
pub fn too_many_streams_error<T>(got: usize) -> Result<T> {
    Err(RleBitsError::TooManyStreams(got))
}

/// Convenience function to create a capacity-exceeded error.
pub fn capacity_exceeded_error<T>(capacity: usize) -> Result<T> {
    Err(RleBitsError::CapacityExceeded(capacity))
}

/// Convenience function to create a buffer-inaccessible error.
///
/// No code path in this crate raises this today: every entry point takes an already-borrowed
/// `&[u8]`, so there is nothing left to fail to borrow. It exists so that a binding layer sitting
/// in front of this engine (not part of this crate) has somewhere to report a borrow failure
/// without inventing its own error type.
pub fn buffer_inaccessible_error<T>() -> Result<T> {
    Err(RleBitsError::BufferInaccessible)
}

/// Convenience function to create an allocation-failed error.
pub fn allocation_failed_error<T>() -> Result<T> {
    Err(RleBitsError::AllocationFailed)
}
