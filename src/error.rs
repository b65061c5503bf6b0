// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised while reading or writing bits.

use thiserror::Error;

use super::io;

/// Result type returned by every bit-level operation.
pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can go wrong while pumping bits.
///
/// None of these are recoverable for the stream that raised them;
/// once one is returned the stream should be abandoned.
#[derive(Error, Debug)]
pub enum Error {
    /// A bit width outside the legal range for its value category.
    /// Raised before any bits are written or consumed.
    #[error("invalid width: {size} bits (max {max}, unsigned={unsigned})")]
    InvalidWidth {
        /// The width that was requested.
        size: u32,
        /// The largest width the category allows.
        max: u32,
        /// Whether the category was unsigned.
        unsigned: bool,
    },

    /// An argument other than a width was out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A required value was absent.
    #[error("null value")]
    NullValue,

    /// A required encoder was absent.
    #[error("null encoder")]
    NullEncoder,

    /// A required decoder was absent.
    #[error("null decoder")]
    NullDecoder,

    /// The byte source ran dry before a value was complete.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// Failure reported by the underlying byte sink or source.
    #[error("I/O failure: {0}")]
    Io(#[cfg_attr(feature = "std", source)] io::Error),
}

impl From<io::Error> for Error {
    #[inline]
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
