// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bit width validation.
//!
//! Every value category has a maximum width of `2^exponent` bits,
//! one less when the value is signed:
//!
//! | category | exponent | unsigned | signed |
//! |----------|----------|----------|--------|
//! | byte     | 3        | 8        | 7      |
//! | short    | 4        | 16       | 15     |
//! | char     | 4        | 16       | -      |
//! | int      | 5        | 32       | 31     |
//! | long     | 6        | 64       | 63     |
//!
//! These functions are pass-through validators: they hand back the
//! size unchanged so they can sit inline in an expression.

use super::{Error, Result};

/// Exponent of the byte category.
pub const BYTE_EXPONENT: u32 = 3;
/// Exponent of the short and char categories.
pub const SHORT_EXPONENT: u32 = 4;
/// Exponent of the int category.
pub const INT_EXPONENT: u32 = 5;
/// Exponent of the long category.
pub const LONG_EXPONENT: u32 = 6;

/// Returns the largest width allowed for a category of
/// the given exponent and signedness.
///
/// ## Example
/// ```
/// use bit_io::width::max_size;
/// assert_eq!(max_size(true, 5), 32);
/// assert_eq!(max_size(false, 5), 31);
/// ```
#[inline]
pub fn max_size(unsigned: bool, exponent: u32) -> u32 {
    let max = 1u32.checked_shl(exponent).unwrap_or(u32::MAX);
    if unsigned {
        max
    } else {
        max - 1
    }
}

/// Checks that `size` fits a category of the given exponent
/// and signedness, returning it unchanged.
///
/// # Errors
///
/// `InvalidArgument` if `exponent` is 0,
/// `InvalidWidth` if `size` is 0 or larger than [`max_size`].
pub fn require_valid_size(unsigned: bool, exponent: u32, size: u32) -> Result<u32> {
    if exponent == 0 {
        return Err(Error::InvalidArgument("exponent must be positive"));
    }
    let max = max_size(unsigned, exponent);
    if size < 1 || size > max {
        return Err(Error::InvalidWidth {
            size,
            max,
            unsigned,
        });
    }
    Ok(size)
}

/// Validates a byte-sized width.
#[inline]
pub fn require_valid_byte_size(unsigned: bool, size: u32) -> Result<u32> {
    require_valid_size(unsigned, BYTE_EXPONENT, size)
}

/// Validates a short-sized width.
#[inline]
pub fn require_valid_short_size(unsigned: bool, size: u32) -> Result<u32> {
    require_valid_size(unsigned, SHORT_EXPONENT, size)
}

/// Validates an int-sized width.
#[inline]
pub fn require_valid_int_size(unsigned: bool, size: u32) -> Result<u32> {
    require_valid_size(unsigned, INT_EXPONENT, size)
}

/// Validates a long-sized width.
#[inline]
pub fn require_valid_long_size(unsigned: bool, size: u32) -> Result<u32> {
    require_valid_size(unsigned, LONG_EXPONENT, size)
}

/// Validates a char-sized width.  Chars are always unsigned.
#[inline]
pub fn require_valid_char_size(size: u32) -> Result<u32> {
    require_valid_size(true, SHORT_EXPONENT, size)
}

/// Validates the width of a raw chunk of at most 8 bits.
#[inline]
pub fn require_valid_unsigned8(size: u32) -> Result<u32> {
    require_valid_size(true, BYTE_EXPONENT, size)
}

/// Validates the width of a raw chunk of at most 16 bits.
#[inline]
pub fn require_valid_unsigned16(size: u32) -> Result<u32> {
    require_valid_size(true, SHORT_EXPONENT, size)
}
