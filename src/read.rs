// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traits and implementations for reading bits from a byte source.
//!
//! ## Example
//! ```
//! use std::io::Cursor;
//! use std::io::Read;
//! use bit_io::{BitRead, BitReader};
//!
//! let data: [u8; 6] = [0xB1, 0xED, 0x3B, 0xC1, 0xFE, 0xED];
//! let mut cursor = Cursor::new(&data);
//! {
//!     let mut reader = BitReader::new(&mut cursor);
//!     assert_eq!(reader.read_int(true, 2).unwrap(), 2);
//!     assert_eq!(reader.read_int(false, 3).unwrap(), -2);
//!     assert_eq!(reader.read_byte(true, 5).unwrap(), 7);
//!     assert_eq!(reader.read_int(true, 3).unwrap(), 5);
//!     assert_eq!(reader.read_long(true, 19).unwrap(), 0x53BC1);
//!     assert!(reader.is_byte_aligned());
//!     assert_eq!(reader.byte_count(), 4);
//! }
//!
//! // the wrapped source can be used once bit reading is finished
//! // at exactly the position one would expect
//! let mut rest = [0; 2];
//! cursor.read_exact(&mut rest).unwrap();
//! assert_eq!(rest, [0xFE, 0xED]);
//! ```

use super::width;
use super::{BitDecoder, BitReadable, ByteSource, Detachable, Error, Result};

/// For reading values of arbitrary bit width from a stream,
/// most significant bit first.
///
/// Only [`read_unsigned8`](BitRead::read_unsigned8) and the two
/// position accessors need implementing; every typed read is
/// assembled from 8-bit chunks taken from it.
pub trait BitRead {
    /// Reads an unsigned value of `size` bits, where `size` is
    /// between 1 and 8 inclusive.
    fn read_unsigned8(&mut self, size: u32) -> Result<u8>;

    /// Returns the number of whole bytes taken from the source so far.
    fn byte_count(&self) -> u64;

    /// Returns the number of bits already consumed
    /// from the current byte, in `0..8`.
    fn bit_index(&self) -> u32;

    /// Returns true if the stream is aligned at a whole byte.
    #[inline]
    fn is_byte_aligned(&self) -> bool {
        self.bit_index() == 0
    }

    /// Reads an unsigned value of `size` bits, where `size` is
    /// between 1 and 16 inclusive.
    fn read_unsigned16(&mut self, size: u32) -> Result<u16> {
        width::require_valid_unsigned16(size)?;
        let quotient = size / 8;
        let remainder = size % 8;
        let mut value = 0u16;
        if remainder > 0 {
            value = u16::from(self.read_unsigned8(remainder)?);
        }
        for _ in 0..quotient {
            value = (value << 8) | u16::from(self.read_unsigned8(8)?);
        }
        Ok(value)
    }

    /// Reads a value of `size` bits.
    ///
    /// Unsigned values may use up to 32 bits; a full 32-bit
    /// read returns the raw bit pattern.
    /// Signed values may use up to 31 bits and are sign-extended.
    ///
    /// # Errors
    ///
    /// `InvalidWidth` if `size` is out of range, in which case
    /// nothing is consumed.
    fn read_int(&mut self, unsigned: bool, size: u32) -> Result<i32> {
        width::require_valid_int_size(unsigned, size)?;
        if !unsigned {
            let magnitude = size - 1;
            let sign = self.read_int(true, 1)?;
            let value = if magnitude > 0 {
                self.read_int(true, magnitude)?
            } else {
                0
            };
            return Ok(if sign == 0 {
                value
            } else {
                value + (-1 << magnitude)
            });
        }
        let quotient = size / 16;
        let remainder = size % 16;
        let mut value = 0u32;
        if remainder > 0 {
            value = u32::from(self.read_unsigned16(remainder)?);
        }
        for _ in 0..quotient {
            value = (value << 16) | u32::from(self.read_unsigned16(16)?);
        }
        Ok(value as i32)
    }

    /// Reads a value of `size` bits.
    ///
    /// Unsigned values may use up to 64 bits; a full 64-bit
    /// read returns the raw bit pattern.
    /// Signed values may use up to 63 bits and are sign-extended.
    fn read_long(&mut self, unsigned: bool, size: u32) -> Result<i64> {
        width::require_valid_long_size(unsigned, size)?;
        if !unsigned {
            let magnitude = size - 1;
            let sign = self.read_long(true, 1)?;
            let value = if magnitude > 0 {
                self.read_long(true, magnitude)?
            } else {
                0
            };
            return Ok(if sign == 0 {
                value
            } else {
                value + (-1 << magnitude)
            });
        }
        let quotient = size / 31;
        let remainder = size % 31;
        let mut value = 0u64;
        if remainder > 0 {
            value = u64::from(self.read_int(true, remainder)? as u32);
        }
        for _ in 0..quotient {
            value = (value << 31) | u64::from(self.read_int(true, 31)? as u32);
        }
        Ok(value as i64)
    }

    /// Reads a single bit.
    #[inline]
    fn read_bool(&mut self) -> Result<bool> {
        self.read_int(true, 1).map(|bit| bit == 1)
    }

    /// Reads a byte value of `size` bits
    /// (up to 8 unsigned, 7 signed).
    fn read_byte(&mut self, unsigned: bool, size: u32) -> Result<i8> {
        width::require_valid_byte_size(unsigned, size)?;
        self.read_int(unsigned, size).map(|value| value as i8)
    }

    /// Reads a short value of `size` bits
    /// (up to 16 unsigned, 15 signed).
    fn read_short(&mut self, unsigned: bool, size: u32) -> Result<i16> {
        width::require_valid_short_size(unsigned, size)?;
        self.read_int(unsigned, size).map(|value| value as i16)
    }

    /// Reads a UTF-16 code unit of up to 16 bits.
    fn read_char(&mut self, size: u32) -> Result<u16> {
        width::require_valid_char_size(size)?;
        self.read_int(true, size).map(|value| value as u16)
    }

    /// Reads 32 bits as a raw IEEE-754 bit pattern.
    #[inline]
    fn read_float(&mut self) -> Result<f32> {
        self.read_int(true, 32)
            .map(|bits| f32::from_bits(bits as u32))
    }

    /// Reads 64 bits as a raw IEEE-754 bit pattern.
    #[inline]
    fn read_double(&mut self) -> Result<f64> {
        self.read_long(true, 64)
            .map(|bits| f64::from_bits(bits as u64))
    }

    /// Completely fills the given buffer with whole bytes,
    /// 8 bits per byte.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        for b in buf.iter_mut() {
            *b = self.read_unsigned8(8)?;
        }
        Ok(())
    }

    /// Reads a value which knows its own layout.
    #[inline]
    fn read_object<T>(&mut self) -> Result<T>
    where
        Self: Sized,
        T: BitReadable,
    {
        T::read_from(self)
    }

    /// Reads a presence bit, followed by the value itself if present.
    fn read_nullable_object<T>(&mut self) -> Result<Option<T>>
    where
        Self: Sized,
        T: BitReadable,
    {
        if self.read_bool()? {
            T::read_from(self).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Asks `decoder` to read a value from this reader.
    ///
    /// # Errors
    ///
    /// `NullDecoder` if `decoder` is `None`.
    fn read_object_with<T, D>(&mut self, decoder: Option<&D>) -> Result<T>
    where
        Self: Sized,
        D: BitDecoder<T> + ?Sized,
    {
        decoder.ok_or(Error::NullDecoder)?.decode(self)
    }

    /// Discards bits until the number of bytes taken from the
    /// source since the stream began is a multiple of `bytes`,
    /// returning the number of bits discarded.
    ///
    /// This mirrors [`BitWrite::align`](crate::BitWrite::align)
    /// and consumes exactly the padding it produces.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `bytes` is 0.
    fn align(&mut self, bytes: u64) -> Result<u64> {
        if bytes == 0 {
            return Err(Error::InvalidArgument("alignment must be positive"));
        }
        let mut bits = 0;
        let index = self.bit_index();
        if index > 0 {
            self.read_unsigned8(8 - index)?;
            bits += u64::from(8 - index);
        }
        let remainder = self.byte_count() % bytes;
        let octets = if remainder > 0 { bytes - remainder } else { 0 };
        for _ in 0..octets {
            self.read_unsigned8(8)?;
            bits += 8;
        }
        log::trace!("aligned to {} byte(s) skipping {} padding bits", bytes, bits);
        Ok(bits)
    }
}

impl<R: BitRead + ?Sized> BitRead for &mut R {
    #[inline]
    fn read_unsigned8(&mut self, size: u32) -> Result<u8> {
        (**self).read_unsigned8(size)
    }

    #[inline]
    fn byte_count(&self) -> u64 {
        (**self).byte_count()
    }

    #[inline]
    fn bit_index(&self) -> u32 {
        (**self).bit_index()
    }
}

/// For reading bit values from an underlying byte source,
/// most significant bit first.
pub struct BitReader<S: ByteSource> {
    source: S,
    pending: [bool; 8],
    index: u32,
    count: u64,
}

impl<S: ByteSource> BitReader<S> {
    /// Wraps a bit reader around a byte source.
    pub fn new(source: S) -> BitReader<S> {
        BitReader {
            source,
            pending: [false; 8],
            index: 0,
            count: 0,
        }
    }

    /// Returns a reference to the underlying source.
    #[inline]
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the underlying source.
    #[inline]
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwraps the underlying source.
    /// Unread bits in the current byte are lost.
    #[inline]
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Swaps in a new source and returns the old one.
    ///
    /// The partially consumed byte and byte count carry over unchanged.
    pub fn rebind(&mut self, source: S) -> S {
        log::trace!(
            "rebinding reader at byte {} bit {}",
            self.count,
            self.index
        );
        core::mem::replace(&mut self.source, source)
    }

    fn octet(&mut self) -> Result<u8> {
        match self.source.read_byte()? {
            Some(byte) => {
                self.count += 1;
                Ok(byte)
            }
            None => {
                log::debug!("byte source exhausted after {} bytes", self.count);
                Err(Error::UnexpectedEndOfInput)
            }
        }
    }
}

impl<S: ByteSource> BitReader<Detachable<S>> {
    /// Creates a reader with no source bound yet.
    /// Reads fail with a `NotConnected` I/O error
    /// until [`bind`](BitReader::bind) is called.
    pub fn detached() -> Self {
        BitReader::new(Detachable::unbound())
    }

    /// Binds `source`, returning whichever source was bound before.
    pub fn bind(&mut self, source: S) -> Option<S> {
        log::trace!("binding reader at byte {} bit {}", self.count, self.index);
        self.source.bind(source)
    }
}

impl<S: ByteSource> BitRead for BitReader<S> {
    fn read_unsigned8(&mut self, size: u32) -> Result<u8> {
        width::require_valid_unsigned8(size)?;

        if size == 8 && self.index == 0 {
            return self.octet();
        }

        let available = 8 - self.index;
        if size > available {
            let required = size - available;
            let high = self.read_unsigned8(available)?;
            let low = self.read_unsigned8(required)?;
            return Ok((high << required) | low);
        }

        if self.index == 0 {
            let octet = self.octet()?;
            for (i, flag) in self.pending.iter_mut().enumerate() {
                *flag = (octet >> (7 - i)) & 1 == 1;
            }
        }

        let start = self.index as usize;
        let end = start + size as usize;
        let value = self.pending[start..end]
            .iter()
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
        self.index += size;
        if self.index == 8 {
            self.index = 0;
        }
        Ok(value)
    }

    #[inline]
    fn byte_count(&self) -> u64 {
        self.count
    }

    #[inline]
    fn bit_index(&self) -> u32 {
        self.index
    }
}
