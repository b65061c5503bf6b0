// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traits and implementations for writing bits to a byte sink.
//!
//! ## Example
//! ```
//! use bit_io::{BitWrite, BitWriter};
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bool(true).unwrap();        // 1 bit
//! writer.write_int(true, 3, 5).unwrap();   // 3 bits
//! writer.write_int(false, 12, -2).unwrap(); // 12 bits
//! assert_eq!(writer.bit_index(), 0);
//! assert_eq!(writer.byte_count(), 2);
//!
//! writer.write_int(true, 5, 0b10101).unwrap();
//! assert_eq!(writer.align(4).unwrap(), 3 + 8);
//! assert_eq!(writer.into_inner(), vec![0xDF, 0xFE, 0xA8, 0x00]);
//! ```

use super::width;
use super::{BitEncoder, BitWritable, ByteSink, Detachable, Error, Result};

/// For writing values of arbitrary bit width to a stream,
/// most significant bit first.
///
/// Only [`write_unsigned8`](BitWrite::write_unsigned8) and the two
/// position accessors need implementing; every typed write is built
/// from 8-bit chunks handed to it.
pub trait BitWrite {
    /// Writes the low `size` bits of `value`, where `size` is
    /// between 1 and 8 inclusive.
    fn write_unsigned8(&mut self, size: u32, value: u8) -> Result<()>;

    /// Returns the number of whole bytes written so far.
    fn byte_count(&self) -> u64;

    /// Returns the number of bits already written
    /// into the current partial byte, in `0..8`.
    fn bit_index(&self) -> u32;

    /// Returns true if the stream is aligned at a whole byte.
    #[inline]
    fn is_byte_aligned(&self) -> bool {
        self.bit_index() == 0
    }

    /// Writes the low `size` bits of `value`, where `size` is
    /// between 1 and 16 inclusive.
    ///
    /// Any leftover high-order bits are written first,
    /// followed by whole 8-bit chunks.
    fn write_unsigned16(&mut self, size: u32, value: u16) -> Result<()> {
        width::require_valid_unsigned16(size)?;
        let quotient = size / 8;
        let remainder = size % 8;
        if remainder > 0 {
            self.write_unsigned8(remainder, (value >> (quotient * 8)) as u8)?;
        }
        for i in (0..quotient).rev() {
            self.write_unsigned8(8, (value >> (i * 8)) as u8)?;
        }
        Ok(())
    }

    /// Writes `value` using `size` bits.
    ///
    /// Unsigned values may use up to 32 bits, in which case
    /// the low `size` bits of `value` are written as-is.
    /// Signed values may use up to 31 bits and are written
    /// as a sign bit followed by the remaining low-order bits
    /// of their two's-complement form.
    ///
    /// # Errors
    ///
    /// `InvalidWidth` if `size` is out of range, in which case
    /// nothing is written.
    fn write_int(&mut self, unsigned: bool, size: u32, value: i32) -> Result<()> {
        width::require_valid_int_size(unsigned, size)?;
        if !unsigned {
            let magnitude = size - 1;
            self.write_int(true, 1, value >> magnitude)?;
            if magnitude > 0 {
                self.write_int(true, magnitude, value)?;
            }
            return Ok(());
        }
        let value = value as u32;
        let quotient = size / 16;
        let remainder = size % 16;
        if remainder > 0 {
            self.write_unsigned16(remainder, (value >> (quotient * 16)) as u16)?;
        }
        for i in (0..quotient).rev() {
            self.write_unsigned16(16, (value >> (i * 16)) as u16)?;
        }
        Ok(())
    }

    /// Writes `value` using `size` bits.
    ///
    /// Unsigned values may use up to 64 bits, signed values up to 63.
    /// Unsigned values are split into 31-bit chunks,
    /// most significant chunk first.
    fn write_long(&mut self, unsigned: bool, size: u32, value: i64) -> Result<()> {
        width::require_valid_long_size(unsigned, size)?;
        if !unsigned {
            let magnitude = size - 1;
            self.write_long(true, 1, value >> magnitude)?;
            if magnitude > 0 {
                self.write_long(true, magnitude, value)?;
            }
            return Ok(());
        }
        let value = value as u64;
        let quotient = size / 31;
        let remainder = size % 31;
        if remainder > 0 {
            self.write_int(true, remainder, (value >> (quotient * 31)) as i32)?;
        }
        for i in (0..quotient).rev() {
            self.write_int(true, 31, (value >> (i * 31)) as i32)?;
        }
        Ok(())
    }

    /// Writes a single bit.
    #[inline]
    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_int(true, 1, i32::from(value))
    }

    /// Writes a byte value using `size` bits
    /// (up to 8 unsigned, 7 signed).
    fn write_byte(&mut self, unsigned: bool, size: u32, value: i8) -> Result<()> {
        width::require_valid_byte_size(unsigned, size)?;
        self.write_int(unsigned, size, i32::from(value))
    }

    /// Writes a short value using `size` bits
    /// (up to 16 unsigned, 15 signed).
    fn write_short(&mut self, unsigned: bool, size: u32, value: i16) -> Result<()> {
        width::require_valid_short_size(unsigned, size)?;
        self.write_int(unsigned, size, i32::from(value))
    }

    /// Writes a UTF-16 code unit using up to 16 bits.
    fn write_char(&mut self, size: u32, value: u16) -> Result<()> {
        width::require_valid_char_size(size)?;
        self.write_int(true, size, i32::from(value))
    }

    /// Writes the raw IEEE-754 bit pattern of `value` as 32 bits.
    #[inline]
    fn write_float(&mut self, value: f32) -> Result<()> {
        self.write_int(true, 32, value.to_bits() as i32)
    }

    /// Writes the raw IEEE-754 bit pattern of `value` as 64 bits.
    #[inline]
    fn write_double(&mut self, value: f64) -> Result<()> {
        self.write_long(true, 64, value.to_bits() as i64)
    }

    /// Writes the entirety of a byte buffer to the stream,
    /// 8 bits per byte.
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        for b in buf {
            self.write_unsigned8(8, *b)?;
        }
        Ok(())
    }

    /// Writes a value which knows its own layout.
    ///
    /// # Errors
    ///
    /// `NullValue` if `value` is `None`.
    fn write_object<T>(&mut self, value: Option<&T>) -> Result<()>
    where
        Self: Sized,
        T: BitWritable + ?Sized,
    {
        value.ok_or(Error::NullValue)?.write_to(self)
    }

    /// Writes a presence bit, followed by the value itself if present.
    fn write_nullable_object<T>(&mut self, value: Option<&T>) -> Result<()>
    where
        Self: Sized,
        T: BitWritable + ?Sized,
    {
        self.write_bool(value.is_some())?;
        match value {
            Some(value) => value.write_to(self),
            None => Ok(()),
        }
    }

    /// Hands `value` to `encoder` along with this writer.
    ///
    /// # Errors
    ///
    /// `NullEncoder` if `encoder` is `None`.
    fn write_object_with<T, E>(&mut self, encoder: Option<&E>, value: &T) -> Result<()>
    where
        Self: Sized,
        T: ?Sized,
        E: BitEncoder<T> + ?Sized,
    {
        encoder.ok_or(Error::NullEncoder)?.encode(self, value)
    }

    /// Pads the stream with 0 bits until the number of bytes
    /// written since the stream began is a multiple of `bytes`,
    /// returning the number of bits padded.
    ///
    /// Any partial byte is completed first, so the stream
    /// is always byte-aligned afterward.
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
            self.write_unsigned8(8 - index, 0)?;
            bits += u64::from(8 - index);
        }
        let remainder = self.byte_count() % bytes;
        let octets = if remainder > 0 { bytes - remainder } else { 0 };
        for _ in 0..octets {
            self.write_unsigned8(8, 0)?;
            bits += 8;
        }
        log::trace!("aligned to {} byte(s) with {} padding bits", bytes, bits);
        Ok(bits)
    }
}

impl<W: BitWrite + ?Sized> BitWrite for &mut W {
    #[inline]
    fn write_unsigned8(&mut self, size: u32, value: u8) -> Result<()> {
        (**self).write_unsigned8(size, value)
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

/// For writing bit values to an underlying byte sink,
/// most significant bit first.
pub struct BitWriter<S: ByteSink> {
    sink: S,
    pending: [bool; 8],
    index: u32,
    count: u64,
}

impl<S: ByteSink> BitWriter<S> {
    /// Wraps a bit writer around a byte sink.
    pub fn new(sink: S) -> BitWriter<S> {
        BitWriter {
            sink,
            pending: [false; 8],
            index: 0,
            count: 0,
        }
    }

    /// Returns a reference to the underlying sink.
    #[inline]
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the underlying sink.
    #[inline]
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Unwraps the underlying sink.
    ///
    /// Any bits in a partially written byte are lost,
    /// so call [`BitWrite::align`] first if they matter.
    #[inline]
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Swaps in a new sink and returns the old one.
    ///
    /// The partial byte and byte count carry over unchanged.
    pub fn rebind(&mut self, sink: S) -> S {
        log::trace!(
            "rebinding writer at byte {} bit {}",
            self.count,
            self.index
        );
        core::mem::replace(&mut self.sink, sink)
    }

    /// Flushes the underlying sink.
    /// Partial bytes are not padded.
    #[inline]
    pub fn flush(&mut self) -> Result<()> {
        Ok(self.sink.flush()?)
    }

    fn octet(&mut self, value: u8) -> Result<()> {
        self.sink.write_byte(value)?;
        self.count += 1;
        Ok(())
    }
}

impl<S: ByteSink> BitWriter<Detachable<S>> {
    /// Creates a writer with no sink bound yet.
    ///
    /// Bits may be written until the first whole byte is ready,
    /// after which writes fail with a `NotConnected` I/O error
    /// until [`bind`](BitWriter::bind) is called.
    ///
    /// ## Example
    /// ```
    /// use bit_io::{BitWrite, BitWriter, Detachable};
    ///
    /// let mut writer: BitWriter<Detachable<Vec<u8>>> = BitWriter::detached();
    /// writer.write_int(true, 4, 0xA).unwrap();
    /// assert!(writer.bind(Vec::new()).is_none());
    /// writer.write_int(true, 4, 0xB).unwrap();
    /// assert_eq!(writer.into_inner().into_inner(), Some(vec![0xAB]));
    /// ```
    pub fn detached() -> Self {
        BitWriter::new(Detachable::unbound())
    }

    /// Binds `sink`, returning whichever sink was bound before.
    pub fn bind(&mut self, sink: S) -> Option<S> {
        log::trace!("binding writer at byte {} bit {}", self.count, self.index);
        self.sink.bind(sink)
    }
}

impl<S: ByteSink> BitWrite for BitWriter<S> {
    fn write_unsigned8(&mut self, size: u32, value: u8) -> Result<()> {
        width::require_valid_unsigned8(size)?;

        if size == 8 && self.index == 0 {
            return self.octet(value);
        }

        let available = 8 - self.index;
        if size > available {
            let required = size - available;
            self.write_unsigned8(available, value >> required)?;
            return self.write_unsigned8(required, value);
        }

        let start = self.index as usize;
        let end = start + size as usize;
        let mut value = value;
        for flag in self.pending[start..end].iter_mut().rev() {
            *flag = value & 1 == 1;
            value >>= 1;
        }
        self.index += size;

        if self.index == 8 {
            let octet = self
                .pending
                .iter()
                .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
            self.octet(octet)?;
            self.index = 0;
        }
        Ok(())
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
