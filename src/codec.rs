// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traits for composing primitive bit reads and writes into
//! whole values.
//!
//! A type can describe its own layout by implementing
//! [`BitWritable`] and [`BitReadable`], or a separate strategy
//! object can do it through [`BitEncoder`] and [`BitDecoder`].
//!
//! Strategies receive the stream as `&mut dyn BitWrite` or
//! `&mut dyn BitRead`.  Since `&mut W` is itself a writer (and
//! `&mut R` a reader), the generic object operations stay available
//! through a reborrow such as `(&mut writer).write_object(..)`.
//!
//! ## Example
//! ```
//! use bit_io::{BitEncoder, BitDecoder, BitRead, BitReader, BitWrite, BitWriter, Result};
//!
//! struct Rgb565;
//!
//! impl BitEncoder<(u8, u8, u8)> for Rgb565 {
//!     fn encode(&self, w: &mut dyn BitWrite, &(r, g, b): &(u8, u8, u8)) -> Result<()> {
//!         w.write_int(true, 5, i32::from(r >> 3))?;
//!         w.write_int(true, 6, i32::from(g >> 2))?;
//!         w.write_int(true, 5, i32::from(b >> 3))
//!     }
//! }
//!
//! impl BitDecoder<(u8, u8, u8)> for Rgb565 {
//!     fn decode(&self, r: &mut dyn BitRead) -> Result<(u8, u8, u8)> {
//!         Ok(((r.read_int(true, 5)? << 3) as u8,
//!             (r.read_int(true, 6)? << 2) as u8,
//!             (r.read_int(true, 5)? << 3) as u8))
//!     }
//! }
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_object_with(Some(&Rgb565), &(0xF8u8, 0xFCu8, 0xF8u8)).unwrap();
//! assert_eq!(writer.get_ref(), &[0xFF, 0xFF]);
//!
//! let data = writer.into_inner();
//! let mut reader = BitReader::new(data.as_slice());
//! let rgb: (u8, u8, u8) = reader.read_object_with(Some(&Rgb565)).unwrap();
//! assert_eq!(rgb, (0xF8, 0xFC, 0xF8));
//! ```

use super::{BitRead, BitWrite, Result};

/// A strategy for writing values of type `T` as bits.
pub trait BitEncoder<T: ?Sized> {
    /// Writes `value` to `writer` in whatever layout
    /// the encoder chooses.
    fn encode(&self, writer: &mut dyn BitWrite, value: &T) -> Result<()>;
}

/// A strategy for reading values of type `T` from bits.
pub trait BitDecoder<T> {
    /// Reads one value from `reader`.
    fn decode(&self, reader: &mut dyn BitRead) -> Result<T>;
}

impl<T, F> BitEncoder<T> for F
where
    T: ?Sized,
    F: Fn(&mut dyn BitWrite, &T) -> Result<()>,
{
    #[inline]
    fn encode(&self, writer: &mut dyn BitWrite, value: &T) -> Result<()> {
        self(writer, value)
    }
}

impl<T, F> BitDecoder<T> for F
where
    F: Fn(&mut dyn BitRead) -> Result<T>,
{
    #[inline]
    fn decode(&self, reader: &mut dyn BitRead) -> Result<T> {
        self(reader)
    }
}

/// Implemented by values which know how to write themselves.
pub trait BitWritable {
    /// Writes this value to the given writer.
    fn write_to<W: BitWrite + ?Sized>(&self, writer: &mut W) -> Result<()>;
}

/// Implemented by values which know how to read themselves.
pub trait BitReadable: Sized {
    /// Reads a new value from the given reader.
    fn read_from<R: BitRead + ?Sized>(reader: &mut R) -> Result<Self>;
}
