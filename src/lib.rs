// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traits and helpers for packing values of arbitrary bit widths
//! into byte streams, and unpacking them again.
//!
//! Values are written most significant bit first and packed
//! contiguously, so a 3-bit flag followed by an 11-bit counter
//! occupies exactly 14 bits of output.
//! Widths are checked per value category:
//!
//! | category | unsigned | signed |
//! |----------|----------|--------|
//! | bool     | 1        | -      |
//! | byte     | 1..=8    | 1..=7  |
//! | short    | 1..=16   | 1..=15 |
//! | char     | 1..=16   | -      |
//! | int      | 1..=32   | 1..=31 |
//! | long     | 1..=64   | 1..=63 |
//!
//! Floats and doubles are always transcribed as their exact
//! 32 and 64 bit IEEE-754 patterns.
//!
//! ## Example
//! ```
//! use bit_io::{BitRead, BitReader, BitWrite, BitWriter};
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_int(true, 3, 0b101).unwrap();     // flags
//! writer.write_int(true, 11, 1500).unwrap();     // counter
//! writer.write_short(false, 9, -200).unwrap();   // offset
//! writer.write_float(3.14).unwrap();
//! assert_eq!(writer.bit_index(), 7);
//! assert_eq!(writer.align(8).unwrap(), 1 + 8);
//! assert_eq!(writer.byte_count(), 8);
//!
//! let data = writer.into_inner();
//! let mut reader = BitReader::new(data.as_slice());
//! assert_eq!(reader.read_int(true, 3).unwrap(), 0b101);
//! assert_eq!(reader.read_int(true, 11).unwrap(), 1500);
//! assert_eq!(reader.read_short(false, 9).unwrap(), -200);
//! assert_eq!(reader.read_float().unwrap().to_bits(), 3.14f32.to_bits());
//! assert_eq!(reader.align(8).unwrap(), 1 + 8);
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("either the \"std\" or \"alloc\" feature must be enabled");

#[cfg(not(feature = "std"))]
use core2::io;

#[cfg(feature = "std")]
use std::io;

pub mod byte_io;
pub mod codec;
mod error;
pub mod read;
pub mod width;
pub mod write;

pub use byte_io::{ByteSink, ByteSource, Detachable, FnSink, FnSource};
pub use codec::{BitDecoder, BitEncoder, BitReadable, BitWritable};
pub use error::{Error, Result};
pub use read::{BitRead, BitReader};
pub use write::{BitWrite, BitWriter};
