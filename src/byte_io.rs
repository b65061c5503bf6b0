// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Byte-level capabilities which bit writers and readers are built on.
//!
//! Any `io::Write` is already a [`ByteSink`] and any `io::Read` is
//! already a [`ByteSource`], so `Vec<u8>`, `&[u8]`, `Cursor`s and files
//! all work directly.  [`FnSink`] and [`FnSource`] adapt callbacks,
//! and [`Detachable`] holds a sink or source which is bound later.

use super::io;

/// Accepts whole bytes, one at a time.
pub trait ByteSink {
    /// Accepts a single byte.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    /// Flushes anything the sink may be holding on to.
    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Produces whole bytes, one at a time.
pub trait ByteSource {
    /// Produces the next byte, or `None` once no data remains.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<W: io::Write> ByteSink for W {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_all(core::slice::from_ref(&byte))
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(self)
    }
}

impl<R: io::Read> ByteSource for R {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = 0;
        loop {
            match self.read(core::slice::from_mut(&mut byte)) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte)),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

/// A sink which hands every byte to a callback.
#[derive(Debug, Clone)]
pub struct FnSink<F> {
    f: F,
}

impl<F: FnMut(u8)> FnSink<F> {
    /// Wraps a byte consumer.
    #[inline]
    pub fn from_fn(f: F) -> Self {
        FnSink { f }
    }
}

impl<F: FnMut(u8)> ByteSink for FnSink<F> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        (self.f)(byte);
        Ok(())
    }
}

/// A source which asks a callback for every byte.
/// The callback returns `None` once it is exhausted.
#[derive(Debug, Clone)]
pub struct FnSource<F> {
    f: F,
}

impl<F: FnMut() -> Option<u8>> FnSource<F> {
    /// Wraps a byte supplier.
    #[inline]
    pub fn from_fn(f: F) -> Self {
        FnSource { f }
    }
}

impl<F: FnMut() -> Option<u8>> ByteSource for FnSource<F> {
    #[inline]
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok((self.f)())
    }
}

/// A sink or source which may be bound after the bit stream
/// wrapping it has been created.
///
/// Byte transfers fail with [`io::ErrorKind::NotConnected`]
/// while nothing is bound.
#[derive(Debug, Clone)]
pub struct Detachable<S> {
    inner: Option<S>,
}

impl<S> Detachable<S> {
    /// Creates a holder with nothing bound.
    #[inline]
    pub fn unbound() -> Self {
        Detachable { inner: None }
    }

    /// Creates a holder already bound to `inner`.
    #[inline]
    pub fn bound(inner: S) -> Self {
        Detachable { inner: Some(inner) }
    }

    /// Binds `inner`, returning whatever was bound before.
    #[inline]
    pub fn bind(&mut self, inner: S) -> Option<S> {
        self.inner.replace(inner)
    }

    /// Unbinds and returns the current sink or source, if any.
    #[inline]
    pub fn unbind(&mut self) -> Option<S> {
        self.inner.take()
    }

    /// Returns true if something is bound.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns a reference to the bound sink or source, if any.
    #[inline]
    pub fn get_ref(&self) -> Option<&S> {
        self.inner.as_ref()
    }

    /// Returns a mutable reference to the bound sink or source, if any.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut S> {
        self.inner.as_mut()
    }

    /// Unwraps the bound sink or source, if any.
    #[inline]
    pub fn into_inner(self) -> Option<S> {
        self.inner
    }

    fn bound_mut(&mut self) -> io::Result<&mut S> {
        self.inner
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "nothing bound"))
    }
}

impl<S: ByteSink> ByteSink for Detachable<S> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.bound_mut()?.write_byte(byte)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.inner.as_mut() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }
}

impl<S: ByteSource> ByteSource for Detachable<S> {
    #[inline]
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.bound_mut()?.read_byte()
    }
}
