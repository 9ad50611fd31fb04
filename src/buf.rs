//! `StrBuf`: a length-tracked text buffer over client-provided storage.
//!
//! The caller supplies the backing `&mut [u8]` and keeps ownership of it;
//! the buffer never allocates. Every write is checked against the remaining
//! capacity and fails with [`Error::BufferFull`] instead of growing.
//!
//! Copy and concat operations return the number of bytes written.

use crate::ascii;
use crate::error::{Error, Result};

/// A mutable byte-string view over a client-provided buffer.
///
/// Capacity is fixed at construction (`bytes.len()`); the content occupies
/// `bytes[..len]`.
#[derive(Debug)]
pub struct StrBuf<'a> {
    bytes: &'a mut [u8],
    len: usize,
}

impl<'a> StrBuf<'a> {
    /// Creates an empty `StrBuf` using the whole of `bytes` as capacity.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, len: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// The current content.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    fn ensure_room(&self, base: usize, additional: usize) -> Result<()> {
        let capacity = self.bytes.len();
        if additional > capacity - base {
            return Err(Error::BufferFull {
                requested: additional,
                capacity,
            });
        }
        Ok(())
    }

    /// Replaces the content with a copy of `src`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferFull` if `src` exceeds the capacity.
    pub fn copy_from(&mut self, src: &[u8]) -> Result<usize> {
        self.ensure_room(0, src.len())?;
        self.bytes[..src.len()].copy_from_slice(src);
        self.len = src.len();
        Ok(src.len())
    }

    /// Replaces the content with a copy of `src`, lowercasing ASCII letters
    /// while copying.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferFull` if `src` exceeds the capacity.
    pub fn copy_from_folded(&mut self, src: &[u8]) -> Result<usize> {
        self.ensure_room(0, src.len())?;
        for (d, &s) in self.bytes.iter_mut().zip(src) {
            *d = ascii::to_lower(s);
        }
        self.len = src.len();
        Ok(src.len())
    }

    /// Replaces the content with a copy of the first `n` bytes of `src`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `n` exceeds `src.len()`, and
    /// `Error::BufferFull` if `n` exceeds the capacity.
    pub fn copy_n_from(&mut self, src: &[u8], n: usize) -> Result<usize> {
        if n > src.len() {
            return Err(Error::OutOfBounds {
                requested: n,
                available: src.len(),
            });
        }
        self.copy_from(&src[..n])
    }

    /// Appends a copy of `src` to the content.
    ///
    /// Returns the number of bytes appended.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferFull` if the result would exceed the capacity.
    pub fn concat(&mut self, src: &[u8]) -> Result<usize> {
        self.ensure_room(self.len, src.len())?;
        self.bytes[self.len..self.len + src.len()].copy_from_slice(src);
        self.len += src.len();
        Ok(src.len())
    }

    /// Appends a copy of `src`, lowercasing ASCII letters while copying.
    ///
    /// Returns the number of bytes appended.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferFull` if the result would exceed the capacity.
    pub fn concat_folded(&mut self, src: &[u8]) -> Result<usize> {
        self.ensure_room(self.len, src.len())?;
        for (d, &s) in self.bytes[self.len..].iter_mut().zip(src) {
            *d = ascii::to_lower(s);
        }
        self.len += src.len();
        Ok(src.len())
    }

    /// Appends a single byte.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferFull` when the buffer is at capacity.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.ensure_room(self.len, 1)?;
        self.bytes[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Inserts a copy of `src` at index `at`, shifting the tail right.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `at` is beyond the content, and
    /// `Error::BufferFull` if the result would exceed the capacity.
    pub fn insert(&mut self, at: usize, src: &[u8]) -> Result<()> {
        if at > self.len {
            return Err(Error::OutOfBounds {
                requested: at,
                available: self.len,
            });
        }
        self.ensure_room(self.len, src.len())?;
        self.bytes.copy_within(at..self.len, at + src.len());
        self.bytes[at..at + src.len()].copy_from_slice(src);
        self.len += src.len();
        Ok(())
    }

    /// Uppercases the ASCII letters of the content in place.
    pub fn make_upper(&mut self) {
        ascii::make_upper(&mut self.bytes[..self.len]);
    }

    /// Lowercases the ASCII letters of the content in place.
    pub fn make_lower(&mut self) {
        ascii::make_lower(&mut self.bytes[..self.len]);
    }
}
