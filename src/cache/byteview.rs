//! Byte View Module
//!
//! Immutable byte payload handed out by the cache.

use std::fmt;

use bytes::Bytes;

use crate::cache::lru::ByteSize;

// == Byte View ==
/// An immutable view over a cached byte payload.
///
/// Content is fixed at construction. Clones share the same buffer, and the
/// only way to get owned, mutable bytes back out is [`ByteView::byte_slice`],
/// which copies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteView {
    b: Bytes,
}

impl ByteView {
    // == Constructor ==
    /// Creates a view that owns `data`.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { b: data.into() }
    }

    /// Creates a view holding a fresh copy of `data`.
    pub fn copy_from_slice(data: &[u8]) -> Self {
        Self {
            b: Bytes::copy_from_slice(data),
        }
    }

    // == Length ==
    /// Returns the number of bytes in the payload.
    pub fn len(&self) -> usize {
        self.b.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    // == Byte Slice ==
    /// Returns an owned copy of the payload.
    pub fn byte_slice(&self) -> Vec<u8> {
        self.b.to_vec()
    }

    // == As String ==
    /// Returns the payload as a string, replacing invalid UTF-8 sequences.
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.b).into_owned()
    }
}

impl ByteSize for ByteView {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl AsRef<[u8]> for ByteView {
    fn as_ref(&self) -> &[u8] {
        &self.b
    }
}

impl fmt::Display for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.b))
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<String> for ByteView {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl From<&str> for ByteView {
    fn from(data: &str) -> Self {
        Self::copy_from_slice(data.as_bytes())
    }
}
