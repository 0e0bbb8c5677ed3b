//! Key records: the byte buffers a tree links to as leaves.
//!
//! A record starts with a header byte selecting one of two encodings:
//!
//! * a non-zero header `L` means the next `L` bytes are the key, zero bytes included;
//! * a zero header means the key is the NUL-terminated string starting at byte 1.
//!
//! Records are owned by the caller. A [`Record`] only borrows the buffer, so the bytes can not
//! change while the record is linked into a tree.

use std::fmt;

use crate::error::{Error, Result};

/// Returns the encoded size of a record: the header byte plus the key bytes.
///
/// The NUL terminator of a string record is not counted. An empty buffer has size 0.
#[must_use]
pub fn size(bytes: &[u8]) -> usize {
    match bytes.first() {
        None => 0,
        Some(0) => c_str_len(&bytes[1..]) + 1,
        Some(&len) => usize::from(len) + 1,
    }
}

/// Compares two encoded records.
///
/// Returns 0 when both records hold the same key in the same encoding, and otherwise one past
/// the byte offset of the first difference. Records with different headers differ at offset 0
/// no matter what follows.
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> usize {
    let len = byte_at(a, 0);
    if len != byte_at(b, 0) {
        return 1;
    }
    if len == 0 {
        let mut pos = 1;
        loop {
            let byte = byte_at(a, pos);
            if byte != byte_at(b, pos) {
                return pos + 1;
            }
            if byte == 0 {
                return 0;
            }
            pos += 1;
        }
    }
    (1..=usize::from(len))
        .find(|&pos| byte_at(a, pos) != byte_at(b, pos))
        .map_or(0, |pos| pos + 1)
}

/// Reads a byte, treating everything past the end of the buffer as zero.
pub(crate) fn byte_at(bytes: &[u8], pos: usize) -> u8 {
    bytes.get(pos).copied().unwrap_or(0)
}

fn c_str_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

/// A validated view over a caller-owned record buffer.
///
/// Equality compares key content, not buffer identity; use [`Record::ptr_eq`] for the latter.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record<'a> {
    // Header, key bytes, and the terminator for string records. Trailing buffer bytes are cut.
    bytes: &'a [u8],
}

impl<'a> TryFrom<&'a [u8]> for Record<'a> {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self> {
        Self::new(bytes)
    }
}

impl<'a> Record<'a> {
    /// Validates the encoding of `bytes` and wraps them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] if the buffer is empty, is shorter than its header
    /// declares, or holds a string record without a NUL terminator.
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        let encoded_len = match bytes.first() {
            None => return Err(Error::malformed("empty buffer")),
            Some(0) => match bytes[1..].iter().position(|&b| b == 0) {
                Some(len) => len + 2,
                None => return Err(Error::malformed("missing NUL terminator")),
            },
            Some(&len) => {
                let encoded_len = usize::from(len) + 1;
                if bytes.len() < encoded_len {
                    return Err(Error::malformed("buffer shorter than its declared length"));
                }
                encoded_len
            }
        };
        Ok(Self { bytes: &bytes[..encoded_len] })
    }

    /// The encoded size as defined by [`size`].
    #[must_use]
    pub fn size(self) -> usize {
        size(self.bytes)
    }

    /// The encoded bytes, including the terminator of a string record.
    #[must_use]
    pub const fn as_bytes(self) -> &'a [u8] {
        self.bytes
    }

    /// The key bytes without header or terminator.
    #[must_use]
    pub fn key(self) -> &'a [u8] {
        &self.bytes[1..self.size()]
    }

    /// Whether the record uses the NUL-terminated string encoding.
    #[must_use]
    pub fn is_c_str(self) -> bool {
        self.bytes[0] == 0
    }

    /// Returns the byte at `pos`, or zero when `pos` is not below the record's size.
    #[must_use]
    pub fn byte(self, pos: usize) -> u8 {
        if pos < self.size() {
            self.bytes[pos]
        } else {
            0
        }
    }

    /// Whether both records view the same caller buffer.
    #[must_use]
    pub fn ptr_eq(self, other: Record<'_>) -> bool {
        std::ptr::eq(self.bytes.as_ptr(), other.bytes.as_ptr())
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.is_c_str() { "CStr" } else { "Fixed" };
        write!(f, "{mode}(\"{}\")", self.key().escape_ascii())
    }
}

/// An owned, correctly encoded record buffer.
///
/// Useful for callers that do not already keep their keys in record form. The tree itself never
/// creates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordBuf {
    bytes: Vec<u8>,
}

impl RecordBuf {
    /// Encodes a key of 1 to 255 bytes with a length header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] if the key is empty or longer than 255 bytes.
    pub fn fixed(key: &[u8]) -> Result<Self> {
        let len = u8::try_from(key.len())
            .map_err(|_| Error::malformed("fixed-length key longer than 255 bytes"))?;
        if len == 0 {
            return Err(Error::malformed("fixed-length key is empty"));
        }
        let mut bytes = Vec::with_capacity(key.len() + 1);
        bytes.push(len);
        bytes.extend_from_slice(key);
        Ok(Self { bytes })
    }

    /// Encodes a key as a NUL-terminated string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] if the key contains a NUL byte.
    pub fn c_str(key: &[u8]) -> Result<Self> {
        if key.contains(&0) {
            return Err(Error::malformed("string key contains a NUL byte"));
        }
        let mut bytes = Vec::with_capacity(key.len() + 2);
        bytes.push(0);
        bytes.extend_from_slice(key);
        bytes.push(0);
        Ok(Self { bytes })
    }

    /// Encodes the in-memory bytes of a plain value as a fixed-length key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] for zero-sized types or types larger than 255 bytes.
    pub fn from_pod<T: bytemuck::Pod>(value: &T) -> Result<Self> {
        Self::fixed(bytemuck::bytes_of(value))
    }

    /// Borrows the buffer as a [`Record`].
    #[must_use]
    pub fn as_record(&self) -> Record<'_> {
        Record { bytes: &self.bytes }
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for RecordBuf {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
