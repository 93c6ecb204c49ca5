//! Byte cursor with checked, big-endian reads.

use crate::BufferError;

/// A cursor over a borrowed byte slice.
///
/// Every read checks the remaining length first and fails with
/// [`BufferError::EndOfBuffer`] without moving the cursor, so callers can
/// probe a buffer and fall back to another interpretation without
/// backtracking.
///
/// # Example
///
/// ```
/// use cbor_serializer_buffers::Reader;
///
/// let data = [0x19, 0x23, 0x28];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.peek(), Some(0x19));
/// assert_eq!(reader.u8(), Ok(0x19));
/// assert_eq!(reader.u16(), Ok(9000));
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.x = 0;
        self.end = uint8.len();
        self.uint8 = uint8;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Returns `true` when no bytes remain.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        if self.x < self.end {
            Some(self.uint8[self.x])
        } else {
            None
        }
    }

    /// Fails unless at least `size` bytes remain.
    pub fn ensure(&self, size: usize) -> Result<(), BufferError> {
        if size > self.size() {
            return Err(BufferError::EndOfBuffer);
        }
        Ok(())
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.ensure(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        let x = self.x;
        self.x = x + size;
        Ok(&self.uint8[x..x + size])
    }

    /// Returns the unread bytes without advancing the cursor.
    pub fn remaining(&self) -> &'a [u8] {
        &self.uint8[self.x..self.end]
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.ensure(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        self.ensure(2)?;
        let x = self.x;
        let val = ((self.uint8[x] as u16) << 8) | (self.uint8[x + 1] as u16);
        self.x += 2;
        Ok(val)
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(self.buf(4)?);
        Ok(u32::from_be_bytes(bytes))
    }

    /// Reads an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self) -> Result<u64, BufferError> {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(self.buf(8)?);
        Ok(u64::from_be_bytes(bytes))
    }
}
