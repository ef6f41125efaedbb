//! Read-only, bounds-checked byte views the hasher reads from.
//!
//! The hasher never keeps a view past the call that received it and never
//! writes through one. Any contiguous byte source can take part by
//! implementing [`ByteView`].

use crate::xxh64::HashError;

/// Offset-addressable read access over an immutable byte region.
///
/// Multi-byte reads are little-endian on every host. Reads past `len()`
/// panic; the hashing routines never issue them.
pub trait ByteView {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn byte_at(&self, offset: usize) -> u8;

    fn u32_at(&self, offset: usize) -> u32;

    fn u64_at(&self, offset: usize) -> u64;
}

impl ByteView for [u8] {
    #[inline(always)]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline(always)]
    fn byte_at(&self, offset: usize) -> u8 {
        self[offset]
    }

    #[inline(always)]
    fn u32_at(&self, offset: usize) -> u32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self[offset..offset + 4]);
        u32::from_le_bytes(word)
    }

    #[inline(always)]
    fn u64_at(&self, offset: usize) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&self[offset..offset + 8]);
        u64::from_le_bytes(word)
    }
}

impl<const N: usize> ByteView for [u8; N] {
    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn byte_at(&self, offset: usize) -> u8 {
        self.as_slice().byte_at(offset)
    }

    #[inline(always)]
    fn u32_at(&self, offset: usize) -> u32 {
        self.as_slice().u32_at(offset)
    }

    #[inline(always)]
    fn u64_at(&self, offset: usize) -> u64 {
        self.as_slice().u64_at(offset)
    }
}

impl ByteView for Vec<u8> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline(always)]
    fn byte_at(&self, offset: usize) -> u8 {
        self.as_slice().byte_at(offset)
    }

    #[inline(always)]
    fn u32_at(&self, offset: usize) -> u32 {
        self.as_slice().u32_at(offset)
    }

    #[inline(always)]
    fn u64_at(&self, offset: usize) -> u64 {
        self.as_slice().u64_at(offset)
    }
}

impl<T: ByteView + ?Sized> ByteView for &T {
    #[inline(always)]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn byte_at(&self, offset: usize) -> u8 {
        (**self).byte_at(offset)
    }

    #[inline(always)]
    fn u32_at(&self, offset: usize) -> u32 {
        (**self).u32_at(offset)
    }

    #[inline(always)]
    fn u64_at(&self, offset: usize) -> u64 {
        (**self).u64_at(offset)
    }
}

/// A `len`-byte window starting at `offset` inside a larger buffer.
///
/// Offsets passed to the [`ByteView`] methods are relative to the window
/// start, so hashing a window equals hashing a copy of those bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    bytes: &'a [u8],
}

impl<'a> Window<'a> {
    pub fn new(base: &'a [u8], offset: usize, len: usize) -> Result<Self, HashError> {
        let out_of_bounds = HashError::OutOfBounds {
            offset,
            len,
            available: base.len(),
        };
        let end = match offset.checked_add(len) {
            Some(end) if end <= base.len() => end,
            _ => {
                tracing::trace!(target: "xxh64::input", offset, len, available = base.len(), "window.rejected");
                return Err(out_of_bounds);
            }
        };
        Ok(Self {
            bytes: &base[offset..end],
        })
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }
}

impl ByteView for Window<'_> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    fn byte_at(&self, offset: usize) -> u8 {
        self.bytes.byte_at(offset)
    }

    #[inline(always)]
    fn u32_at(&self, offset: usize) -> u32 {
        self.bytes.u32_at(offset)
    }

    #[inline(always)]
    fn u64_at(&self, offset: usize) -> u64 {
        self.bytes.u64_at(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_little_endian() {
        let bytes = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09];
        assert_eq!(bytes.byte_at(8), 0x09);
        assert_eq!(bytes.u32_at(0), 0x0403_0201);
        assert_eq!(bytes.u32_at(1), 0x0504_0302);
        assert_eq!(bytes.u64_at(1), 0x0908_0706_0504_0302);
    }

    #[test]
    fn window_offsets_are_relative() {
        let base: Vec<u8> = (0u8..32).collect();
        let window = Window::new(&base, 5, 10).unwrap();
        assert_eq!(window.len(), 10);
        assert_eq!(window.byte_at(0), 5);
        assert_eq!(window.u32_at(6), u32::from_le_bytes([11, 12, 13, 14]));
        assert_eq!(window.as_slice(), &base[5..15]);
    }

    #[test]
    fn window_rejects_inconsistent_length() {
        let base = [0u8; 16];
        assert_eq!(
            Window::new(&base, 10, 7),
            Err(HashError::OutOfBounds {
                offset: 10,
                len: 7,
                available: 16
            })
        );
        assert!(Window::new(&base, usize::MAX, 2).is_err());
        assert!(Window::new(&base, 16, 0).unwrap().is_empty());
    }

    #[test]
    #[should_panic]
    fn reads_past_the_end_panic() {
        let bytes = [0u8; 7];
        bytes.u64_at(0);
    }
}
