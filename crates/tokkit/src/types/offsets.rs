//! # Text Addressing
//!
//! A `&str` can be addressed by byte offset (UTF-8 code units)
//! or by scalar index (Unicode scalar values). They agree only on ASCII text.

use core::fmt;

/// An offset into the UTF-8 bytes of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteOffset(pub usize);

/// An index into the Unicode scalar values of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ScalarIndex(pub usize);

impl fmt::Display for ByteOffset {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ScalarIndex {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ByteOffset {
    /// Convert to a [`ScalarIndex`] in `text`.
    ///
    /// ## Returns
    /// `None` if the offset is past the end of `text`, or not on a char boundary.
    pub fn to_scalar_index(
        self,
        text: &str,
    ) -> Option<ScalarIndex> {
        if !text.is_char_boundary(self.0) {
            return None;
        }
        Some(ScalarIndex(text[..self.0].chars().count()))
    }
}

impl ScalarIndex {
    /// Convert to a [`ByteOffset`] in `text`.
    ///
    /// The index one past the last scalar value maps to `text.len()`.
    ///
    /// ## Returns
    /// `None` if the index is past the end of `text`.
    pub fn to_byte_offset(
        self,
        text: &str,
    ) -> Option<ByteOffset> {
        text.char_indices()
            .map(|(offset, _)| offset)
            .chain(core::iter::once(text.len()))
            .nth(self.0)
            .map(ByteOffset)
    }
}
