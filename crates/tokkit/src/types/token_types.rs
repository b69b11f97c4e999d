//! # Token Types

use core::{fmt::Debug, hash::Hash};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as an integer token.
///
/// Every byte value fits, so a [`ByteTokenizer`](crate::ByteTokenizer)
/// over any `TokenType` has a total `encode`.
pub trait TokenType:
    'static
    + PrimInt
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + From<u8>
    + Hash
    + Default
    + Debug
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + From<u8>
        + Hash
        + Default
        + Debug
        + Send
        + Sync
{
}

/// A [`TokenType`] wide enough to hold every Unicode scalar value.
///
/// Implemented for `u32`, `u64` and `u128`.
pub trait ScalarTokenType: TokenType + From<char> {}

impl<T> ScalarTokenType for T where T: TokenType + From<char> {}
