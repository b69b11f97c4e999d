//! # Common Types
//!
//! * [`TokenType`] / [`ScalarTokenType`] - the integer types a numeric token stream may use.
//! * [`ByteOffset`] / [`ScalarIndex`] - the two addressing schemes over a `&str`.

mod offsets;
mod token_types;

#[doc(inline)]
pub use offsets::*;
#[doc(inline)]
pub use token_types::*;
