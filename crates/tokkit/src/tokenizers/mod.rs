//! # Tokenizers
//!
//! [`Tokenizer`] is the shared contract; the three strategies are:
//! * [`CharacterTokenizer`] - Unicode scalar values.
//! * [`ByteTokenizer`] - UTF-8 bytes.
//! * [`WordTokenizer`] - pattern-matched substrings.
//!
//! [`AnyTokenizer`] wraps any of the three behind the sum type [`Token`],
//! for callers that pick a strategy at run-time.

mod any_tokenizer;
mod byte_tokenizer;
mod character_tokenizer;
mod tokenizer;
mod word_tokenizer;

#[doc(inline)]
pub use any_tokenizer::*;
#[doc(inline)]
pub use byte_tokenizer::*;
#[doc(inline)]
pub use character_tokenizer::*;
#[doc(inline)]
pub use tokenizer::*;
#[doc(inline)]
pub use word_tokenizer::*;
