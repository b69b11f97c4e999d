#![warn(missing_docs, unused)]
//! # `tokkit` Basic Tokenizer Suite
//!
//! Three interchangeable tokenizers behind one round-trip contract:
//! * [`CharacterTokenizer`] - one token per Unicode scalar value.
//! * [`ByteTokenizer`] - one token per UTF-8 byte.
//! * [`WordTokenizer`] - one segment per pattern match.
//!
//! All of them implement [`Tokenizer`], which provides `encode`, `try_decode`
//! and the shared [`Tokenizer::compression_ratio`] metric.
//!
//! See:
//! * [`tokenizers`] for the interface and the three strategies.
//! * [`regex`] for segmentation patterns and the compiled pattern wrapper.
//! * [`spanning`] for turning pattern matches into a gap-free cover of text.
//! * [`config`] to select a tokenizer at run-time.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Comparing Strategies
//!
//! ```rust
//! use tokkit::{ByteTokenizer, CharacterTokenizer, Tokenizer, WordTokenizer};
//!
//! fn example() -> tokkit::TKResult<()> {
//!     let text = "Hello, 🌍! 你好!";
//!
//!     let chars = CharacterTokenizer::<u32>::new();
//!     let bytes = ByteTokenizer::<u32>::new();
//!     let words = WordTokenizer::default();
//!
//!     let char_tokens = chars.encode(text);
//!     let byte_tokens = bytes.encode(text);
//!     let word_tokens = words.encode(text);
//!
//!     assert_eq!(chars.try_decode(&char_tokens)?, text);
//!     assert_eq!(bytes.try_decode(&byte_tokens)?, text);
//!     assert_eq!(words.try_decode(&word_tokens)?, text);
//!
//!     assert!(chars.compression_ratio(text, &char_tokens)? > 1.0);
//!     assert_eq!(bytes.compression_ratio(text, &byte_tokens)?, 1.0);
//!     assert!(words.compression_ratio(text, &word_tokens)? > 3.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod errors;
pub mod regex;
pub mod spanning;
pub mod tokenizers;
pub mod types;

#[cfg(feature = "rayon")]
pub mod concurrency;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use config::{TokenizerConfig, TokenizerKind};
#[doc(inline)]
pub use errors::{DecodeError, TKError, TKResult};
#[doc(inline)]
pub use tokenizers::{
    AnyTokenizer,
    ByteTokenizer,
    CharacterTokenizer,
    Segment,
    Token,
    Tokenizer,
    WordTokenizer,
    compression_ratio,
};
#[doc(inline)]
pub use types::{ByteOffset, ScalarIndex, ScalarTokenType, TokenType};
