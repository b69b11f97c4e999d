//! # Concurrency Support
//!
//! Batch-level parallel wrappers for [`Tokenizer`](crate::Tokenizer)s.

mod rayon;

#[doc(inline)]
pub use rayon::*;
