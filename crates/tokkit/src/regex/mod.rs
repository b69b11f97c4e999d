//! # Regex Patterns
//!
//! [`RegexWrapperPattern`] is the uncompiled, engine-tagged form of a pattern;
//! [`RegexWrapper`] is the compiled form, over either the `regex` or the
//! `fancy-regex` engine.
//!
//! Segmentation patterns in common use live in [`patterns`].

pub mod patterns;
mod regex_wrapper;

#[doc(inline)]
pub use regex_wrapper::*;
