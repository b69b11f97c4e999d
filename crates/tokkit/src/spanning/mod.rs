//! # Text Spanning
//!
//! This module exists to factor out pattern-driven text scanning.
//!
//! * [`SpanLexer`] finds the next pattern match in a text.
//! * [`TextSpanner`] turns a text into an ordered, gap-free cover of [`SpanRef`]s.
//! * [`LexerTextSpanner`] implements [`TextSpanner`] over a [`SpanLexer`].

mod lexer_spanner;
mod span_lexer;
mod text_spanner;

#[doc(inline)]
pub use lexer_spanner::*;
#[doc(inline)]
pub use span_lexer::*;
#[doc(inline)]
pub use text_spanner::*;
