//! # Lexer Text Spanner

use std::sync::Arc;

use crate::spanning::{SpanLexer, SpanRef, TextSpanner};

/// A [`TextSpanner`] over a [`SpanLexer`].
///
/// Empty lexer matches are skipped; text the lexer does not match
/// is reported as [`SpanRef::Gap`].
#[derive(Clone)]
pub struct LexerTextSpanner {
    word_lexer: Arc<dyn SpanLexer>,
}

impl LexerTextSpanner {
    /// Build a new [`LexerTextSpanner`].
    ///
    /// ## Arguments
    /// * `word_lexer` - The lexer for word splitting.
    pub fn new(word_lexer: Arc<dyn SpanLexer>) -> Self {
        Self { word_lexer }
    }
}

/// The byte offset of the char following the one at `offset`.
fn next_char_boundary(
    text: &str,
    offset: usize,
) -> usize {
    offset
        + text[offset..]
            .chars()
            .next()
            .map_or(1, char::len_utf8)
}

impl TextSpanner for LexerTextSpanner {
    fn for_each_split_span(
        &self,
        text: &str,
        f: &mut dyn FnMut(SpanRef) -> bool,
    ) -> (bool, usize) {
        let mut last = 0;
        let mut search = 0;

        while search < text.len() {
            let Some((start, end)) = self.word_lexer.next_span(text, search) else {
                break;
            };

            if start == end {
                if start >= text.len() {
                    break;
                }
                search = next_char_boundary(text, start);
                continue;
            }

            if last < start {
                if !f(SpanRef::Gap(last..start)) {
                    // Leading Gap Exit
                    return (false, last);
                }
                last = start;
            }

            if !f(SpanRef::Word(start..end)) {
                // Word Exit
                return (false, last);
            }
            last = end;
            search = end;
        }

        if last < text.len() {
            if !f(SpanRef::Gap(last..text.len())) {
                // Trailing Gap Exit
                return (false, last);
            }
            last = text.len();
        }

        (true, last)
    }
}
