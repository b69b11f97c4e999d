//! # Span Lexer Trait

use crate::regex::RegexWrapper;

/// Trait for finding the next occurrence of a span.
///
/// ## Implementation Notes
///
/// This trait is typically implemented on concrete types like [`RegexWrapper`].
///
/// Smart pointer types that implement `Deref<Target: SpanLexer>` (such as `Arc<T>` and `Box<T>`)
/// automatically implement `SpanLexer` through a blanket implementation.
pub trait SpanLexer: Send + Sync {
    /// Find the next occurrence of a span.
    ///
    /// ## Arguments
    /// * `text` - the text to scan over.
    /// * `offset` - the offset to start scanning from.
    ///
    /// ## Returns
    /// The span bounds, if found, relative to `text`.
    fn next_span(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<(usize, usize)>;
}

// Blanket implementation for any type that derefs to a SpanLexer.
impl<D> SpanLexer for D
where
    D: core::ops::Deref + Send + Sync,
    D::Target: SpanLexer,
{
    fn next_span(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<(usize, usize)> {
        self.deref().next_span(text, offset)
    }
}

impl SpanLexer for RegexWrapper {
    fn next_span(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<(usize, usize)> {
        self.find_at(text, offset).map(|r| (r.start, r.end))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::regex::RegexWrapperPattern;

    #[test]
    fn test_regex_lexer() {
        let regex = RegexWrapperPattern::from(r"\d+").compile().unwrap();
        assert_eq!(regex.next_span("ab12cd345", 0), Some((2, 4)));
        assert_eq!(regex.next_span("ab12cd345", 4), Some((6, 9)));
        assert_eq!(regex.next_span("ab12cd345", 9), None);

        let lexer: Arc<dyn SpanLexer> = Arc::new(regex);
        assert_eq!(lexer.next_span("ab12cd345", 3), Some((3, 4)));
    }
}
