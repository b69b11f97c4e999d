//! # Text Spanner Trait

use core::ops::Range;

/// A labeled byte range of a text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef {
    /// A span matched by the segmentation pattern.
    Word(Range<usize>),

    /// A span between (or around) pattern matches.
    Gap(Range<usize>),
}

impl From<SpanRef> for Range<usize> {
    fn from(span: SpanRef) -> Self {
        match span {
            SpanRef::Word(range) => range,
            SpanRef::Gap(range) => range,
        }
    }
}

impl SpanRef {
    /// The byte range of the span.
    pub fn range(&self) -> &Range<usize> {
        match self {
            SpanRef::Word(range) => range,
            SpanRef::Gap(range) => range,
        }
    }

    /// Is this a [`SpanRef::Gap`]?
    pub fn is_gap(&self) -> bool {
        matches!(self, SpanRef::Gap(_))
    }
}

/// Splits text into an ordered, gap-free, non-overlapping cover of [`SpanRef`]s.
pub trait TextSpanner: Send + Sync {
    /// Visit each span of `text`, in order.
    ///
    /// Every byte of `text` lands in exactly one span; spans are never empty,
    /// and always start and end on char boundaries.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    /// * `f` - Called on each span; return `false` to stop early.
    ///
    /// ## Returns
    /// `(completed, consumed)`: whether every span was visited,
    /// and the number of bytes covered by accepted spans.
    fn for_each_split_span(
        &self,
        text: &str,
        f: &mut dyn FnMut(SpanRef) -> bool,
    ) -> (bool, usize);

    /// Split text into spans.
    fn split_spans(
        &self,
        text: &str,
    ) -> Vec<SpanRef> {
        let mut spans = Vec::new();
        self.for_each_split_span(text, &mut |span_ref| {
            spans.push(span_ref);
            true
        });
        spans
    }

    /// Rewrite text keeping only the [`SpanRef::Word`] spans.
    fn remove_gaps(
        &self,
        text: &str,
    ) -> String {
        let mut buf = String::with_capacity(text.len());
        self.for_each_split_span(text, &mut |span_ref| {
            if let SpanRef::Word(range) = span_ref {
                buf.push_str(&text[range]);
            }
            true
        });
        buf
    }
}
