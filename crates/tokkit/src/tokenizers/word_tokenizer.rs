//! # Word Tokenizer

use core::{fmt, ops::Range};

use compact_str::CompactString;

use crate::{
    config::TokenizerKind,
    errors::{DecodeError, TKError, TKResult},
    regex::{RegexWrapper, RegexWrapperHandle, RegexWrapperPattern, patterns::PatternPreset},
    spanning::{LexerTextSpanner, SpanRef, TextSpanner},
    tokenizers::Tokenizer,
    types::ByteOffset,
};

/// A word segment; a substring of the encoded text.
pub type Segment = CompactString;

/// Average UTF-8 bytes per segment, for buffer sizing.
const EXPECTED_BYTES_PER_SEGMENT: usize = 4;

/// Single characters every word pattern must cover.
const PROBES: &[&str] = &[
    "a", "Z", "7", " ", "\t", "\n", "\r\n", ",", "'", "\u{301}", "你", "🌍",
];

/// Represents text as an ordered list of pattern-matched segments.
///
/// Matching is leftmost-first and non-overlapping.
/// Any text the pattern does not match becomes a segment of its own,
/// so the segments always concatenate back to the input.
#[derive(Clone)]
pub struct WordTokenizer {
    regex: RegexWrapperHandle,
    spanner: LexerTextSpanner,
}

impl fmt::Debug for WordTokenizer {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("WordTokenizer")
            .field("regex", &self.regex)
            .finish()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::from_preset(PatternPreset::default())
    }
}

impl WordTokenizer {
    /// Build a tokenizer over a named pattern.
    pub fn from_preset(preset: PatternPreset) -> Self {
        // Builtin patterns compile and cover the probes; see `test_presets`.
        Self::from_pattern(preset).expect("builtin word patterns are valid")
    }

    /// Build a tokenizer from a pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The segmentation pattern; a `&str` compiles adaptively.
    ///
    /// ## Returns
    /// The tokenizer, or a [`TKError::PatternCompilation`].
    pub fn from_pattern<P: Into<RegexWrapperPattern>>(pattern: P) -> TKResult<Self> {
        let regex = pattern.into().compile()?;
        Self::from_regex(regex)
    }

    /// Build a tokenizer from a compiled regex.
    ///
    /// The regex is rejected if it matches the empty string,
    /// or fails to match any of a fixed set of probe characters.
    ///
    /// ## Returns
    /// The tokenizer, or a [`TKError::PatternCompilation`].
    pub fn from_regex<R: Into<RegexWrapperHandle>>(regex: R) -> TKResult<Self> {
        let regex: RegexWrapperHandle = regex.into();

        if regex.find_at("", 0).is_some() {
            return Err(TKError::pattern(
                regex.as_str(),
                "pattern matches the empty string",
            ));
        }

        let spanner = LexerTextSpanner::new(regex.clone());
        for probe in PROBES {
            if spanner.split_spans(probe).iter().any(SpanRef::is_gap) {
                return Err(TKError::pattern(
                    regex.as_str(),
                    format!("pattern does not match {probe:?}"),
                ));
            }
        }

        log::debug!(
            "compiled word pattern ({} engine): {:?}",
            if regex.is_fancy() { "fancy-regex" } else { "regex" },
            regex.as_str()
        );

        Ok(Self { regex, spanner })
    }

    /// The compiled segmentation regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }

    /// A shared handle to the compiled regex.
    pub fn regex_handle(&self) -> RegexWrapperHandle {
        self.regex.clone()
    }

    /// The byte spans of the segments of `text`.
    ///
    /// [`SpanRef::Gap`] marks text the pattern did not match.
    pub fn segment_spans(
        &self,
        text: &str,
    ) -> Vec<SpanRef> {
        self.spanner.split_spans(text)
    }

    /// Check that `segments` concatenate to exactly `text`.
    ///
    /// ## Returns
    /// `Ok(())`, or [`DecodeError::CoverageMismatch`] at the first byte where they diverge.
    pub fn verify_segments<S: AsRef<str>>(
        text: &str,
        segments: &[S],
    ) -> TKResult<()> {
        let source = text.as_bytes();
        let mut offset = 0;
        for segment in segments {
            let segment = segment.as_ref().as_bytes();
            let rest = &source[offset..];
            if !rest.starts_with(segment) {
                let common = rest
                    .iter()
                    .zip(segment)
                    .take_while(|(a, b)| a == b)
                    .count();
                return Err(DecodeError::CoverageMismatch {
                    offset: ByteOffset(offset + common),
                }
                .into());
            }
            offset += segment.len();
        }

        if offset != source.len() {
            return Err(DecodeError::CoverageMismatch {
                offset: ByteOffset(offset),
            }
            .into());
        }
        Ok(())
    }
}

impl Tokenizer for WordTokenizer {
    type Token = Segment;

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Word
    }

    fn expected_token_count(
        &self,
        text: &str,
    ) -> usize {
        text.len() / EXPECTED_BYTES_PER_SEGMENT
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text, tokens))
    )]
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<Segment>,
    ) {
        self.spanner.for_each_split_span(text, &mut |span_ref| {
            if let SpanRef::Gap(range) = &span_ref {
                log::debug!(
                    "pattern {:?} left bytes {range:?} unmatched; emitting as a segment",
                    self.regex.as_str()
                );
            }
            tokens.push(Segment::from(&text[Range::from(span_ref)]));
            true
        });
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, tokens))
    )]
    fn try_decode(
        &self,
        tokens: &[Segment],
    ) -> TKResult<String> {
        let mut text = String::with_capacity(tokens.iter().map(Segment::len).sum());
        for segment in tokens {
            text.push_str(segment);
        }
        log::trace!("decoded {} segments", tokens.len());
        Ok(text)
    }
}
