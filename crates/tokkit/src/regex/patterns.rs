//! # Word Segmentation Patterns

use crate::regex::RegexWrapperPattern;

/// Keeps runs of word characters together; every other character stands alone.
///
/// `(?s:.)` so that line breaks also become their own segment.
pub const SIMPLE_WORD_PATTERN: &str = r"\w+|(?s:.)";

/// The GPT-2 pre-tokenization pattern.
///
/// In match order:
/// * contractions: `'s`, `'d`, `'m`, `'t`, `'ll`, `'ve`, `'re`;
/// * an optional space, then a run of letters;
/// * an optional space, then a run of digits;
/// * an optional space, then a run of anything that is not a space, letter or digit;
/// * a whitespace run not followed by non-whitespace;
/// * any other whitespace run.
///
/// The lookahead requires the `fancy-regex` engine.
pub const GPT2_WORD_PATTERN: &str =
    r"'(?:[sdmt]|ll|ve|re)| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+(?!\S)|\s+";

/// Named word segmentation patterns.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PatternPreset {
    /// See [`SIMPLE_WORD_PATTERN`].
    Simple,

    /// See [`GPT2_WORD_PATTERN`].
    #[default]
    #[strum(to_string = "gpt2")]
    Gpt2,
}

impl PatternPreset {
    /// The source text of the pattern.
    pub fn source(&self) -> &'static str {
        match self {
            PatternPreset::Simple => SIMPLE_WORD_PATTERN,
            PatternPreset::Gpt2 => GPT2_WORD_PATTERN,
        }
    }

    /// The engine-tagged pattern.
    pub fn pattern(&self) -> RegexWrapperPattern {
        match self {
            PatternPreset::Simple => RegexWrapperPattern::Basic(SIMPLE_WORD_PATTERN.to_string()),
            PatternPreset::Gpt2 => RegexWrapperPattern::Fancy(GPT2_WORD_PATTERN.to_string()),
        }
    }
}

impl From<PatternPreset> for RegexWrapperPattern {
    fn from(preset: PatternPreset) -> Self {
        preset.pattern()
    }
}
