//! # Tokenizer Configuration
//!
//! [`TokenizerConfig`] describes which tokenizer to build:
//! * `kind` - the [`TokenizerKind`] strategy.
//! * `pattern` - the word segmentation pattern; only used by [`TokenizerKind::Word`].
//!
//! ```rust
//! use tokkit::{Tokenizer, TokenizerConfig, TokenizerKind};
//!
//! fn example() -> tokkit::TKResult<()> {
//!     let tokenizer = TokenizerConfig::from_kind(TokenizerKind::Word)
//!         .with_pattern(r"\S+|\s+")
//!         .build()?;
//!
//!     assert_eq!(tokenizer.encode("a  b").len(), 3);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use core::str::FromStr;
use std::env;

use crate::{
    errors::{TKError, TKResult},
    regex::{RegexWrapperPattern, patterns::PatternPreset},
    tokenizers::{AnyTokenizer, ByteTokenizer, CharacterTokenizer, WordTokenizer},
};

/// Environment variable key to select the tokenizer kind.
pub const TOKKIT_TOKENIZER: &str = "TOKKIT_TOKENIZER";

/// Environment variable key to override the word segmentation pattern.
///
/// The value is either a [`PatternPreset`] name, or a raw pattern.
pub const TOKKIT_WORD_PATTERN: &str = "TOKKIT_WORD_PATTERN";

/// The tokenizer strategies.
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
#[strum(ascii_case_insensitive)]
pub enum TokenizerKind {
    /// One token per Unicode scalar value.
    #[strum(to_string = "character", serialize = "char")]
    Character,

    /// One token per UTF-8 byte.
    #[strum(to_string = "byte", serialize = "bytes")]
    Byte,

    /// One token per pattern-matched segment.
    #[default]
    #[strum(to_string = "word", serialize = "words")]
    Word,
}

impl TokenizerKind {
    /// Parse a tokenizer kind name.
    ///
    /// ## Returns
    /// The kind, or [`TKError::UnknownTokenizerKind`].
    pub fn parse(name: &str) -> TKResult<Self> {
        Self::from_str(name.trim()).map_err(|_| TKError::UnknownTokenizerKind(name.to_string()))
    }
}

/// Read a non-empty environment variable.
fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Resolve the tokenizer kind.
///
/// The resolution order is:
/// 1. `kind`, if present.
/// 2. [`TOKKIT_TOKENIZER`] env var.
/// 3. [`TokenizerKind::default()`]
pub fn resolve_kind(kind: Option<TokenizerKind>) -> TKResult<TokenizerKind> {
    if let Some(kind) = kind {
        Ok(kind)
    } else if let Some(name) = env_value(TOKKIT_TOKENIZER) {
        TokenizerKind::parse(&name).map_err(|err| TKError::Config {
            key: TOKKIT_TOKENIZER.to_string(),
            message: err.to_string(),
        })
    } else {
        Ok(TokenizerKind::default())
    }
}

/// Resolve the word segmentation pattern.
///
/// The resolution order is:
/// 1. `pattern`, if present.
/// 2. [`TOKKIT_WORD_PATTERN`] env var; a [`PatternPreset`] name, else a raw pattern.
/// 3. `None`
pub fn resolve_word_pattern(pattern: Option<RegexWrapperPattern>) -> Option<RegexWrapperPattern> {
    if pattern.is_some() {
        pattern
    } else if let Some(value) = env_value(TOKKIT_WORD_PATTERN) {
        match PatternPreset::from_str(value.trim()) {
            Ok(preset) => Some(preset.pattern()),
            Err(_) => Some(RegexWrapperPattern::from(value)),
        }
    } else {
        None
    }
}

/// Declarative description of a tokenizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizerConfig {
    /// The tokenizer strategy.
    pub kind: TokenizerKind,

    /// The word segmentation pattern; `None` selects the default preset.
    pub pattern: Option<RegexWrapperPattern>,
}

impl TokenizerConfig {
    /// Create a config for the given kind.
    pub fn from_kind(kind: TokenizerKind) -> Self {
        Self {
            kind,
            pattern: None,
        }
    }

    /// Create a config from the environment.
    ///
    /// See [`resolve_kind`] and [`resolve_word_pattern`];
    /// the pattern is only read for [`TokenizerKind::Word`].
    pub fn from_env() -> TKResult<Self> {
        let kind = resolve_kind(None)?;
        let pattern = match kind {
            TokenizerKind::Word => resolve_word_pattern(None),
            _ => None,
        };
        Ok(Self { kind, pattern })
    }

    /// Set the tokenizer kind.
    pub fn with_kind(
        self,
        kind: TokenizerKind,
    ) -> Self {
        Self { kind, ..self }
    }

    /// Set the word segmentation pattern.
    pub fn with_pattern<P: Into<RegexWrapperPattern>>(
        self,
        pattern: P,
    ) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..self
        }
    }

    /// Build the tokenizer.
    ///
    /// ## Returns
    /// The tokenizer; a [`TKError::PatternCompilation`] for a bad word pattern;
    /// or a [`TKError::Config`] if a pattern is given for a kind that does not use one.
    pub fn build(&self) -> TKResult<AnyTokenizer> {
        if self.kind != TokenizerKind::Word
            && let Some(pattern) = &self.pattern
        {
            return Err(TKError::Config {
                key: "pattern".to_string(),
                message: format!(
                    "the {} tokenizer does not take a pattern (got {:?})",
                    self.kind,
                    pattern.as_str()
                ),
            });
        }

        log::debug!("building {} tokenizer", self.kind);
        Ok(match self.kind {
            TokenizerKind::Character => CharacterTokenizer::<u32>::new().into(),
            TokenizerKind::Byte => ByteTokenizer::<u32>::new().into(),
            TokenizerKind::Word => match &self.pattern {
                Some(pattern) => WordTokenizer::from_pattern(pattern.clone())?.into(),
                None => WordTokenizer::default().into(),
            },
        })
    }
}
