//! # Error Types

use crate::types::{ByteOffset, ScalarIndex};

/// Result type for `tokkit`.
pub type TKResult<T> = Result<T, TKError>;

/// Reasons a token stream can not be mapped back to text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A character token is not a Unicode scalar value.
    #[error("token {value:#x} at scalar index {index} is not a unicode scalar value")]
    InvalidScalarValue {
        /// Position of the token in the stream.
        index: ScalarIndex,

        /// The offending token value.
        value: u128,
    },

    /// A byte token is outside `0..=255`.
    #[error("token {value} at byte offset {offset} is not a byte value")]
    ByteOutOfRange {
        /// Position of the token in the stream.
        offset: ByteOffset,

        /// The offending token value.
        value: u128,
    },

    /// The byte stream is not valid UTF-8.
    #[error("invalid utf-8 sequence at byte offset {valid_up_to}")]
    InvalidUtf8 {
        /// Length of the longest valid prefix.
        valid_up_to: ByteOffset,

        /// Length of the invalid sequence, or `None` if the input ended mid-sequence.
        error_len: Option<usize>,
    },

    /// Word segments do not concatenate to the expected text.
    #[error("segments diverge from source text at byte offset {offset}")]
    CoverageMismatch {
        /// The first byte offset where the segments and text differ.
        offset: ByteOffset,
    },

    /// A token has the wrong shape for the decoding tokenizer.
    #[error("token {index} is not a {expected} token")]
    TokenKindMismatch {
        /// Position of the token in the stream.
        index: usize,

        /// The shape the tokenizer expected.
        expected: &'static str,
    },
}

impl From<core::str::Utf8Error> for DecodeError {
    fn from(err: core::str::Utf8Error) -> Self {
        DecodeError::InvalidUtf8 {
            valid_up_to: ByteOffset(err.valid_up_to()),
            error_len: err.error_len(),
        }
    }
}

/// Top-level error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TKError {
    /// A token stream could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Compression ratio requested for an empty token stream.
    #[error("compression ratio is undefined for an empty token stream")]
    DivideByZero,

    /// A segmentation pattern could not be used.
    #[error("pattern compilation failed for {pattern:?}: {message}")]
    PatternCompilation {
        /// The source pattern.
        pattern: String,

        /// What went wrong.
        message: String,
    },

    /// Unrecognized tokenizer name.
    #[error("unknown tokenizer kind: {0:?}")]
    UnknownTokenizerKind(String),

    /// A configuration value could not be used.
    #[error("invalid config value for {key}: {message}")]
    Config {
        /// The configuration key.
        key: String,

        /// What went wrong.
        message: String,
    },
}

impl TKError {
    /// Build a [`TKError::PatternCompilation`].
    pub fn pattern<P: AsRef<str>, M: ToString>(
        pattern: P,
        message: M,
    ) -> Self {
        TKError::PatternCompilation {
            pattern: pattern.as_ref().to_string(),
            message: message.to_string(),
        }
    }

    /// Is this a [`TKError::Decode`]?
    pub fn is_decode_error(&self) -> bool {
        matches!(self, TKError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(invalid_from_utf8)]
    fn test_utf8_error_conversion() {
        let bytes = [0x61, 0xC0, 0x41];
        let err = core::str::from_utf8(&bytes).unwrap_err();
        let err: DecodeError = err.into();
        assert_eq!(
            err,
            DecodeError::InvalidUtf8 {
                valid_up_to: ByteOffset(1),
                error_len: Some(1),
            }
        );

        let err: TKError = err.into();
        assert!(err.is_decode_error());
        assert_eq!(
            err.to_string(),
            "decode error: invalid utf-8 sequence at byte offset 1"
        );
    }

    #[test]
    fn test_pattern_error() {
        let err = TKError::pattern(r"(", "unclosed group");
        assert!(!err.is_decode_error());
        assert_eq!(
            err.to_string(),
            r#"pattern compilation failed for "(": unclosed group"#
        );
    }
}
