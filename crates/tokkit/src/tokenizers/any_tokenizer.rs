//! # Run-time Selected Tokenizer

use crate::{
    config::TokenizerKind,
    errors::{DecodeError, TKResult},
    tokenizers::{ByteTokenizer, CharacterTokenizer, Segment, Tokenizer, WordTokenizer},
};

/// A token from any of the tokenizer strategies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// An integer token; a scalar value or a byte value.
    Id(u32),

    /// A word segment.
    Segment(Segment),
}

impl From<u32> for Token {
    fn from(id: u32) -> Self {
        Token::Id(id)
    }
}

impl From<Segment> for Token {
    fn from(segment: Segment) -> Self {
        Token::Segment(segment)
    }
}

impl From<&str> for Token {
    fn from(segment: &str) -> Self {
        Token::Segment(segment.into())
    }
}

impl Token {
    /// The integer value, if this is a [`Token::Id`].
    pub fn as_id(&self) -> Option<u32> {
        match self {
            Token::Id(id) => Some(*id),
            Token::Segment(_) => None,
        }
    }

    /// The segment text, if this is a [`Token::Segment`].
    pub fn as_segment(&self) -> Option<&str> {
        match self {
            Token::Id(_) => None,
            Token::Segment(segment) => Some(segment.as_str()),
        }
    }
}

/// One of the tokenizer strategies, chosen at run-time.
///
/// Usually built through [`TokenizerConfig`](crate::TokenizerConfig).
#[derive(Debug, Clone)]
pub enum AnyTokenizer {
    /// See [`CharacterTokenizer`].
    Character(CharacterTokenizer<u32>),

    /// See [`ByteTokenizer`].
    Byte(ByteTokenizer<u32>),

    /// See [`WordTokenizer`].
    Word(WordTokenizer),
}

impl From<CharacterTokenizer<u32>> for AnyTokenizer {
    fn from(tokenizer: CharacterTokenizer<u32>) -> Self {
        AnyTokenizer::Character(tokenizer)
    }
}

impl From<ByteTokenizer<u32>> for AnyTokenizer {
    fn from(tokenizer: ByteTokenizer<u32>) -> Self {
        AnyTokenizer::Byte(tokenizer)
    }
}

impl From<WordTokenizer> for AnyTokenizer {
    fn from(tokenizer: WordTokenizer) -> Self {
        AnyTokenizer::Word(tokenizer)
    }
}

fn collect_ids(tokens: &[Token]) -> Result<Vec<u32>, DecodeError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token.as_id().ok_or(DecodeError::TokenKindMismatch {
                index,
                expected: "id",
            })
        })
        .collect()
}

fn collect_segments(tokens: &[Token]) -> Result<Vec<Segment>, DecodeError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| match token {
            Token::Segment(segment) => Ok(segment.clone()),
            Token::Id(_) => Err(DecodeError::TokenKindMismatch {
                index,
                expected: "segment",
            }),
        })
        .collect()
}

impl Tokenizer for AnyTokenizer {
    type Token = Token;

    fn kind(&self) -> TokenizerKind {
        match self {
            AnyTokenizer::Character(inner) => inner.kind(),
            AnyTokenizer::Byte(inner) => inner.kind(),
            AnyTokenizer::Word(inner) => inner.kind(),
        }
    }

    fn expected_token_count(
        &self,
        text: &str,
    ) -> usize {
        match self {
            AnyTokenizer::Character(inner) => inner.expected_token_count(text),
            AnyTokenizer::Byte(inner) => inner.expected_token_count(text),
            AnyTokenizer::Word(inner) => inner.expected_token_count(text),
        }
    }

    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<Token>,
    ) {
        match self {
            AnyTokenizer::Character(inner) => {
                tokens.extend(inner.encode(text).into_iter().map(Token::Id))
            }
            AnyTokenizer::Byte(inner) => {
                tokens.extend(inner.encode(text).into_iter().map(Token::Id))
            }
            AnyTokenizer::Word(inner) => {
                tokens.extend(inner.encode(text).into_iter().map(Token::Segment))
            }
        }
    }

    fn try_decode(
        &self,
        tokens: &[Token],
    ) -> TKResult<String> {
        match self {
            AnyTokenizer::Character(inner) => inner.try_decode(&collect_ids(tokens)?),
            AnyTokenizer::Byte(inner) => inner.try_decode(&collect_ids(tokens)?),
            AnyTokenizer::Word(inner) => inner.try_decode(&collect_segments(tokens)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{TKError, TokenizerConfig, testing::common_tokenizer_tests};

    #[test]
    fn test_all_kinds() {
        for kind in TokenizerKind::iter() {
            let tokenizer = TokenizerConfig::from_kind(kind).build().unwrap();
            assert_eq!(tokenizer.kind(), kind);
            common_tokenizer_tests(&tokenizer);
        }
    }

    #[test]
    fn test_scenario_counts() {
        let text = "Hello, 🌍! 你好!";

        let counts: Vec<(TokenizerKind, usize)> = TokenizerKind::iter()
            .map(|kind| {
                let tokenizer = TokenizerConfig::from_kind(kind).build().unwrap();
                (kind, tokenizer.encode(text).len())
            })
            .collect();

        assert_eq!(
            counts,
            vec![
                (TokenizerKind::Character, 13),
                (TokenizerKind::Byte, 20),
                (TokenizerKind::Word, 5),
            ]
        );
    }

    #[test]
    fn test_token_shapes() {
        let chars: AnyTokenizer = CharacterTokenizer::<u32>::new().into();
        assert_eq!(chars.encode("a🌍"), vec![Token::Id(0x61), Token::Id(0x1F30D)]);

        let bytes: AnyTokenizer = ByteTokenizer::<u32>::new().into();
        assert_eq!(bytes.encode("é"), vec![Token::Id(0xC3), Token::Id(0xA9)]);

        let words: AnyTokenizer = WordTokenizer::default().into();
        assert_eq!(words.encode("hi there"), vec![Token::from("hi"), Token::from(" there")]);

        assert_eq!(Token::Id(3).as_id(), Some(3));
        assert_eq!(Token::Id(3).as_segment(), None);
        assert_eq!(Token::from("x").as_segment(), Some("x"));
        assert_eq!(Token::from("x").as_id(), None);
    }

    #[test]
    fn test_kind_mismatch() {
        let chars: AnyTokenizer = CharacterTokenizer::<u32>::new().into();
        assert_eq!(
            chars.try_decode(&[Token::Id(0x61), Token::from("b")]),
            Err(TKError::Decode(DecodeError::TokenKindMismatch {
                index: 1,
                expected: "id",
            }))
        );

        let words: AnyTokenizer = WordTokenizer::default().into();
        assert_eq!(
            words.try_decode(&[Token::Id(0x61)]),
            Err(TKError::Decode(DecodeError::TokenKindMismatch {
                index: 0,
                expected: "segment",
            }))
        );
    }

    #[test]
    fn test_inner_errors_pass_through() {
        let chars: AnyTokenizer = CharacterTokenizer::<u32>::new().into();
        assert!(chars.try_decode(&[Token::Id(0xD800)]).unwrap_err().is_decode_error());

        let bytes: AnyTokenizer = ByteTokenizer::<u32>::new().into();
        assert!(
            bytes
                .try_decode(&[Token::Id(0xC0), Token::Id(0x41)])
                .unwrap_err()
                .is_decode_error()
        );

        assert_eq!(bytes.compression_ratio("", &[]), Err(TKError::DivideByZero));
    }
}
