//! # Byte Tokenizer

use core::marker::PhantomData;

use crate::{
    config::TokenizerKind,
    errors::{DecodeError, TKResult},
    tokenizers::Tokenizer,
    types::{ByteOffset, TokenType},
};

/// Represents text as its sequence of UTF-8 bytes.
///
/// Every string is representable, at the cost of one token per byte;
/// a 4-byte code point becomes 4 tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteTokenizer<T: TokenType = u32> {
    marker: PhantomData<T>,
}

impl<T: TokenType> ByteTokenizer<T> {
    /// Create a new byte tokenizer.
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    /// Collect tokens into a byte buffer.
    ///
    /// This does not check that the bytes are valid UTF-8.
    ///
    /// ## Returns
    /// The bytes, or [`DecodeError::ByteOutOfRange`] for the first token above 255.
    pub fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> Result<Vec<u8>, DecodeError> {
        tokens
            .iter()
            .enumerate()
            .map(|(offset, &token)| {
                token.to_u8().ok_or_else(|| DecodeError::ByteOutOfRange {
                    offset: ByteOffset(offset),
                    value: token.to_u128().unwrap_or(u128::MAX),
                })
            })
            .collect()
    }

    /// Decode tokens, replacing invalid sequences with `U+FFFD`.
    ///
    /// Each token above 255 decodes as one `U+FFFD`.
    pub fn decode_lossy(
        &self,
        tokens: &[T],
    ) -> String {
        // 0xFF never occurs in UTF-8, so each one is replaced on its own.
        let bytes: Vec<u8> = tokens
            .iter()
            .map(|&token| token.to_u8().unwrap_or(0xFF))
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl<T: TokenType> Tokenizer for ByteTokenizer<T> {
    type Token = T;

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Byte
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text, tokens))
    )]
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        tokens.extend(text.bytes().map(<T as From<u8>>::from));
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, tokens))
    )]
    fn try_decode(
        &self,
        tokens: &[T],
    ) -> TKResult<String> {
        let bytes = self.try_decode_to_bytes(tokens)?;
        let text = String::from_utf8(bytes).map_err(|err| DecodeError::from(err.utf8_error()))?;
        log::trace!("decoded {} bytes", tokens.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CharacterTokenizer, TKError, testing::common_tokenizer_tests};

    fn test_tokenizer<T: TokenType>() {
        let tokenizer = ByteTokenizer::<T>::new();
        common_tokenizer_tests(&tokenizer);
    }

    #[test]
    fn test_tokenizer_u8() {
        test_tokenizer::<u8>();
    }

    #[test]
    fn test_tokenizer_u16() {
        test_tokenizer::<u16>();
    }

    #[test]
    fn test_tokenizer_u32() {
        test_tokenizer::<u32>();
    }

    #[test]
    fn test_encode() {
        let tokenizer = ByteTokenizer::<u32>::new();

        assert_eq!(tokenizer.encode(""), Vec::<u32>::new());
        assert_eq!(tokenizer.encode("abc"), vec![0x61, 0x62, 0x63]);
        assert_eq!(tokenizer.encode("é"), vec![0xC3, 0xA9]);
        assert_eq!(tokenizer.encode("🌍"), vec![0xF0, 0x9F, 0x8C, 0x8D]);
    }

    #[test]
    fn test_scenario() {
        let tokenizer = ByteTokenizer::<u32>::new();
        let chars = CharacterTokenizer::<u32>::new();
        let text = "Hello, 🌍! 你好!";

        let tokens = tokenizer.encode(text);
        assert_eq!(tokens.len(), text.len());
        assert_eq!(tokens.len(), 20);
        assert_eq!(&tokens[7..11], &[0xF0, 0x9F, 0x8C, 0x8D]);
        assert!(tokens.len() > chars.encode(text).len());

        assert_eq!(tokenizer.try_decode(&tokens).unwrap(), text);
        assert_eq!(tokenizer.compression_ratio(text, &tokens), Ok(1.0));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let tokenizer = ByteTokenizer::<u32>::new();

        // Overlong lead byte.
        assert_eq!(
            tokenizer.try_decode(&[0xC0, 0x41]),
            Err(TKError::Decode(DecodeError::InvalidUtf8 {
                valid_up_to: ByteOffset(0),
                error_len: Some(1),
            }))
        );

        // Stray continuation byte.
        assert_eq!(
            tokenizer.try_decode(&[0x61, 0x80]),
            Err(TKError::Decode(DecodeError::InvalidUtf8 {
                valid_up_to: ByteOffset(1),
                error_len: Some(1),
            }))
        );

        // Truncated: a byte subsequence that cuts into a code point.
        let tokens = tokenizer.encode("a🌍");
        assert_eq!(
            tokenizer.try_decode(&tokens[..3]),
            Err(TKError::Decode(DecodeError::InvalidUtf8 {
                valid_up_to: ByteOffset(1),
                error_len: None,
            }))
        );
        assert!(tokenizer.try_decode(&tokens[2..]).is_err());
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        let tokenizer = ByteTokenizer::<u32>::new();
        assert_eq!(
            tokenizer.try_decode(&[0x61, 0x100]),
            Err(TKError::Decode(DecodeError::ByteOutOfRange {
                offset: ByteOffset(1),
                value: 0x100,
            }))
        );
    }

    #[test]
    fn test_decode_lossy() {
        let tokenizer = ByteTokenizer::<u32>::new();
        assert_eq!(tokenizer.decode_lossy(&[0x61, 0xC0, 0x41]), "a\u{FFFD}A");
        assert_eq!(tokenizer.decode_lossy(&[0x61, 0x100, 0x62]), "a\u{FFFD}b");
        assert_eq!(tokenizer.decode_lossy(&[0x61, 0x100, 0x101]), "a\u{FFFD}\u{FFFD}");
    }
}
