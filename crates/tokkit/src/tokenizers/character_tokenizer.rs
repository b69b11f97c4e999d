//! # Character Tokenizer

use core::marker::PhantomData;

use crate::{
    config::TokenizerKind,
    errors::{DecodeError, TKResult},
    tokenizers::Tokenizer,
    types::{ScalarIndex, ScalarTokenType},
};

/// Represents text as its sequence of Unicode scalar values.
///
/// One token per `char`: combining marks are their own tokens,
/// and characters outside the BMP are a single token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterTokenizer<T: ScalarTokenType = u32> {
    marker: PhantomData<T>,
}

impl<T: ScalarTokenType> CharacterTokenizer<T> {
    /// Create a new character tokenizer.
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    /// Map a single token to its `char`.
    ///
    /// ## Returns
    /// `None` if `token` is above `0x10FFFF` or a surrogate.
    pub fn decode_token(
        &self,
        token: T,
    ) -> Option<char> {
        token.to_u32().and_then(char::from_u32)
    }

    /// Decode tokens, replacing invalid values with `U+FFFD`.
    pub fn decode_lossy(
        &self,
        tokens: &[T],
    ) -> String {
        tokens
            .iter()
            .map(|&token| {
                self.decode_token(token)
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
            })
            .collect()
    }
}

impl<T: ScalarTokenType> Tokenizer for CharacterTokenizer<T> {
    type Token = T;

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Character
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
        tokens.extend(text.chars().map(<T as From<char>>::from));
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, tokens))
    )]
    fn try_decode(
        &self,
        tokens: &[T],
    ) -> TKResult<String> {
        let mut text = String::with_capacity(tokens.len());
        for (index, &token) in tokens.iter().enumerate() {
            let c = self
                .decode_token(token)
                .ok_or_else(|| DecodeError::InvalidScalarValue {
                    index: ScalarIndex(index),
                    value: token.to_u128().unwrap_or(u128::MAX),
                })?;
            text.push(c);
        }
        log::trace!("decoded {} scalar values", tokens.len());
        Ok(text)
    }
}
