//! # Tokenizer Trait

use core::fmt::Debug;

use crate::{
    config::TokenizerKind,
    errors::{TKError, TKResult},
};

/// Compute the compression ratio of a tokenization.
///
/// `ratio = utf8_len(text) / token_count`
///
/// `token_count` is taken as given; pairing a text with the token count
/// of some other text is a caller error.
///
/// ## Returns
/// The ratio, or [`TKError::DivideByZero`] when `token_count` is 0.
pub fn compression_ratio(
    text: &str,
    token_count: usize,
) -> TKResult<f64> {
    if token_count == 0 {
        return Err(TKError::DivideByZero);
    }
    Ok(text.len() as f64 / token_count as f64)
}

/// The shared tokenizer contract.
///
/// Implementations must satisfy `try_decode(&encode(s)) == Ok(s)` for every `s`.
pub trait Tokenizer: Send + Sync {
    /// The element type of the token stream.
    type Token: Clone + Debug + PartialEq + Send + Sync;

    /// The strategy this tokenizer implements.
    fn kind(&self) -> TokenizerKind;

    /// A capacity hint for the token buffer of `text`.
    fn expected_token_count(
        &self,
        text: &str,
    ) -> usize {
        text.len()
    }

    /// Encode text, appending the tokens to the given buffer.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<Self::Token>,
    );

    /// Encode text into tokens.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<Self::Token> {
        let mut tokens = Vec::with_capacity(self.expected_token_count(text));
        self.encode_append(text, &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<Self::Token>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }

    /// Decode tokens into text.
    ///
    /// ## Returns
    /// The text, or a [`TKError::Decode`] if `tokens` does not map to valid text.
    fn try_decode(
        &self,
        tokens: &[Self::Token],
    ) -> TKResult<String>;

    /// Decode a batch of token streams.
    ///
    /// Fails on the first stream that fails.
    fn try_decode_batch(
        &self,
        batch: &[Vec<Self::Token>],
    ) -> TKResult<Vec<String>> {
        batch.iter().map(|tokens| self.try_decode(tokens)).collect()
    }

    /// Compute the compression ratio of `text` tokenized into `tokens`.
    ///
    /// See [`compression_ratio`].
    fn compression_ratio(
        &self,
        text: &str,
        tokens: &[Self::Token],
    ) -> TKResult<f64> {
        compression_ratio(text, tokens.len())
    }
}
