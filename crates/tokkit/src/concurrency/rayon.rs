//! # Rayon Tokenizer Wrapper

use ::rayon::prelude::*;

use crate::{config::TokenizerKind, errors::TKResult, tokenizers::Tokenizer};

/// Batch-Level Parallel Tokenizer Wrapper.
///
/// Single-text calls run on the caller's thread;
/// `encode_batch` and `try_decode_batch` fan out over the ``rayon`` pool.
#[derive(Debug, Clone)]
pub struct ParallelRayonTokenizer<D: Tokenizer> {
    /// Wrapped tokenizer.
    pub inner: D,
}

impl<D: Tokenizer> ParallelRayonTokenizer<D> {
    /// Create a new parallel tokenizer.
    ///
    /// ## Arguments
    /// * `inner` - The tokenizer to wrap.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: Tokenizer> From<D> for ParallelRayonTokenizer<D> {
    fn from(inner: D) -> Self {
        Self::new(inner)
    }
}

impl<D: Tokenizer> Tokenizer for ParallelRayonTokenizer<D> {
    type Token = D::Token;

    fn kind(&self) -> TokenizerKind {
        self.inner.kind()
    }

    fn expected_token_count(
        &self,
        text: &str,
    ) -> usize {
        self.inner.expected_token_count(text)
    }

    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<Self::Token>,
    ) {
        self.inner.encode_append(text, tokens)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, batch), fields(batch_len = batch.len()))
    )]
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<Self::Token>> {
        batch.par_iter().map(|text| self.inner.encode(text)).collect()
    }

    fn try_decode(
        &self,
        tokens: &[Self::Token],
    ) -> TKResult<String> {
        self.inner.try_decode(tokens)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, batch), fields(batch_len = batch.len()))
    )]
    fn try_decode_batch(
        &self,
        batch: &[Vec<Self::Token>],
    ) -> TKResult<Vec<String>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode(tokens))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        ByteTokenizer,
        CharacterTokenizer,
        TKError,
        TokenizerConfig,
        WordTokenizer,
        errors::DecodeError,
        testing::common_tokenizer_tests,
        types::ScalarIndex,
    };

    #[test]
    fn test_wrapped_tokenizers() {
        common_tokenizer_tests(&ParallelRayonTokenizer::new(
            CharacterTokenizer::<u32>::new(),
        ));
        common_tokenizer_tests(&ParallelRayonTokenizer::new(ByteTokenizer::<u8>::new()));
        common_tokenizer_tests(&ParallelRayonTokenizer::new(WordTokenizer::default()));

        for kind in TokenizerKind::iter() {
            let tokenizer: ParallelRayonTokenizer<_> =
                TokenizerConfig::from_kind(kind).build().unwrap().into();
            assert_eq!(tokenizer.kind(), kind);
            common_tokenizer_tests(&tokenizer);
        }
    }

    #[test]
    fn test_batch_matches_serial() {
        let inner = WordTokenizer::default();
        let tokenizer = ParallelRayonTokenizer::new(inner.clone());

        let batch: Vec<String> = (0..64)
            .map(|i| format!("line {i}: it's {} 🌍 ", "word ".repeat(i % 7)))
            .collect();
        let batch: Vec<&str> = batch.iter().map(String::as_str).collect();

        let expected = inner.encode_batch(&batch);
        let tokens = tokenizer.encode_batch(&batch);
        assert_eq!(tokens, expected);

        assert_eq!(tokenizer.try_decode_batch(&tokens).unwrap(), batch);
    }

    #[test]
    fn test_decode_batch_error() {
        let tokenizer = ParallelRayonTokenizer::new(CharacterTokenizer::<u32>::new());

        let batch = vec![vec![0x61, 0x62], vec![0x63, 0xD800], vec![0x64]];
        assert_eq!(
            tokenizer.try_decode_batch(&batch),
            Err(TKError::Decode(DecodeError::InvalidScalarValue {
                index: ScalarIndex(1),
                value: 0xD800,
            }))
        );
    }
}
