//! # Testing Utilities
//!
//! Shared checks for [`Tokenizer`] implementations.
//! Enabled for this crate's tests, and for downstream crates by the `testing` feature.

use crate::{errors::TKError, tokenizers::Tokenizer};

/// Sample texts exercising the edges of Unicode segmentation.
pub const COMMON_SAMPLES: &[&str] = &[
    "",
    "a",
    "The quick brown fox jumps over the lazy dog.",
    "Hello, 🌍! 你好!",
    "e\u{301}te\u{301}",
    "  leading and trailing  \t",
    "line one\nline two\r\n\r\nline four\n",
    "It's what they'll say; we've seen it, I'd guess.",
    "family: 👨\u{200d}👩\u{200d}👧 flags: 🇯🇵",
    "tab\tseparated\tvalues 123 4567",
    "\r\n",
];

/// Check the behavior every [`Tokenizer`] must share.
///
/// For each of [`COMMON_SAMPLES`]:
/// * `try_decode(encode(text)) == text`;
/// * the compression ratio is positive and repeatable for non-empty text;
/// * the compression ratio of empty text is [`TKError::DivideByZero`].
///
/// Then checks that the batch calls agree with the single-text calls.
pub fn common_tokenizer_tests<D: Tokenizer>(tokenizer: &D) {
    for &text in COMMON_SAMPLES {
        let tokens = tokenizer.encode(text);

        assert_eq!(
            tokenizer.try_decode(&tokens),
            Ok(text.to_string()),
            "round trip failed for {text:?} with {:?} tokenizer",
            tokenizer.kind()
        );

        let mut appended = Vec::new();
        tokenizer.encode_append(text, &mut appended);
        assert_eq!(appended, tokens);

        if text.is_empty() {
            assert!(tokens.is_empty());
            assert_eq!(
                tokenizer.compression_ratio(text, &tokens),
                Err(TKError::DivideByZero)
            );
        } else {
            assert!(!tokens.is_empty());
            let ratio = tokenizer.compression_ratio(text, &tokens).unwrap();
            assert!(ratio > 0.0);
            assert_eq!(tokenizer.compression_ratio(text, &tokens), Ok(ratio));
            assert_eq!(tokenizer.encode(text), tokens);
        }
    }

    let batch = tokenizer.encode_batch(COMMON_SAMPLES);
    assert_eq!(batch.len(), COMMON_SAMPLES.len());
    for (tokens, &text) in batch.iter().zip(COMMON_SAMPLES) {
        assert_eq!(tokens, &tokenizer.encode(text));
    }

    let decoded = tokenizer.try_decode_batch(&batch).unwrap();
    assert_eq!(decoded, COMMON_SAMPLES);
}
