#![allow(missing_docs)]

use proptest::{prelude::*, test_runner::Config};
use tokkit::{
    ByteTokenizer,
    CharacterTokenizer,
    Tokenizer,
    TokenizerConfig,
    TokenizerKind,
    WordTokenizer,
    regex::patterns::PatternPreset,
};

/// Text biased towards the characters tokenizers disagree on.
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,8}",
            "[0-9]{1,4}",
            "[ \t\r\n]{1,3}",
            "'(s|t|ll|ve|re|d|m)",
            "[,.!?;:-]",
            Just("e\u{301}".to_string()),
            Just("🌍".to_string()),
            Just("你好".to_string()),
            Just("👨\u{200d}👩\u{200d}👧".to_string()),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn character_round_trip(text in any::<String>()) {
        let tokenizer = CharacterTokenizer::<u32>::new();
        let tokens = tokenizer.encode(&text);
        prop_assert_eq!(tokens.len(), text.chars().count());
        prop_assert_eq!(tokenizer.try_decode(&tokens).unwrap(), text);
    }

    #[test]
    fn byte_round_trip(text in any::<String>()) {
        let tokenizer = ByteTokenizer::<u32>::new();
        let tokens = tokenizer.encode(&text);
        prop_assert_eq!(tokens.len(), text.len());
        prop_assert_eq!(tokenizer.try_decode(&tokens).unwrap(), text);
    }

    #[test]
    fn word_round_trip(text in any::<String>()) {
        for preset in [PatternPreset::Simple, PatternPreset::Gpt2] {
            let tokenizer = WordTokenizer::from_preset(preset);
            let segments = tokenizer.encode(&text);
            prop_assert!(segments.iter().all(|segment| !segment.is_empty()));
            prop_assert!(WordTokenizer::verify_segments(&text, segments.as_slice()).is_ok());
            prop_assert_eq!(tokenizer.try_decode(&segments).unwrap(), text.clone());
        }
    }

    #[test]
    fn any_round_trip(text in mixed_text()) {
        for kind in [TokenizerKind::Character, TokenizerKind::Byte, TokenizerKind::Word] {
            let tokenizer = TokenizerConfig::from_kind(kind).build().unwrap();
            let tokens = tokenizer.encode(&text);
            prop_assert_eq!(tokenizer.try_decode(&tokens).unwrap(), text.clone());
        }
    }

    #[test]
    fn token_counts_are_ordered(text in mixed_text()) {
        let chars = CharacterTokenizer::<u32>::new().encode(&text).len();
        let bytes = ByteTokenizer::<u32>::new().encode(&text).len();
        let words = WordTokenizer::default().encode(&text).len();

        prop_assert!(words <= chars);
        prop_assert!(chars <= bytes);

        if !text.is_empty() {
            let byte_ratio = ByteTokenizer::<u32>::new()
                .compression_ratio(&text, &ByteTokenizer::<u32>::new().encode(&text))
                .unwrap();
            prop_assert_eq!(byte_ratio, 1.0);
        }
    }
}
