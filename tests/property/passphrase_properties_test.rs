//! Property-based tests for the passphrase engine.

use passforge::services::passphrase_engine::{PassphraseEngine, PassphraseEngineTrait};
use passforge::services::random_source::SystemRandomSource;
use passforge::services::word_lists;
use passforge::types::passphrase::{NumberPlacement, PassphrasePolicy, Separator, WordListId};
use proptest::prelude::*;

fn arb_list() -> impl Strategy<Value = WordListId> {
    prop_oneof![
        Just(WordListId::Common),
        Just(WordListId::Memorable),
        Just(WordListId::Technical),
    ]
}

/// Checks `^[A-Z][a-z]+$`.
fn is_capitalized_word(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && word.len() > 1
        && chars.all(|c| c.is_ascii_lowercase())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Default settings produce `Word-Word-Word-Word-N` with N in 0..1000.
    #[test]
    fn default_passphrase_shape(_seed in any::<u8>()) {
        let engine = PassphraseEngine::new(SystemRandomSource::shared());
        let secret = engine.generate(&PassphrasePolicy::default()).unwrap();
        let parts: Vec<&str> = secret.as_str().split('-').collect();

        prop_assert_eq!(parts.len(), 5);
        for word in &parts[..4] {
            prop_assert!(is_capitalized_word(word), "bad word {:?}", word);
        }
        let number = parts[4];
        prop_assert!((1..=3).contains(&number.len()));
        prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn words_come_from_list_and_count_matches(
        word_count in 2usize..=8,
        list in arb_list(),
    ) {
        let engine = PassphraseEngine::new(SystemRandomSource::shared());
        let policy = PassphrasePolicy {
            word_count,
            list,
            separator: Separator::Period,
            capitalize: false,
            number_placement: NumberPlacement::None,
        };
        let secret = engine.generate(&policy).unwrap();
        let words: Vec<&str> = secret.as_str().split('.').collect();

        prop_assert_eq!(words.len(), word_count);
        for word in words {
            prop_assert!(word_lists::words(list).contains(&word));
        }
    }

    #[test]
    fn between_placement_adds_one_digit_per_gap(word_count in 2usize..=8) {
        let engine = PassphraseEngine::new(SystemRandomSource::shared());
        let policy = PassphrasePolicy {
            word_count,
            number_placement: NumberPlacement::Between,
            ..PassphrasePolicy::default()
        };
        let secret = engine.generate(&policy).unwrap();
        let digits = secret.as_str().chars().filter(|c| c.is_ascii_digit()).count();
        prop_assert_eq!(digits, word_count - 1);
    }
}
