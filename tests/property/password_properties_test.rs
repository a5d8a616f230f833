//! Property-based tests for the password engine.
//!
//! For any valid policy, the generated password has exactly the requested
//! length and draws only from the enabled classes.

use passforge::services::password_engine::{PasswordEngine, PasswordEngineTrait};
use passforge::services::random_source::SystemRandomSource;
use passforge::types::policy::{Alphabet, CharClass, CharsetPolicy};
use proptest::prelude::*;

/// Strategy for valid policies: length 4..=64 and at least one class.
fn arb_policy() -> impl Strategy<Value = CharsetPolicy> {
    (4usize..=64, any::<[bool; 4]>())
        .prop_filter("at least one class", |(_, c)| c.iter().any(|b| *b))
        .prop_map(|(length, c)| CharsetPolicy {
            lowercase: c[0],
            uppercase: c[1],
            digits: c[2],
            symbols: c[3],
            length,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn password_has_requested_length_and_alphabet(policy in arb_policy()) {
        let engine = PasswordEngine::new(SystemRandomSource::shared());
        let secret = engine.generate(&policy).expect("valid policy should generate");
        let alphabet = Alphabet::for_policy(&policy).unwrap();

        prop_assert_eq!(secret.length, policy.length);
        prop_assert_eq!(secret.as_str().chars().count(), policy.length);
        for c in secret.as_str().chars() {
            prop_assert!(alphabet.contains(c), "{:?} outside alphabet", c);
            prop_assert!(policy.enabled().any(|class| class == CharClass::of(c)));
        }
    }

    #[test]
    fn invalid_length_is_always_rejected(length in prop_oneof![0usize..4, 65usize..500]) {
        let engine = PasswordEngine::new(SystemRandomSource::shared());
        let policy = CharsetPolicy { length, ..CharsetPolicy::default() };
        prop_assert!(engine.generate(&policy).is_err());
    }
}
