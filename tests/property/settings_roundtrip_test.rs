//! Property-based tests for GeneratorSettings persistence round-trip.
//!
//! Any valid settings written through the SettingsEngine load back unchanged.

use passforge::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use passforge::types::passphrase::{NumberPlacement, PassphrasePolicy, Separator, WordListId};
use passforge::types::policy::CharsetPolicy;
use passforge::types::settings::GeneratorSettings;
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_charset_policy() -> impl Strategy<Value = CharsetPolicy> {
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

fn arb_passphrase_policy() -> impl Strategy<Value = PassphrasePolicy> {
    (
        2usize..=8,
        prop_oneof![
            Just(WordListId::Common),
            Just(WordListId::Memorable),
            Just(WordListId::Technical),
        ],
        prop_oneof![
            Just(Separator::Hyphen),
            Just(Separator::Underscore),
            Just(Separator::Period),
            Just(Separator::Space),
            Just(Separator::None),
        ],
        any::<bool>(),
        prop_oneof![
            Just(NumberPlacement::None),
            Just(NumberPlacement::Prefix),
            Just(NumberPlacement::Suffix),
            Just(NumberPlacement::Between),
        ],
    )
        .prop_map(|(word_count, list, separator, capitalize, number_placement)| {
            PassphrasePolicy { word_count, list, separator, capitalize, number_placement }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn settings_survive_save_and_load(
        password in arb_charset_policy(),
        passphrase in arb_passphrase_policy(),
        enabled in any::<bool>(),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        let mut writer = SettingsEngine::new(Some(path.clone()));
        writer.load().unwrap();
        writer.set_value("password", serde_json::to_value(&password).unwrap()).unwrap();
        writer.set_value("passphrase", serde_json::to_value(&passphrase).unwrap()).unwrap();
        writer.set_value("history.enabled", serde_json::json!(enabled)).unwrap();

        let mut reader = SettingsEngine::new(Some(path));
        let loaded: GeneratorSettings = reader.load().unwrap();

        prop_assert_eq!(&loaded.password, &password);
        prop_assert_eq!(&loaded.passphrase, &passphrase);
        prop_assert_eq!(loaded.history.enabled, enabled);
    }
}
