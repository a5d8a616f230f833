// Passforge services
// Services provide core functionality: randomness, generation, strength estimation, templates, exports, settings.

pub mod batch_engine;
pub mod export;
pub mod passphrase_engine;
pub mod password_engine;
pub mod random_source;
pub mod settings_engine;
pub mod strength_estimator;
pub mod templates;
pub mod text_tools;
pub mod word_lists;
