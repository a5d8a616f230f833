// Passforge shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod history;
pub mod passphrase;
pub mod policy;
pub mod secret;
pub mod settings;
pub mod strength;
pub mod template;
