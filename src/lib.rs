//! Passforge: password and passphrase generation, strength estimation, and a
//! capped local history of generated secrets.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
