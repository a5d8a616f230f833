//! Passforge database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! named key/value slots the history ledger is persisted in.
//!
//! # Usage
//!
//! ```no_run
//! use passforge::database::{Database, SlotStorage};
//!
//! let db = Database::open("passforge.db").expect("failed to open database");
//! db.write_slot("example", "[]").expect("write failed");
//! ```

pub mod connection;
pub mod migrations;
pub mod slots;

pub use connection::Database;
pub use slots::SlotStorage;
