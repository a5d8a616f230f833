// Passforge state managers
// Managers own mutable state that outlives a single call: the password history ledger.

pub mod history_store;
