//! Terminal display formatting
//!
//! Renders decoded receipts for the terminal. This is the consumer side of
//! the core: it only reads computed fields, it never recalculates them.

pub mod receipt;

pub use receipt::format_receipt;
