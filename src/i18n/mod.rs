//! Internationalization
//!
//! Localized message lookup and locale-aware number/currency/date formatting
//! for English, Persian and German. Everything here is an explicit value the
//! caller passes around; there is no process-wide "current language" state,
//! so receipts in different locales can be handled in the same process
//! without ordering hazards.

pub mod catalog;
pub mod format;

pub use catalog::{Catalog, Dir, Lang, MessageKey};
pub use format::{format_currency, format_date, format_number};
