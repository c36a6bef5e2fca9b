//! chipin - Stateless expense splitting with shareable URL tokens
//!
//! This library lets a user describe a shared expense (participants, tax,
//! tip) and produce a self-contained, shareable reference to the computed
//! result. There is no server and no persisted storage: the entire
//! application state travels inside a URL fragment token.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `codec`: URL-safe base64 transcoder (the wire alphabet)
//! - `token`: versioned envelope serializer, token <-> envelope
//! - `models`: participant, receipt and envelope data structures
//! - `services`: input validation and the split calculation
//! - `i18n`: explicit message catalog and locale-aware formatting
//! - `display`: terminal rendering of decoded receipts
//! - `error`: custom error types
//! - `cli`: command handlers for the `chipin` binary
//!
//! # Flow
//!
//! Create path: draft -> [`services::validate`] -> [`services::calculate`]
//! -> [`token::encode`] -> token embedded in a URL fragment. View path:
//! token -> [`token::decode`] -> the stored envelope, rendered as-is (the
//! create path already ran the calculator; viewing never recomputes).
//!
//! # Example
//!
//! ```rust
//! use chipin::models::{Envelope, ParticipantDraft, ReceiptDraft};
//! use chipin::services::calculate;
//! use chipin::token;
//!
//! let draft = ReceiptDraft {
//!     tax_percent: "10".into(),
//!     tip_value: "20".into(),
//!     participants: vec![
//!         ParticipantDraft::new("Alice", "50"),
//!         ParticipantDraft::new("Bob", "50"),
//!     ],
//!     ..Default::default()
//! };
//!
//! let receipt = calculate(&draft);
//! assert_eq!(receipt.final_total, 130.0);
//!
//! let shareable = token::encode(&Envelope::new("en", receipt)).unwrap();
//! let decoded = token::decode(&shareable).unwrap();
//! assert_eq!(decoded.receipt.participants[0].final_owed, 65.0);
//! ```

pub mod cli;
pub mod codec;
pub mod display;
pub mod error;
pub mod i18n;
pub mod models;
pub mod services;
pub mod token;

pub use error::{ChipInError, ChipInResult, DecodeError};
