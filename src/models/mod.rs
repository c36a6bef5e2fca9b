//! Core data models for chipin
//!
//! This module contains the structures that travel inside a share token:
//! participants, receipts (raw and computed) and the versioned envelope.

pub mod envelope;
pub mod participant;
pub mod receipt;

pub use envelope::{Envelope, SCHEMA_VERSION};
pub use participant::{ParticipantDraft, ParticipantShare};
pub use receipt::{Receipt, ReceiptDraft};
