//! Versioned envelope
//!
//! The top-level structure embedded in a share token. The `v` field gates
//! decoding: a future v2 schema can coexist because the version is checked
//! before any v1 structural assumptions are made.

use serde::{Deserialize, Serialize};

use super::receipt::Receipt;

/// Schema version this build reads and writes
pub const SCHEMA_VERSION: u64 = 1;

/// The versioned top-level structure embedded in a shareable token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Schema version; only [`SCHEMA_VERSION`] is accepted
    pub v: u64,

    /// Language tag of the UI that created the receipt (BCP-47-like)
    pub lang: String,

    /// The computed receipt
    pub receipt: Receipt,
}

impl Envelope {
    /// Wrap a computed receipt in a current-version envelope
    pub fn new(lang: impl Into<String>, receipt: Receipt) -> Self {
        Self {
            v: SCHEMA_VERSION,
            lang: lang.into(),
            receipt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_current_version() {
        let receipt = Receipt {
            title: String::new(),
            paid_by: String::new(),
            currency: "EUR".into(),
            tax_percent: 0.0,
            tip_value: 0.0,
            note: None,
            base_sum: 0.0,
            tax_value: 0.0,
            final_total: 0.0,
            participants: vec![],
        };
        let envelope = Envelope::new("en", receipt);
        assert_eq!(envelope.v, 1);
        assert_eq!(envelope.lang, "en");
    }
}
