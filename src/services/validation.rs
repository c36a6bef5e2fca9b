//! Input validation
//!
//! Checks a raw receipt draft for completeness and numeric sanity before
//! calculation. Collects every violation into an ordered list of localized,
//! user-correctable messages; an empty list means the draft is valid. Never
//! mutates its input and never fails.

use crate::i18n::{Catalog, MessageKey};
use crate::models::ReceiptDraft;

/// Validate a receipt draft, returning all violations in order
pub fn validate(draft: &ReceiptDraft, catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    if draft.participants.is_empty() {
        errors.push(
            catalog
                .t(MessageKey::ValidationParticipantsRequired)
                .to_string(),
        );
    } else {
        for (index, participant) in draft.participants.iter().enumerate() {
            if participant.name.trim().is_empty() {
                errors.push(format!(
                    "{} {}: {}",
                    catalog.t(MessageKey::ParticipantName),
                    index + 1,
                    catalog.t(MessageKey::ValidationParticipantNameRequired)
                ));
            }
            if !is_valid_amount(&participant.base) {
                errors.push(format!(
                    "{} {}: {}",
                    catalog.t(MessageKey::ParticipantName),
                    index + 1,
                    catalog.t(MessageKey::ValidationInvalidNumber)
                ));
            }
        }
    }

    let numeric_fields = [
        (&draft.tax_percent, MessageKey::TaxPercent),
        (&draft.tip_value, MessageKey::TipValue),
    ];
    for (value, label) in numeric_fields {
        if !is_valid_amount(value) {
            errors.push(format!(
                "{}: {}",
                catalog.t(label),
                catalog.t(MessageKey::ValidationInvalidNumber)
            ));
        }
    }

    errors
}

/// A valid amount parses to a finite, non-negative number
fn is_valid_amount(s: &str) -> bool {
    matches!(s.trim().parse::<f64>(), Ok(n) if n.is_finite() && n >= 0.0)
}
