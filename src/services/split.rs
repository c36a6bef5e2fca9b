//! Split calculation
//!
//! Turns a raw receipt draft into a fully reconciled receipt with
//! per-participant shares. Total function: it never fails, coercing absent
//! or unparseable numeric input to zero (the validator run beforehand is the
//! gate against bad input reaching a published link).

use crate::models::{ParticipantShare, Receipt, ReceiptDraft};

/// Compute the reconciled receipt for a draft
///
/// Tax and tip are allocated proportionally to each participant's share of
/// the base sum, preserving participant order and carrying any extension
/// fields forward unchanged.
///
/// When the base sum is zero, every share ratio is zero: nobody is assigned
/// tax or tip, each participant owes exactly their base, yet `final_total`
/// still includes the tip. That asymmetry matches the reference behavior and
/// is kept deliberately.
pub fn calculate(draft: &ReceiptDraft) -> Receipt {
    let tax_percent = draft.tax_percent_amount();
    let tip_value = draft.tip_value_amount();

    let base_sum: f64 = draft.participants.iter().map(|p| p.base_amount()).sum();
    let tax_value = base_sum * (tax_percent / 100.0);
    let final_total = base_sum + tax_value + tip_value;

    let participants = draft
        .participants
        .iter()
        .map(|p| {
            let base = p.base_amount();
            let share_ratio = if base_sum > 0.0 { base / base_sum } else { 0.0 };
            let tax_share = tax_value * share_ratio;
            let tip_share = tip_value * share_ratio;
            ParticipantShare {
                name: p.name.clone(),
                desc: p.desc.clone(),
                base,
                tax_share,
                tip_share,
                final_owed: base + tax_share + tip_share,
                share_ratio,
                extra: p.extra.clone(),
            }
        })
        .collect();

    Receipt {
        title: draft.title.clone(),
        paid_by: draft.paid_by.clone(),
        currency: draft.currency.clone(),
        tax_percent,
        tip_value,
        note: draft.note.clone(),
        base_sum,
        tax_value,
        final_total,
        participants,
    }
}
