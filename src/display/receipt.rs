//! Receipt display formatting
//!
//! Formats a computed receipt for terminal display: header, summary amounts
//! and a per-participant breakdown, localized through the catalog.

use chrono::NaiveDate;

use crate::i18n::{format_currency, Catalog, MessageKey};
use crate::models::Receipt;

/// Format a computed receipt for display
///
/// `date` is the viewing date shown in the header, injected by the caller so
/// rendering stays deterministic and testable.
pub fn format_receipt(receipt: &Receipt, date: NaiveDate, catalog: &Catalog) -> String {
    let lang = catalog.lang();
    let money = |amount: f64| format_currency(amount, &receipt.currency, lang);

    let title = if receipt.title.is_empty() {
        catalog.t(MessageKey::ReceiptTitleText)
    } else {
        &receipt.title
    };
    let paid_by = if receipt.paid_by.is_empty() {
        "-"
    } else {
        &receipt.paid_by
    };

    let mut output = String::new();

    output.push_str(&format!("{}\n", title));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{}: {}\n",
        catalog.t(MessageKey::ReceiptPaidBy),
        paid_by
    ));
    output.push_str(&format!(
        "{}: {}\n",
        catalog.t(MessageKey::ReceiptDate),
        crate::i18n::format_date(date, lang)
    ));
    output.push_str(&format!(
        "{}: {}\n\n",
        catalog.t(MessageKey::ReceiptCurrency),
        receipt.currency
    ));

    output.push_str(&format!(
        "{:24} {}\n",
        catalog.t(MessageKey::BaseAmount),
        money(receipt.base_sum)
    ));
    output.push_str(&format!(
        "{:24} {}\n",
        catalog.t(MessageKey::TaxAmount),
        money(receipt.tax_value)
    ));
    output.push_str(&format!(
        "{:24} {}\n",
        catalog.t(MessageKey::TipAmount),
        money(receipt.tip_value)
    ));
    output.push_str(&format!(
        "{:24} {}\n",
        catalog.t(MessageKey::FinalTotal),
        money(receipt.final_total)
    ));

    output.push_str(&format!("\n{}\n", catalog.t(MessageKey::Participants)));
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for participant in &receipt.participants {
        output.push_str(&format!(
            "{:24} {}\n",
            participant.name,
            money(participant.final_owed)
        ));
        if let Some(desc) = &participant.desc {
            if !desc.is_empty() {
                output.push_str(&format!("  {}\n", desc));
            }
        }
        output.push_str(&format!(
            "  {}: {}  {}: {}  {}: {}\n",
            catalog.t(MessageKey::BaseAmount),
            money(participant.base),
            catalog.t(MessageKey::TaxAmount),
            money(participant.tax_share),
            catalog.t(MessageKey::TipAmount),
            money(participant.tip_share)
        ));
    }

    if let Some(note) = &receipt.note {
        if !note.is_empty() {
            output.push_str(&format!("\n{}: {}\n", catalog.t(MessageKey::Note), note));
        }
    }

    output
}
