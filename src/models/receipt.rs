//! Receipt models
//!
//! `ReceiptDraft` is the raw form state as the user entered it (numeric
//! fields still text). `Receipt` is the fully reconciled result of the split
//! calculator: totals derived once on the create path, then embedded in an
//! envelope and only ever read back.

use serde::{Deserialize, Serialize};

use super::participant::{ParticipantDraft, ParticipantShare};

/// A receipt as entered in the form, before calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDraft {
    /// Receipt title, e.g. "Dinner at Restaurant"
    #[serde(default)]
    pub title: String,

    /// Who paid the bill up front
    #[serde(default)]
    pub paid_by: String,

    /// Currency code (opaque, ISO-4217-like)
    #[serde(default)]
    pub currency: String,

    /// Tax percentage as entered
    #[serde(default)]
    pub tax_percent: String,

    /// Tip amount as entered (absolute, not a percentage)
    #[serde(default)]
    pub tip_value: String,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Participants in insertion order
    #[serde(default)]
    pub participants: Vec<ParticipantDraft>,
}

impl ReceiptDraft {
    /// Parse the tax percentage, coercing anything unparseable to zero
    pub fn tax_percent_amount(&self) -> f64 {
        parse_or_zero(&self.tax_percent)
    }

    /// Parse the tip value, coercing anything unparseable to zero
    pub fn tip_value_amount(&self) -> f64 {
        parse_or_zero(&self.tip_value)
    }
}

fn parse_or_zero(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// A fully reconciled receipt with derived totals and per-participant shares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Receipt title
    #[serde(default)]
    pub title: String,

    /// Who paid the bill up front
    #[serde(default)]
    pub paid_by: String,

    /// Currency code (opaque)
    #[serde(default)]
    pub currency: String,

    /// Tax percentage applied to the base sum
    #[serde(default)]
    pub tax_percent: f64,

    /// Absolute tip amount
    #[serde(default)]
    pub tip_value: f64,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Sum of all participant base amounts
    #[serde(default)]
    pub base_sum: f64,

    /// base_sum * tax_percent / 100
    #[serde(default)]
    pub tax_value: f64,

    /// base_sum + tax_value + tip_value
    #[serde(default)]
    pub final_total: f64,

    /// Participants with computed shares, in insertion order
    pub participants: Vec<ParticipantShare>,
}

impl Receipt {
    /// Return the wire name of the first non-finite numeric field, if any
    ///
    /// serde_json writes non-finite floats as `null`, which would corrupt the
    /// token silently; the serializer uses this check to fail loudly instead.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        let scalars = [
            (self.tax_percent, "taxPercent"),
            (self.tip_value, "tipValue"),
            (self.base_sum, "baseSum"),
            (self.tax_value, "taxValue"),
            (self.final_total, "finalTotal"),
        ];
        for (value, name) in scalars {
            if !value.is_finite() {
                return Some(name);
            }
        }
        for p in &self.participants {
            let shares = [
                (p.base, "participants.base"),
                (p.tax_share, "participants.taxShare"),
                (p.tip_share, "participants.tipShare"),
                (p.final_owed, "participants.finalOwed"),
                (p.share_ratio, "participants.shareRatio"),
            ];
            for (value, name) in shares {
                if !value.is_finite() {
                    return Some(name);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computed_receipt() -> Receipt {
        Receipt {
            title: "Dinner".into(),
            paid_by: "John".into(),
            currency: "USD".into(),
            tax_percent: 10.0,
            tip_value: 20.0,
            note: None,
            base_sum: 100.0,
            tax_value: 10.0,
            final_total: 130.0,
            participants: vec![],
        }
    }

    #[test]
    fn test_draft_numeric_coercion() {
        let draft = ReceiptDraft {
            tax_percent: "10".into(),
            tip_value: "oops".into(),
            ..Default::default()
        };
        assert_eq!(draft.tax_percent_amount(), 10.0);
        assert_eq!(draft.tip_value_amount(), 0.0);
    }

    #[test]
    fn test_receipt_wire_names() {
        let json = serde_json::to_value(computed_receipt()).unwrap();
        assert_eq!(json["paidBy"], "John");
        assert_eq!(json["taxPercent"], 10.0);
        assert_eq!(json["baseSum"], 100.0);
        assert_eq!(json["finalTotal"], 130.0);
        assert!(json.get("note").is_none());
    }

    #[test]
    fn test_non_finite_field_detection() {
        let mut receipt = computed_receipt();
        assert_eq!(receipt.non_finite_field(), None);

        receipt.final_total = f64::NAN;
        assert_eq!(receipt.non_finite_field(), Some("finalTotal"));

        receipt.final_total = 130.0;
        receipt.tip_value = f64::INFINITY;
        assert_eq!(receipt.non_finite_field(), Some("tipValue"));
    }
}
