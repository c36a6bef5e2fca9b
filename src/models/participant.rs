//! Participant models
//!
//! A participant exists in two shapes: the raw form input (`ParticipantDraft`,
//! amount still text) and the computed share produced by the split calculator
//! (`ParticipantShare`). Both carry an explicit extension map so unrecognized
//! fields survive a round trip through the token unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A participant as entered in the form, before calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDraft {
    /// Display name
    pub name: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// Base amount as entered (parsed during validation/calculation)
    #[serde(default)]
    pub base: String,

    /// Forward-compatible extension fields, carried through unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ParticipantDraft {
    /// Create a draft participant
    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: None,
            base: base.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Create a draft participant with a description
    pub fn with_desc(
        name: impl Into<String>,
        desc: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            desc: Some(desc.into()),
            base: base.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Parse the base amount, coercing anything unparseable to zero
    pub fn base_amount(&self) -> f64 {
        match self.base.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => n,
            _ => 0.0,
        }
    }
}

/// A participant with computed tax, tip and total shares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantShare {
    /// Display name
    pub name: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// Base contribution before tax and tip
    #[serde(default)]
    pub base: f64,

    /// This participant's portion of the tax
    #[serde(default)]
    pub tax_share: f64,

    /// This participant's portion of the tip
    #[serde(default)]
    pub tip_share: f64,

    /// Total owed: base + tax share + tip share
    #[serde(default)]
    pub final_owed: f64,

    /// Proportional weight of the base sum, in [0, 1]
    #[serde(default)]
    pub share_ratio: f64,

    /// Forward-compatible extension fields, carried through unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_amount_parses() {
        assert_eq!(ParticipantDraft::new("Alice", "12.50").base_amount(), 12.5);
        assert_eq!(ParticipantDraft::new("Alice", " 7 ").base_amount(), 7.0);
    }

    #[test]
    fn test_base_amount_coerces_garbage_to_zero() {
        assert_eq!(ParticipantDraft::new("Alice", "").base_amount(), 0.0);
        assert_eq!(ParticipantDraft::new("Alice", "abc").base_amount(), 0.0);
        assert_eq!(ParticipantDraft::new("Alice", "NaN").base_amount(), 0.0);
        assert_eq!(ParticipantDraft::new("Alice", "inf").base_amount(), 0.0);
    }

    #[test]
    fn test_share_wire_names() {
        let share = ParticipantShare {
            name: "Alice".into(),
            desc: None,
            base: 50.0,
            tax_share: 5.0,
            tip_share: 10.0,
            final_owed: 65.0,
            share_ratio: 0.5,
            extra: BTreeMap::new(),
        };
        let json = serde_json::to_value(&share).unwrap();
        assert_eq!(json["taxShare"], 5.0);
        assert_eq!(json["tipShare"], 10.0);
        assert_eq!(json["finalOwed"], 65.0);
        assert_eq!(json["shareRatio"], 0.5);
        assert!(json.get("desc").is_none());
    }

    #[test]
    fn test_extra_fields_survive_round_trip() {
        let json = serde_json::json!({
            "name": "Alice",
            "base": 50.0,
            "taxShare": 5.0,
            "tipShare": 10.0,
            "finalOwed": 65.0,
            "shareRatio": 0.5,
            "avatar": "alice.png"
        });
        let share: ParticipantShare = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(share.extra["avatar"], "alice.png");
        assert_eq!(serde_json::to_value(&share).unwrap(), json);
    }
}
