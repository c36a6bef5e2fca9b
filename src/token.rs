//! Envelope serializer
//!
//! Turns a versioned [`Envelope`] into a URL-fragment-safe token and back.
//! Encoding serializes to JSON and passes through the base64url codec.
//! Decoding is a pure deserialization: derived fields embedded on the create
//! path are returned as stored, never recomputed.
//!
//! Decoding validates in a fixed order, first failure wins: token present,
//! valid base64url, valid UTF-8 JSON, non-null object, `v == 1`,
//! `receipt.participants` present and an array. [`decode`] collapses every
//! failure into `ChipInError::InvalidReceipt`; [`decode_diagnostic`] exposes
//! the specific stage for logging and tooling.

use serde_json::Value;

use crate::codec;
use crate::error::{ChipInError, ChipInResult, DecodeError};
use crate::models::{Envelope, SCHEMA_VERSION};

/// Serialize an envelope into a share token
///
/// Fails with `ChipInError::Encode` if any numeric field is non-finite;
/// serde_json would write those as `null` and silently corrupt the link.
pub fn encode(envelope: &Envelope) -> ChipInResult<String> {
    if let Some(field) = envelope.receipt.non_finite_field() {
        return Err(ChipInError::Encode(format!(
            "non-finite value in field '{}'",
            field
        )));
    }
    let json = serde_json::to_string(envelope).map_err(|e| ChipInError::Encode(e.to_string()))?;
    Ok(codec::encode(json.as_bytes()))
}

/// Deserialize a share token into an envelope
///
/// Callers observe exactly one error kind regardless of the internal cause.
pub fn decode(token: &str) -> ChipInResult<Envelope> {
    decode_diagnostic(token).map_err(ChipInError::from)
}

/// Deserialize a share token, reporting the specific failure stage
pub fn decode_diagnostic(token: &str) -> Result<Envelope, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::MissingData);
    }

    let bytes = codec::decode(token)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| DecodeError::Corrupted(format!("payload is not UTF-8: {}", e)))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| DecodeError::Corrupted(format!("payload is not JSON: {}", e)))?;

    if !value.is_object() {
        return Err(DecodeError::Corrupted("payload is not an object".into()));
    }

    // Version gate runs before any v1 structural assumptions
    match value.get("v").and_then(Value::as_u64) {
        Some(SCHEMA_VERSION) => {}
        Some(other) => return Err(DecodeError::UnsupportedVersion(other)),
        // missing or non-integer version field
        None => return Err(DecodeError::UnsupportedVersion(0)),
    }

    let participants = value.get("receipt").and_then(|r| r.get("participants"));
    if !matches!(participants, Some(Value::Array(_))) {
        return Err(DecodeError::MissingFields("receipt.participants"));
    }

    serde_json::from_value(value)
        .map_err(|e| DecodeError::Corrupted(format!("payload shape mismatch: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ParticipantShare, Receipt};
    use std::collections::BTreeMap;

    fn sample_envelope() -> Envelope {
        let participants = vec![
            ParticipantShare {
                name: "Alice".into(),
                desc: Some("starter + main".into()),
                base: 50.0,
                tax_share: 5.0,
                tip_share: 10.0,
                final_owed: 65.0,
                share_ratio: 0.5,
                extra: BTreeMap::new(),
            },
            ParticipantShare {
                name: "Bob".into(),
                desc: None,
                base: 50.0,
                tax_share: 5.0,
                tip_share: 10.0,
                final_owed: 65.0,
                share_ratio: 0.5,
                extra: BTreeMap::new(),
            },
        ];
        let receipt = Receipt {
            title: "Dinner".into(),
            paid_by: "John".into(),
            currency: "USD".into(),
            tax_percent: 10.0,
            tip_value: 20.0,
            note: Some("great evening".into()),
            base_sum: 100.0,
            tax_value: 10.0,
            final_total: 130.0,
            participants,
        };
        Envelope::new("en", receipt)
    }

    #[test]
    fn test_round_trip() {
        let envelope = sample_envelope();
        let token = encode(&envelope).unwrap();
        let decoded = decode(&token).unwrap();
        assert_eq!(decoded, envelope);
        // participant order survives
        assert_eq!(decoded.receipt.participants[0].name, "Alice");
        assert_eq!(decoded.receipt.participants[1].name, "Bob");
    }

    #[test]
    fn test_token_is_url_fragment_safe() {
        let token = encode(&sample_envelope()).unwrap();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(decode_diagnostic(""), Err(DecodeError::MissingData));
        assert!(matches!(decode(""), Err(ChipInError::InvalidReceipt)));
    }

    #[test]
    fn test_tampered_token() {
        let token = encode(&sample_envelope()).unwrap();
        // flip the first character so the `{"v` prefix is guaranteed broken
        let mut chars: Vec<char> = token.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();
        assert!(matches!(
            decode(&tampered),
            Err(ChipInError::InvalidReceipt)
        ));
    }

    #[test]
    fn test_truncated_token() {
        let token = encode(&sample_envelope()).unwrap();
        let truncated = &token[..token.len() / 2];
        assert!(matches!(
            decode(truncated),
            Err(ChipInError::InvalidReceipt)
        ));
    }

    #[test]
    fn test_version_gate() {
        let mut value = serde_json::to_value(sample_envelope()).unwrap();
        value["v"] = serde_json::json!(2);
        let token = codec::encode(value.to_string().as_bytes());
        assert_eq!(
            decode_diagnostic(&token),
            Err(DecodeError::UnsupportedVersion(2))
        );
        assert!(matches!(decode(&token), Err(ChipInError::InvalidReceipt)));
    }

    #[test]
    fn test_missing_version_is_unsupported() {
        let token = codec::encode(br#"{"lang":"en","receipt":{"participants":[]}}"#);
        assert_eq!(
            decode_diagnostic(&token),
            Err(DecodeError::UnsupportedVersion(0))
        );
    }

    #[test]
    fn test_missing_participants() {
        let token = codec::encode(br#"{"v":1,"lang":"en","receipt":{"title":"x"}}"#);
        assert_eq!(
            decode_diagnostic(&token),
            Err(DecodeError::MissingFields("receipt.participants"))
        );

        // present but not an array is also a structural failure
        let token = codec::encode(br#"{"v":1,"lang":"en","receipt":{"participants":"x"}}"#);
        assert_eq!(
            decode_diagnostic(&token),
            Err(DecodeError::MissingFields("receipt.participants"))
        );
    }

    #[test]
    fn test_non_object_payload() {
        for payload in ["42", "\"hello\"", "[1,2]", "null"] {
            let token = codec::encode(payload.as_bytes());
            assert!(matches!(
                decode_diagnostic(&token),
                Err(DecodeError::Corrupted(_))
            ));
        }
    }

    #[test]
    fn test_non_json_payload() {
        let token = codec::encode(b"not json at all");
        assert!(matches!(
            decode_diagnostic(&token),
            Err(DecodeError::Corrupted(_))
        ));
    }

    #[test]
    fn test_encode_rejects_non_finite() {
        let mut envelope = sample_envelope();
        envelope.receipt.final_total = f64::NAN;
        let err = encode(&envelope).unwrap_err();
        assert!(matches!(err, ChipInError::Encode(_)));
        assert!(err.to_string().contains("finalTotal"));
    }

    #[test]
    fn test_decode_does_not_recompute() {
        // A stored finalTotal inconsistent with the shares comes back as
        // stored; decode is deserialization, not recalculation.
        let mut value = serde_json::to_value(sample_envelope()).unwrap();
        value["receipt"]["finalTotal"] = serde_json::json!(999.0);
        let token = codec::encode(value.to_string().as_bytes());
        let decoded = decode(&token).unwrap();
        assert_eq!(decoded.receipt.final_total, 999.0);
    }
}
