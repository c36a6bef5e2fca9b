//! Check command
//!
//! Decodes a token with the diagnostic decoder and reports the specific
//! failure stage. This is the tooling consumer of the internal decode
//! taxonomy; end users of `view` only ever see the generic message.

use crate::error::{ChipInError, ChipInResult, DecodeError};
use crate::token;

/// Handle the check command
pub fn handle_check_command(target: &str) -> ChipInResult<()> {
    let fragment = match target.split_once('#') {
        Some((_, fragment)) => fragment,
        None => target,
    };

    match token::decode_diagnostic(fragment) {
        Ok(envelope) => {
            println!("OK");
            println!("  Version:      {}", envelope.v);
            println!("  Language:     {}", envelope.lang);
            println!("  Participants: {}", envelope.receipt.participants.len());
            println!("  Final total:  {}", envelope.receipt.final_total);
            Ok(())
        }
        Err(error) => {
            println!("FAILED at stage '{}'", stage(&error));
            println!("  {}", error);
            Err(ChipInError::InvalidReceipt)
        }
    }
}

fn stage(error: &DecodeError) -> &'static str {
    match error {
        DecodeError::MissingData => "missing-data",
        DecodeError::Corrupted(_) => "corrupted-data",
        DecodeError::UnsupportedVersion(_) => "unsupported-version",
        DecodeError::MissingFields(_) => "missing-fields",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(stage(&DecodeError::MissingData), "missing-data");
        assert_eq!(stage(&DecodeError::Corrupted("x".into())), "corrupted-data");
        assert_eq!(
            stage(&DecodeError::UnsupportedVersion(2)),
            "unsupported-version"
        );
        assert_eq!(
            stage(&DecodeError::MissingFields("receipt.participants")),
            "missing-fields"
        );
    }
}
