//! Create command
//!
//! Builds a receipt draft from command-line arguments, runs the validation
//! gate, calculates the split and prints the share token. Validation
//! failures print the itemized list and produce no token.

use clap::Args;

use crate::error::{ChipInError, ChipInResult};
use crate::i18n::{Catalog, Lang};
use crate::models::{Envelope, ParticipantDraft, ReceiptDraft};
use crate::services::{calculate, validate};
use crate::token;

/// Arguments for `chipin create`
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Receipt title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Who paid the bill
    #[arg(long = "paid-by", default_value = "")]
    pub paid_by: String,

    /// Currency code (e.g. USD, EUR, GBP, IRR)
    #[arg(short, long, default_value = "USD")]
    pub currency: String,

    /// Tax percentage applied to the base sum
    #[arg(long = "tax", default_value = "0")]
    pub tax_percent: String,

    /// Absolute tip amount
    #[arg(long = "tip", default_value = "0")]
    pub tip_value: String,

    /// Optional note
    #[arg(short, long)]
    pub note: Option<String>,

    /// UI language for messages and for viewers of the link (en, fa, de)
    #[arg(short, long, env = "CHIPIN_LANG", default_value = "en")]
    pub lang: String,

    /// Participant as NAME=AMOUNT[:DESC]; repeat for each person
    #[arg(short, long = "participant", value_name = "NAME=AMOUNT[:DESC]")]
    pub participants: Vec<String>,

    /// Base URL to embed the token in as a fragment
    #[arg(long = "base-url", env = "CHIPIN_BASE_URL")]
    pub base_url: Option<String>,
}

/// Handle the create command
pub fn handle_create_command(args: CreateArgs) -> ChipInResult<()> {
    let lang = Lang::from_tag(&args.lang);
    let catalog = Catalog::new(lang);

    let participants = args
        .participants
        .iter()
        .map(|spec| parse_participant(spec))
        .collect::<ChipInResult<Vec<_>>>()?;

    let draft = ReceiptDraft {
        title: args.title.trim().to_string(),
        paid_by: args.paid_by.trim().to_string(),
        currency: args.currency,
        tax_percent: args.tax_percent,
        tip_value: args.tip_value,
        note: args.note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        participants,
    };

    let errors = validate(&draft, &catalog);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{}", error);
        }
        return Err(ChipInError::Validation(format!(
            "{} problem(s) found",
            errors.len()
        )));
    }

    let receipt = calculate(&draft);
    let envelope = Envelope::new(lang.tag(), receipt);
    let encoded = token::encode(&envelope)?;

    println!("Token: {}", encoded);
    if let Some(base_url) = args.base_url {
        println!("Share URL: {}#{}", base_url, encoded);
    }

    Ok(())
}

/// Parse a NAME=AMOUNT[:DESC] participant spec
fn parse_participant(spec: &str) -> ChipInResult<ParticipantDraft> {
    let (name, rest) = spec.split_once('=').ok_or_else(|| {
        ChipInError::Cli(format!(
            "Invalid participant '{}': expected NAME=AMOUNT[:DESC]",
            spec
        ))
    })?;

    let (amount, desc) = match rest.split_once(':') {
        Some((amount, desc)) => (amount, Some(desc)),
        None => (rest, None),
    };

    let mut participant = ParticipantDraft::new(name.trim(), amount.trim());
    participant.desc = desc.map(|d| d.trim().to_string()).filter(|d| !d.is_empty());
    Ok(participant)
}
