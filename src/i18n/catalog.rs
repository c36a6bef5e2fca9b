//! Language catalog
//!
//! Supported languages, their text direction, and the translation strings
//! used by the validator, the CLI and the receipt renderer.

use std::fmt;

/// Text direction of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    /// Left to right
    Ltr,
    /// Right to left
    Rtl,
}

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    /// English (default)
    #[default]
    En,
    /// Persian
    Fa,
    /// German
    De,
}

impl Lang {
    /// Parse a language tag, falling back to English for unknown tags
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "fa" => Self::Fa,
            "de" => Self::De,
            _ => Self::En,
        }
    }

    /// The BCP-47-like tag written into envelopes
    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fa => "fa",
            Self::De => "de",
        }
    }

    /// Text direction
    pub fn dir(&self) -> Dir {
        match self {
            Self::Fa => Dir::Rtl,
            _ => Dir::Ltr,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Keys into the translation catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    ParticipantName,
    ParticipantDesc,
    TaxPercent,
    TipValue,
    ValidationParticipantsRequired,
    ValidationParticipantNameRequired,
    ValidationInvalidNumber,
    ErrorInvalidHash,
    ReceiptTitleText,
    ReceiptPaidBy,
    ReceiptDate,
    ReceiptCurrency,
    BaseAmount,
    TaxAmount,
    TipAmount,
    FinalTotal,
    Participants,
    Note,
    TheyOwe,
}

/// Translation lookup for one language
///
/// Passed explicitly into every call that produces user-facing text.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    lang: Lang,
}

impl Catalog {
    /// Create a catalog for the given language
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// The language this catalog translates into
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Look up a translation string
    pub fn t(&self, key: MessageKey) -> &'static str {
        match self.lang {
            Lang::En => en(key),
            Lang::Fa => fa(key),
            Lang::De => de(key),
        }
    }
}

fn en(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        ParticipantName => "Name",
        ParticipantDesc => "Description",
        TaxPercent => "Tax (%)",
        TipValue => "Tip",
        ValidationParticipantsRequired => "Please add at least one participant",
        ValidationParticipantNameRequired => "Participant name is required",
        ValidationInvalidNumber => "Please enter a valid number",
        ErrorInvalidHash => "Invalid or corrupted receipt link",
        ReceiptTitleText => "Receipt",
        ReceiptPaidBy => "Paid by",
        ReceiptDate => "Date",
        ReceiptCurrency => "Currency",
        BaseAmount => "Base Amount",
        TaxAmount => "Tax Amount",
        TipAmount => "Tip Amount",
        FinalTotal => "Final Total",
        Participants => "Participants",
        Note => "Note",
        TheyOwe => "They owe",
    }
}

fn fa(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        ParticipantName => "نام",
        ParticipantDesc => "توضیحات",
        TaxPercent => "مالیات (%)",
        TipValue => "انعام",
        ValidationParticipantsRequired => "لطفاً حداقل یک شرکت‌کننده اضافه کنید",
        ValidationParticipantNameRequired => "نام شرکت‌کننده ضروری است",
        ValidationInvalidNumber => "لطفاً عدد معتبر وارد کنید",
        ErrorInvalidHash => "لینک رسید نامعتبر یا خراب است",
        ReceiptTitleText => "رسید",
        ReceiptPaidBy => "پرداخت شده توسط",
        ReceiptDate => "تاریخ",
        ReceiptCurrency => "واحد پول",
        BaseAmount => "مبلغ پایه",
        TaxAmount => "مبلغ مالیات",
        TipAmount => "مبلغ انعام",
        FinalTotal => "مجموع نهایی",
        Participants => "شرکت‌کنندگان",
        Note => "یادداشت",
        TheyOwe => "آنها بدهکارند",
    }
}

fn de(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        ParticipantName => "Name",
        ParticipantDesc => "Beschreibung",
        TaxPercent => "Steuer (%)",
        TipValue => "Trinkgeld",
        ValidationParticipantsRequired => "Bitte fügen Sie mindestens einen Teilnehmer hinzu",
        ValidationParticipantNameRequired => "Teilnehmername ist erforderlich",
        ValidationInvalidNumber => "Bitte geben Sie eine gültige Zahl ein",
        ErrorInvalidHash => "Ungültiger oder beschädigter Quittungslink",
        ReceiptTitleText => "Quittung",
        ReceiptPaidBy => "Bezahlt von",
        ReceiptDate => "Datum",
        ReceiptCurrency => "Währung",
        BaseAmount => "Grundbetrag",
        TaxAmount => "Steuerbetrag",
        TipAmount => "Trinkgeldbetrag",
        FinalTotal => "Endsumme",
        Participants => "Teilnehmer",
        Note => "Notiz",
        TheyOwe => "Sie schulden",
    }
}
