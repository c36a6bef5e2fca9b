//! Locale-aware formatting
//!
//! Numbers are always rendered with two fraction digits. Currencies with a
//! well-known symbol are rendered in the locale's conventional position;
//! anything else falls back to "amount label" with a localized currency
//! label where one exists (e.g. IRR in Persian).

use chrono::{Datelike, NaiveDate};

use super::catalog::Lang;

/// Format a number with two fraction digits and the locale's decimal separator
pub fn format_number(amount: f64, lang: Lang) -> String {
    let formatted = format!("{:.2}", amount);
    match lang {
        Lang::En => formatted,
        Lang::De => formatted.replace('.', ","),
        Lang::Fa => formatted.replace('.', "٫"),
    }
}

/// Format a monetary amount in the given currency
pub fn format_currency(amount: f64, currency: &str, lang: Lang) -> String {
    let number = format_number(amount, lang);
    match (symbol_for(currency), lang) {
        (Some(symbol), Lang::De) => format!("{} {}", number, symbol),
        (Some(symbol), _) => format!("{}{}", symbol, number),
        (None, _) => format!("{} {}", number, currency_label(currency, lang)),
    }
}

fn symbol_for(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

fn currency_label(currency: &str, lang: Lang) -> &str {
    if lang == Lang::Fa {
        match currency {
            "USD" => return "دلار",
            "EUR" => return "یورو",
            "GBP" => return "پوند",
            "IRR" => return "ریال",
            _ => {}
        }
    }
    currency
}

/// Format a date as numeric day, short month name, numeric year
pub fn format_date(date: NaiveDate, lang: Lang) -> String {
    let month = month_abbrev(date.month(), lang);
    match lang {
        Lang::En => format!("{} {}, {}", month, date.day(), date.year()),
        Lang::De => format!("{}. {} {}", date.day(), month, date.year()),
        Lang::Fa => format!("{} {} {}", date.day(), month, date.year()),
    }
}

fn month_abbrev(month: u32, lang: Lang) -> &'static str {
    const EN: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    const DE: [&str; 12] = [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.",
        "Dez.",
    ];
    const FA: [&str; 12] = [
        "ژانویه",
        "فوریه",
        "مارس",
        "آوریل",
        "مه",
        "ژوئن",
        "ژوئیه",
        "اوت",
        "سپتامبر",
        "اکتبر",
        "نوامبر",
        "دسامبر",
    ];
    let index = (month - 1) as usize;
    match lang {
        Lang::En => EN[index],
        Lang::De => DE[index],
        Lang::Fa => FA[index],
    }
}
