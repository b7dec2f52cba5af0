use chrono::{DateTime, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Placeholder for an absent value.
pub const NOT_SPECIFIED: &str = "not specified";

/// Short-date conventions the client can display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateLocale {
    #[default]
    RuRu,
    EnUs,
    EnGb,
    Iso,
}

impl DateLocale {
    pub fn tag(&self) -> &'static str {
        match self {
            DateLocale::RuRu => "ru-RU",
            DateLocale::EnUs => "en-US",
            DateLocale::EnGb => "en-GB",
            DateLocale::Iso => "iso",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            DateLocale::RuRu => "%d.%m.%Y",
            DateLocale::EnUs => "%-m/%-d/%Y",
            DateLocale::EnGb => "%d/%m/%Y",
            DateLocale::Iso => "%Y-%m-%d",
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown locale '{}' (expected ru-RU, en-US, en-GB or iso)",
            self.0
        )
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for DateLocale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "ru-ru" | "ru" => Ok(DateLocale::RuRu),
            "en-us" | "en" => Ok(DateLocale::EnUs),
            "en-gb" => Ok(DateLocale::EnGb),
            "iso" => Ok(DateLocale::Iso),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Parse a calendar date as the service sends it: `YYYY-MM-DD`, an RFC 3339
/// timestamp, or a date followed by a local time.
///
/// A timestamp keeps the calendar date it was written with; no conversion to
/// the local zone happens.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            raw.get(..10)
                .filter(|_| raw[10..].starts_with(['T', ' ']))
                .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        })
}

/// Format an optional raw date in the locale's short form.
///
/// Absent or blank input yields [`NOT_SPECIFIED`]; input that is not a date
/// is shown as given.
pub fn format_date(raw: Option<&str>, locale: DateLocale) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return NOT_SPECIFIED.to_string();
    };

    match parse_date(raw) {
        Some(date) => date.format(locale.pattern()).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_not_specified() {
        assert_eq!(format_date(None, DateLocale::RuRu), "not specified");
        assert_eq!(format_date(Some("  "), DateLocale::Iso), "not specified");
    }

    #[test]
    fn test_locales() {
        let raw = Some("2024-03-05");
        assert_eq!(format_date(raw, DateLocale::RuRu), "05.03.2024");
        assert_eq!(format_date(raw, DateLocale::EnUs), "3/5/2024");
        assert_eq!(format_date(raw, DateLocale::EnGb), "05/03/2024");
        assert_eq!(format_date(raw, DateLocale::Iso), "2024-03-05");
    }

    #[test]
    fn test_timestamp_keeps_written_date() {
        assert_eq!(
            format_date(Some("2024-02-10T23:30:00-05:00"), DateLocale::Iso),
            "2024-02-10"
        );
        assert_eq!(
            format_date(Some("2024-02-10T08:30:00Z"), DateLocale::RuRu),
            "10.02.2024"
        );
        assert_eq!(
            format_date(Some("2024-02-10 08:30:00"), DateLocale::Iso),
            "2024-02-10"
        );
    }

    #[test]
    fn test_unparseable_is_shown_as_given() {
        assert_eq!(format_date(Some("next spring"), DateLocale::RuRu), "next spring");
        assert_eq!(format_date(Some("2024-13-40"), DateLocale::RuRu), "2024-13-40");
        assert_eq!(parse_date("2024-02-10Z"), None);
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("ru-RU".parse::<DateLocale>(), Ok(DateLocale::RuRu));
        assert_eq!("en_gb".parse::<DateLocale>(), Ok(DateLocale::EnGb));
        assert_eq!("ISO".parse::<DateLocale>(), Ok(DateLocale::Iso));
        assert!("fr-FR".parse::<DateLocale>().is_err());
    }
}
