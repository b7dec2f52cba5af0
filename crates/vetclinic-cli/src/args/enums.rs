use clap::ValueEnum;
use std::fmt;

use crate::presentation::formatters::DateLocale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[value(name = "ru-RU")]
    RuRu,
    #[value(name = "en-US")]
    EnUs,
    #[value(name = "en-GB")]
    EnGb,
    #[value(name = "iso")]
    Iso,
}

impl From<Locale> for DateLocale {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::RuRu => DateLocale::RuRu,
            Locale::EnUs => DateLocale::EnUs,
            Locale::EnGb => DateLocale::EnGb,
            Locale::Iso => DateLocale::Iso,
        }
    }
}
