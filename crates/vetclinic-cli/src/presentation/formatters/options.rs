use chrono::NaiveDate;

use super::date::DateLocale;

/// Display formatting options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub locale: DateLocale,
    /// Fixed "today" for age calculation; the local date when unset.
    pub today: Option<NaiveDate>,
}

impl DisplayOptions {
    pub fn new(locale: DateLocale) -> Self {
        Self {
            locale,
            today: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
