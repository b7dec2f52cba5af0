pub mod age;
pub mod date;
pub mod options;

pub use age::{Age, UNKNOWN_AGE, calculate_age};
pub use date::{DateLocale, NOT_SPECIFIED, UnknownLocale, format_date, parse_date};
pub use options::DisplayOptions;
