use std::fmt;

/// Result type for vetclinic-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A form field was not given as `name=value`
    MalformedField(String),
    /// A form field had an empty name
    EmptyFieldName(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedField(raw) => {
                write!(f, "Malformed field '{}': expected name=value", raw)
            }
            Error::EmptyFieldName(raw) => write!(f, "Field '{}' has an empty name", raw),
        }
    }
}

impl std::error::Error for Error {}
