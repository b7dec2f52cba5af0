use serde::Serialize;

use super::common::{StatusBadge, StatusLevel};

/// A transient message shown to the user after a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: StatusLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            message: message.into(),
        }
    }

    pub fn badge(&self) -> StatusBadge {
        StatusBadge::new(self.level, self.message.clone())
    }
}
