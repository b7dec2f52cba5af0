use serde::Serialize;

/// Plain text layout or one JSON document per paint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<crate::args::OutputFormat> for OutputFormat {
    fn from(format: crate::args::OutputFormat) -> Self {
        match format {
            crate::args::OutputFormat::Plain => Self::Text,
            crate::args::OutputFormat::Json => Self::Json,
        }
    }
}

/// Severity shared by result badges and form notices.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn icon(self) -> &'static str {
        match self {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
            StatusLevel::Error => "❌",
        }
    }
}

/// Headline of a one-shot result such as `status` or `config init`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn new(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, label)
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, label)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, label)
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, label)
    }

    pub fn icon(&self) -> &'static str {
        self.level.icon()
    }
}

/// A follow-up shown under the tips heading, optionally with the command
/// that performs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}
