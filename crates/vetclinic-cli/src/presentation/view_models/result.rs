use serde::Serialize;

use super::common::{Guidance, StatusBadge, StatusLevel};

/// Outcome of a one-shot command that is not a painted section
/// (`status`, `config show`, `config init`).
///
/// JSON shape: `{"badge"?, "content", "suggestions"?}`.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }

    /// True when the headline reports a failure; the command then exits
    /// non-zero after printing.
    pub fn is_failure(&self) -> bool {
        self.badge
            .as_ref()
            .is_some_and(|badge| badge.level == StatusLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_follows_badge_level() {
        let plain = CommandResultViewModel::new(1);
        assert!(!plain.is_failure());

        let warned = CommandResultViewModel::new(1).with_badge(StatusBadge::warning("db down"));
        assert!(!warned.is_failure());

        let failed = CommandResultViewModel::new(1).with_badge(StatusBadge::error("unreachable"));
        assert!(failed.is_failure());
    }

    #[test]
    fn test_empty_parts_are_omitted_from_json() {
        let json = serde_json::to_value(CommandResultViewModel::new("x")).unwrap();
        assert_eq!(json, serde_json::json!({"content": "x"}));
    }
}
