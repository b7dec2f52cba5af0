use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Flat mapping from form field name to the string value the user entered.
///
/// This is exactly what create operations send as their JSON body: an object
/// whose values are all strings. Empty values are kept; what to do with them
/// is the server's call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// True when the field is missing or holds the empty string.
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).is_none_or(str::is_empty)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Clear every value, as a browser form reset would.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Parse `name=value` pairs. The value may itself contain `=`.
    pub fn parse_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pairs
            .into_iter()
            .map(|raw| raw.as_ref().parse::<FieldPair>().map(|p| (p.name, p.value)))
            .collect()
    }
}

impl FromIterator<(String, String)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A single `name=value` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPair {
    pub name: String,
    pub value: String,
}

impl FromStr for FieldPair {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let (name, value) = raw
            .split_once('=')
            .ok_or_else(|| Error::MalformedField(raw.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyFieldName(raw.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_keeps_equals_in_value() {
        let fields = FormFields::parse_pairs(["notes=a=b", "name=Rex"]).unwrap();
        assert_eq!(fields.get("notes"), Some("a=b"));
        assert_eq!(fields.get("name"), Some("Rex"));
    }

    #[test]
    fn test_parse_pairs_rejects_missing_separator() {
        let err = FormFields::parse_pairs(["name"]).unwrap_err();
        assert_eq!(err, Error::MalformedField("name".to_string()));
    }

    #[test]
    fn test_parse_pairs_rejects_empty_name() {
        let err = FormFields::parse_pairs(["=Rex"]).unwrap_err();
        assert_eq!(err, Error::EmptyFieldName("=Rex".to_string()));
    }

    #[test]
    fn test_blank_covers_missing_and_empty() {
        let fields = FormFields::new().with("email", "").with("first_name", "Anna");
        assert!(fields.is_blank("email"));
        assert!(fields.is_blank("last_name"));
        assert!(!fields.is_blank("first_name"));
    }

    #[test]
    fn test_serializes_as_flat_string_object() {
        let fields = FormFields::new().with("owner_id", "1").with("name", "Rex");
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Rex", "owner_id": "1"}));
    }
}
