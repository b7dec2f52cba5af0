use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormViewModel {
    pub title: String,
    pub fields: Vec<FormFieldViewModel>,
    pub submit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldViewModel {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Container whose options list the accepted values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<&'static str>,
}
