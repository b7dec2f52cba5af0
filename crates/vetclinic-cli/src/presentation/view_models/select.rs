use serde::Serialize;

/// A dropdown: the "please choose" option with an empty value comes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectViewModel {
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}
