use serde::Serialize;

/// One `Label: value` line of a card or profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

impl CardField {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// A selectable summary of one pet or owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardViewModel {
    pub id: i64,
    pub title: String,
    pub fields: Vec<CardField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardListViewModel {
    pub cards: Vec<CardViewModel>,
    #[serde(skip)]
    pub empty_message: &'static str,
}
