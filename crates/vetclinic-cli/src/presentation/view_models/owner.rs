use serde::Serialize;

use super::card::{CardField, CardViewModel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerProfileViewModel {
    pub id: i64,
    pub full_name: String,
    pub fields: Vec<CardField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerPetsViewModel {
    pub title: String,
    pub count: usize,
    pub cards: Vec<CardViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}
