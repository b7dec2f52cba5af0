use serde::Serialize;

use super::card::CardField;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetDetailViewModel {
    pub id: i64,
    pub name: String,
    pub fields: Vec<CardField>,
    pub owner: OwnerLinkViewModel,
}

/// Navigates to the owner's detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerLinkViewModel {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthRecordListViewModel {
    pub title: String,
    pub count: usize,
    pub records: Vec<HealthRecordViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthRecordViewModel {
    pub id: i64,
    pub visit_date: String,
    pub fields: Vec<CardField>,
}
