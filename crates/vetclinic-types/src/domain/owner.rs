use serde::{Deserialize, Serialize};

use super::ids::OwnerId;
use crate::util::empty_string_as_none;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl Owner {
    /// `"First Last"`, the same display name the server denormalises onto pets.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
