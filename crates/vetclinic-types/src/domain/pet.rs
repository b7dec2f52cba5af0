use serde::{Deserialize, Serialize};

use super::ids::{OwnerId, PetId};
use crate::util::empty_string_as_none;

/// A pet as returned by the records service.
///
/// `owner_name` is denormalised by the server (`"First Last"`) on the list
/// and detail endpoints; the by-owner listing leaves it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub owner_id: OwnerId,
    pub name: String,
    pub species: String,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub breed: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_birth: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub microchip_id: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}
