use serde::{Deserialize, Serialize};

use super::ids::{HealthRecordId, PetId};
use crate::util::{empty_string_as_none, zero_as_none};

/// One visit recorded against a pet.
///
/// Vital signs are optional; the service reports an unmeasured value as `0`,
/// which decodes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: HealthRecordId,
    pub pet_id: PetId,
    pub visit_date: String,

    #[serde(
        default,
        deserialize_with = "zero_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<f64>,

    #[serde(
        default,
        deserialize_with = "zero_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub temperature: Option<f64>,

    #[serde(
        default,
        deserialize_with = "zero_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub heart_rate: Option<u32>,

    #[serde(
        default,
        deserialize_with = "zero_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub respiratory_rate: Option<u32>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub diagnosis: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub treatment: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_visit_date: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}
