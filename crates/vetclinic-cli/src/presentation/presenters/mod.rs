pub mod config;
pub mod form;
pub mod owner;
pub mod pet;
pub mod select;
pub mod status;

pub use config::{present_config, present_config_written};
pub use form::{SubmitFrom, present_form};
pub use owner::{present_owner_list, present_owner_pets, present_owner_profile};
pub use pet::{present_health_records, present_pet_detail, present_pet_list};
pub use select::{present_owner_select, present_pet_select};
pub use status::{present_status, present_status_unreachable};

use crate::presentation::formatters::NOT_SPECIFIED;

/// The value itself, or the placeholder when it is absent.
pub(crate) fn or_not_specified(value: Option<&str>) -> String {
    value.unwrap_or(NOT_SPECIFIED).to_string()
}
