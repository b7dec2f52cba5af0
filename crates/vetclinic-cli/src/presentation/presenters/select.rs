use vetclinic_types::{Owner, Pet};

use crate::presentation::formatters::NOT_SPECIFIED;
use crate::presentation::view_models::{SelectOption, SelectViewModel};

pub const CHOOSE_OWNER: &str = "Please choose an owner";
pub const CHOOSE_PET: &str = "Please choose a pet";

fn with_placeholder(placeholder: &str, options: impl Iterator<Item = SelectOption>) -> SelectViewModel {
    let mut all = vec![SelectOption {
        value: String::new(),
        label: placeholder.to_string(),
    }];
    all.extend(options);
    SelectViewModel { options: all }
}

pub fn present_owner_select(owners: &[Owner]) -> SelectViewModel {
    with_placeholder(
        CHOOSE_OWNER,
        owners.iter().map(|owner| SelectOption {
            value: owner.id.to_string(),
            label: owner.full_name(),
        }),
    )
}

pub fn present_pet_select(pets: &[Pet]) -> SelectViewModel {
    with_placeholder(
        CHOOSE_PET,
        pets.iter().map(|pet| SelectOption {
            value: pet.id.to_string(),
            label: format!(
                "{} ({})",
                pet.name,
                pet.owner_name.as_deref().unwrap_or(NOT_SPECIFIED)
            ),
        }),
    )
}
