use vetclinic_types::{Owner, Pet};

use super::or_not_specified;
use crate::presentation::formatters::{DisplayOptions, calculate_age, format_date};
use crate::presentation::view_models::{
    CardField, CardListViewModel, CardViewModel, OwnerPetsViewModel, OwnerProfileViewModel,
};

pub const NO_OWNERS: &str = "No owners registered yet.";
pub const OWNER_HAS_NO_PETS: &str = "This owner has no registered pets yet.";

fn contact_fields(owner: &Owner) -> Vec<CardField> {
    vec![
        CardField::new("Email", owner.email.clone()),
        CardField::new("Phone", or_not_specified(owner.phone.as_deref())),
        CardField::new("Address", or_not_specified(owner.address.as_deref())),
    ]
}

pub fn present_owner_list(owners: &[Owner]) -> CardListViewModel {
    CardListViewModel {
        cards: owners
            .iter()
            .map(|owner| CardViewModel {
                id: owner.id.get(),
                title: owner.full_name(),
                fields: contact_fields(owner),
            })
            .collect(),
        empty_message: NO_OWNERS,
    }
}

pub fn present_owner_profile(owner: &Owner, options: &DisplayOptions) -> OwnerProfileViewModel {
    let mut fields = contact_fields(owner);
    fields.push(CardField::new(
        "Registered",
        format_date(owner.created_at.as_deref(), options.locale),
    ));

    OwnerProfileViewModel {
        id: owner.id.get(),
        full_name: owner.full_name(),
        fields,
    }
}

/// The owner's pets. The by-owner listing carries no owner name, so the
/// cards leave that line out.
pub fn present_owner_pets(pets: &[Pet], options: &DisplayOptions) -> OwnerPetsViewModel {
    let today = options.today();
    let cards: Vec<CardViewModel> = pets
        .iter()
        .map(|pet| CardViewModel {
            id: pet.id.get(),
            title: pet.name.clone(),
            fields: vec![
                CardField::new("Species", pet.species.clone()),
                CardField::new("Breed", or_not_specified(pet.breed.as_deref())),
                CardField::new("Age", calculate_age(pet.date_of_birth.as_deref(), today)),
            ],
        })
        .collect();

    OwnerPetsViewModel {
        title: format!("Pets ({})", cards.len()),
        count: cards.len(),
        empty_message: cards.is_empty().then(|| OWNER_HAS_NO_PETS.to_string()),
        cards,
    }
}
