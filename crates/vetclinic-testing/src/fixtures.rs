//! Sample clinic data.
//!
//! [`clinic`] builds the same store every time, so the ids below are stable:
//!
//! | id | row |
//! |----|-----|
//! | 1 | owner Anna Petrova, with phone and address |
//! | 2 | owner Ivan Sidorov, no phone, no address |
//! | 3 | pet Rex, dog, owned by Anna, three visits |
//! | 4 | pet Murka, cat, owned by Anna, no breed, no visits |
//! | 5 | pet Kesha, parrot, owned by Ivan, no birth date |

use vetclinic_types::{FormFields, OwnerId, PetId};

use crate::store::Store;

pub const ANNA: OwnerId = OwnerId::new(1);
pub const IVAN: OwnerId = OwnerId::new(2);
pub const REX: PetId = PetId::new(3);
pub const MURKA: PetId = PetId::new(4);
pub const KESHA: PetId = PetId::new(5);

/// An owner with every optional field filled in.
pub fn owner_fields(first: &str, last: &str, email: &str) -> FormFields {
    FormFields::new()
        .with("first_name", first)
        .with("last_name", last)
        .with("email", email)
        .with("phone", "+7 900 123-45-67")
        .with("address", "Moscow, Lenina 1")
}

pub fn pet_fields(name: &str, species: &str, owner_id: OwnerId) -> FormFields {
    FormFields::new()
        .with("name", name)
        .with("species", species)
        .with("owner_id", owner_id.to_string())
}

pub fn visit_fields(pet_id: PetId, visit_date: &str, weight: &str, temperature: &str) -> FormFields {
    FormFields::new()
        .with("pet_id", pet_id.to_string())
        .with("visit_date", visit_date)
        .with("weight", weight)
        .with("temperature", temperature)
}

/// Two owners, three pets and three visits for Rex (entered out of order).
pub fn clinic() -> Store {
    let mut store = Store::new();
    store.set_created_at("2024-02-10T08:30:00Z");

    seed(&mut store);
    store
}

fn seed(store: &mut Store) {
    store
        .create_owner(&owner_fields("Anna", "Petrova", "anna@example.com"))
        .expect("seed owner Anna");
    store
        .create_owner(
            &FormFields::new()
                .with("first_name", "Ivan")
                .with("last_name", "Sidorov")
                .with("email", "ivan@example.com"),
        )
        .expect("seed owner Ivan");

    store
        .create_pet(
            &pet_fields("Rex", "dog", ANNA)
                .with("breed", "Labrador")
                .with("date_of_birth", "2020-03-15")
                .with("color", "golden")
                .with("microchip_id", "643094100123456"),
        )
        .expect("seed pet Rex");
    store
        .create_pet(&pet_fields("Murka", "cat", ANNA).with("date_of_birth", "2023-11-01"))
        .expect("seed pet Murka");
    store
        .create_pet(&pet_fields("Kesha", "parrot", IVAN).with("breed", "Budgerigar"))
        .expect("seed pet Kesha");

    store
        .create_health_record(
            &visit_fields(REX, "2024-03-01", "31.2", "38.6")
                .with("heart_rate", "90")
                .with("respiratory_rate", "22")
                .with("diagnosis", "Healthy")
                .with("next_visit_date", "2024-09-01"),
        )
        .expect("seed visit");
    store
        .create_health_record(&visit_fields(REX, "2023-09-12", "29.8", "38.9"))
        .expect("seed visit");
    // Weight not measured on this visit.
    store
        .create_health_record(
            &visit_fields(REX, "2024-01-15", "", "39.4")
                .with("diagnosis", "Otitis")
                .with("treatment", "Ear drops, 7 days")
                .with("notes", "Recheck in two weeks"),
        )
        .expect("seed visit");
}
