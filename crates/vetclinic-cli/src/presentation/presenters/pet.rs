use vetclinic_types::{HealthRecord, Pet};

use super::or_not_specified;
use crate::presentation::formatters::{DisplayOptions, NOT_SPECIFIED, calculate_age, format_date};
use crate::presentation::view_models::{
    CardField, CardListViewModel, CardViewModel, HealthRecordListViewModel,
    HealthRecordViewModel, OwnerLinkViewModel, PetDetailViewModel,
};

pub const NO_PETS: &str = "No pets registered yet.";
pub const NO_MICROCHIP: &str = "not installed";

pub fn present_pet_list(pets: &[Pet], options: &DisplayOptions) -> CardListViewModel {
    let today = options.today();
    let cards = pets
        .iter()
        .map(|pet| CardViewModel {
            id: pet.id.get(),
            title: pet.name.clone(),
            fields: vec![
                CardField::new("Species", pet.species.clone()),
                CardField::new("Breed", or_not_specified(pet.breed.as_deref())),
                CardField::new("Owner", or_not_specified(pet.owner_name.as_deref())),
                CardField::new("Age", calculate_age(pet.date_of_birth.as_deref(), today)),
            ],
        })
        .collect();

    CardListViewModel {
        cards,
        empty_message: NO_PETS,
    }
}

pub fn present_pet_detail(pet: &Pet, options: &DisplayOptions) -> PetDetailViewModel {
    let fields = vec![
        CardField::new("Species", pet.species.clone()),
        CardField::new("Breed", or_not_specified(pet.breed.as_deref())),
        CardField::new(
            "Date of birth",
            format_date(pet.date_of_birth.as_deref(), options.locale),
        ),
        CardField::new(
            "Age",
            calculate_age(pet.date_of_birth.as_deref(), options.today()),
        ),
        CardField::new("Color", or_not_specified(pet.color.as_deref())),
        CardField::new(
            "Microchip",
            pet.microchip_id.as_deref().unwrap_or(NO_MICROCHIP),
        ),
    ];

    PetDetailViewModel {
        id: pet.id.get(),
        name: pet.name.clone(),
        fields,
        owner: OwnerLinkViewModel {
            id: pet.owner_id.get(),
            label: format!(
                "Owner: {}",
                pet.owner_name.as_deref().unwrap_or(NOT_SPECIFIED)
            ),
        },
    }
}

/// Visits in the order the server sent them.
pub fn present_health_records(
    records: &[HealthRecord],
    options: &DisplayOptions,
) -> HealthRecordListViewModel {
    HealthRecordListViewModel {
        title: format!("Visit history ({})", records.len()),
        count: records.len(),
        records: records
            .iter()
            .map(|record| present_health_record(record, options))
            .collect(),
    }
}

fn present_health_record(record: &HealthRecord, options: &DisplayOptions) -> HealthRecordViewModel {
    let measured = |value: Option<String>| value.unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let mut fields = vec![
        CardField::new("Weight", measured(record.weight.map(|w| format!("{} kg", w)))),
        CardField::new(
            "Temperature",
            measured(record.temperature.map(|t| format!("{} °C", t))),
        ),
        CardField::new(
            "Heart rate",
            measured(record.heart_rate.map(|h| format!("{} bpm", h))),
        ),
        CardField::new(
            "Respiratory rate",
            measured(record.respiratory_rate.map(|r| format!("{} breaths/min", r))),
        ),
    ];

    if let Some(diagnosis) = &record.diagnosis {
        fields.push(CardField::new("Diagnosis", diagnosis.clone()));
    }
    if let Some(treatment) = &record.treatment {
        fields.push(CardField::new("Treatment", treatment.clone()));
    }
    if let Some(notes) = &record.notes {
        fields.push(CardField::new("Notes", notes.clone()));
    }
    if let Some(next) = &record.next_visit_date {
        fields.push(CardField::new(
            "Next visit",
            format_date(Some(next), options.locale),
        ));
    }

    HealthRecordViewModel {
        id: record.id.get(),
        visit_date: format_date(Some(&record.visit_date), options.locale),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::formatters::DateLocale;
    use chrono::NaiveDate;
    use vetclinic_types::{HealthRecordId, OwnerId, PetId};

    fn options() -> DisplayOptions {
        DisplayOptions::new(DateLocale::RuRu)
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn bare_pet() -> Pet {
        Pet {
            id: PetId::new(4),
            owner_id: OwnerId::new(1),
            name: "Murka".to_string(),
            species: "cat".to_string(),
            breed: None,
            date_of_birth: None,
            color: None,
            microchip_id: None,
            owner_name: None,
            created_at: None,
        }
    }

    fn bare_record(visit_date: &str) -> HealthRecord {
        HealthRecord {
            id: HealthRecordId::new(10),
            pet_id: PetId::new(4),
            visit_date: visit_date.to_string(),
            weight: None,
            temperature: None,
            heart_rate: None,
            respiratory_rate: None,
            diagnosis: None,
            treatment: None,
            notes: None,
            next_visit_date: None,
            created_at: None,
        }
    }

    fn value<'a>(fields: &'a [CardField], label: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    #[test]
    fn test_pet_card_placeholders() {
        let list = present_pet_list(&[bare_pet()], &options());
        let card = &list.cards[0];
        assert_eq!(card.id, 4);
        assert_eq!(card.title, "Murka");
        assert_eq!(value(&card.fields, "Breed"), Some(NOT_SPECIFIED));
        assert_eq!(value(&card.fields, "Owner"), Some(NOT_SPECIFIED));
        assert_eq!(value(&card.fields, "Age"), Some("unknown"));
    }

    #[test]
    fn test_pet_card_with_owner_and_age() {
        let pet = Pet {
            breed: Some("Labrador".to_string()),
            owner_name: Some("Anna Petrova".to_string()),
            date_of_birth: Some("2020-03-15".to_string()),
            ..bare_pet()
        };
        let list = present_pet_list(&[pet], &options());
        let card = &list.cards[0];
        assert_eq!(value(&card.fields, "Breed"), Some("Labrador"));
        assert_eq!(value(&card.fields, "Owner"), Some("Anna Petrova"));
        assert_eq!(value(&card.fields, "Age"), Some("4 years, 3 months"));
    }

    #[test]
    fn test_empty_pet_list_keeps_message() {
        let list = present_pet_list(&[], &options());
        assert!(list.cards.is_empty());
        assert_eq!(list.empty_message, NO_PETS);
    }

    #[test]
    fn test_pet_detail_placeholders_are_never_blank() {
        let detail = present_pet_detail(&bare_pet(), &options());
        assert!(detail.fields.iter().all(|f| !f.value.trim().is_empty()));
        assert_eq!(value(&detail.fields, "Date of birth"), Some(NOT_SPECIFIED));
        assert_eq!(value(&detail.fields, "Microchip"), Some(NO_MICROCHIP));
        assert_eq!(detail.owner.id, 1);
        assert_eq!(detail.owner.label, "Owner: not specified");
    }

    #[test]
    fn test_pet_detail_formats_birth_date() {
        let pet = Pet {
            date_of_birth: Some("2023-11-01".to_string()),
            ..bare_pet()
        };
        let detail = present_pet_detail(&pet, &options());
        assert_eq!(value(&detail.fields, "Date of birth"), Some("01.11.2023"));
        assert_eq!(value(&detail.fields, "Age"), Some("7 months"));
    }

    #[test]
    fn test_record_optional_sections_only_when_present() {
        let bare = present_health_records(&[bare_record("2024-01-15")], &options());
        let labels: Vec<&str> = bare.records[0].fields.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec!["Weight", "Temperature", "Heart rate", "Respiratory rate"]
        );
        assert!(bare.records[0]
            .fields
            .iter()
            .all(|f| f.value == NOT_SPECIFIED));

        let full = HealthRecord {
            weight: Some(31.2),
            temperature: Some(38.6),
            heart_rate: Some(90),
            respiratory_rate: Some(22),
            diagnosis: Some("Healthy".to_string()),
            next_visit_date: Some("2024-09-01".to_string()),
            ..bare_record("2024-03-01")
        };
        let list = present_health_records(&[full], &options());
        let record = &list.records[0];
        assert_eq!(record.visit_date, "01.03.2024");
        assert_eq!(value(&record.fields, "Weight"), Some("31.2 kg"));
        assert_eq!(value(&record.fields, "Temperature"), Some("38.6 °C"));
        assert_eq!(value(&record.fields, "Heart rate"), Some("90 bpm"));
        assert_eq!(value(&record.fields, "Respiratory rate"), Some("22 breaths/min"));
        assert_eq!(value(&record.fields, "Diagnosis"), Some("Healthy"));
        assert_eq!(value(&record.fields, "Next visit"), Some("01.09.2024"));
        assert_eq!(value(&record.fields, "Treatment"), None);
    }

    #[test]
    fn test_records_keep_received_order() {
        let records = vec![bare_record("2023-09-12"), bare_record("2024-03-01")];
        let list = present_health_records(&records, &options());
        assert_eq!(list.title, "Visit history (2)");
        assert_eq!(list.records[0].visit_date, "12.09.2023");
        assert_eq!(list.records[1].visit_date, "01.03.2024");
    }
}
