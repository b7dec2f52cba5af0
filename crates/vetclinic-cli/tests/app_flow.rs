//! Controller behaviour against an in-memory API.

mod common;

use common::Harness;
use vetclinic::app::forms::{CONNECTION_ERROR, OWNER_REQUIRED, PET_ADDED, PET_FAILED, RECORD_ADDED};
use vetclinic::presentation::StatusLevel;
use vetclinic::{Action, Container, Destination, FormKind, Outcome, Section};
use vetclinic_testing::fixtures::{self, ANNA, IVAN, MURKA, REX};
use vetclinic_testing::{ApiCall, FakeApi, Failure, Operation};
use vetclinic_types::{FormFields, OwnerId, PetId};

fn clinic() -> Harness {
    Harness::new(FakeApi::with_store(fixtures::clinic()))
}

#[tokio::test]
async fn test_start_fills_lists_and_dropdowns() {
    let mut h = clinic();

    let outcome = h.app.start(Section::PetList).await;

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(h.app.active_section(), Some(Section::PetList));
    assert_eq!(h.card_titles(Container::PetsList), vec!["Rex", "Murka", "Kesha"]);
    assert_eq!(
        h.card_titles(Container::OwnersList),
        vec!["Anna Petrova", "Ivan Sidorov"]
    );

    let owners = h.panel(Container::OwnerSelect).unwrap();
    assert_eq!(owners.data["options"][0]["value"], "");
    assert_eq!(owners.data["options"][0]["label"], "Please choose an owner");
    assert_eq!(owners.data["options"][1]["label"], "Anna Petrova");

    let pets = h.panel(Container::PetSelect).unwrap();
    assert_eq!(pets.data["options"][3]["label"], "Kesha (Ivan Sidorov)");
}

#[tokio::test]
async fn test_start_survives_one_failed_fetch() {
    let mut h = clinic();
    h.api.fail(Operation::ListOwners, Failure::Unreachable);

    let outcome = h.app.start(Section::PetList).await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(h.card_titles(Container::PetsList).len(), 3);
    assert!(h.panel(Container::OwnersList).is_none());
    assert!(h.panel(Container::OwnerSelect).is_none());
    assert_eq!(h.app.active_section(), Some(Section::PetList));
    // Read failures are logged, never shown as notices.
    assert!(h.notices().is_empty());
}

#[tokio::test]
async fn test_every_list_visit_refetches() {
    let mut h = clinic();

    h.app.navigate(Destination::PetList).await;
    h.app.navigate(Destination::PetList).await;

    assert_eq!(h.api.count(Operation::ListPets), 2);
    assert_eq!(h.activations(), vec![Section::PetList, Section::PetList]);
}

#[tokio::test]
async fn test_form_sections_do_not_fetch() {
    let mut h = clinic();

    let outcome = h.app.navigate(Destination::AddOwner).await;

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(h.app.active_section(), Some(Section::AddOwner));
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn test_empty_list_paints_placeholder() {
    let mut h = Harness::new(FakeApi::new());

    h.app.navigate(Destination::OwnerList).await;

    let panel = h.panel(Container::OwnersList).unwrap();
    assert_eq!(panel.text.trim(), "No owners registered yet.");
    assert_eq!(panel.data["cards"], serde_json::json!([]));
}

#[tokio::test]
async fn test_pet_detail_paints_all_three_containers() {
    let mut h = clinic();

    let outcome = h.app.navigate(Destination::PetDetail(REX)).await;

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(h.app.active_section(), Some(Section::PetDetail));

    let detail = h.panel(Container::PetDetail).unwrap();
    assert_eq!(detail.data["name"], "Rex");
    assert_eq!(detail.data["owner"]["label"], "Owner: Anna Petrova");

    let records = h.panel(Container::HealthRecords).unwrap();
    assert_eq!(records.data["title"], "Visit history (3)");

    // The server lists newest first; the chart runs oldest first.
    let charts = h.charts();
    assert_eq!(charts.len(), 1);
    assert_eq!(
        charts[0].data.labels,
        vec!["2023-09-12", "2024-01-15", "2024-03-01"]
    );
    assert_eq!(
        charts[0].data.datasets[0].data,
        vec![Some(29.8), None, Some(31.2)]
    );

    assert!(h.api.calls().contains(&ApiCall::GetPet(REX)));
    assert!(h.api.calls().contains(&ApiCall::ListHealthRecords(REX)));
}

#[tokio::test]
async fn test_pet_without_visits_gets_empty_chart() {
    let mut h = clinic();

    h.app.navigate(Destination::PetDetail(MURKA)).await;

    let records = h.panel(Container::HealthRecords).unwrap();
    assert_eq!(records.data["title"], "Visit history (0)");
    assert!(h.charts()[0].data.labels.is_empty());
}

#[tokio::test]
async fn test_failed_detail_keeps_previous_section() {
    let mut h = clinic();
    h.app.navigate(Destination::OwnerList).await;

    let outcome = h.app.navigate(Destination::PetDetail(PetId::new(404))).await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(h.app.active_section(), Some(Section::OwnerList));
    assert!(h.panel(Container::PetDetail).is_none());
    assert!(h.notices().is_empty());
}

#[tokio::test]
async fn test_owner_detail_lists_their_pets() {
    let mut h = clinic();

    h.app.navigate(Destination::OwnerDetail(ANNA)).await;

    assert_eq!(h.app.active_section(), Some(Section::OwnerDetail));
    let profile = h.panel(Container::OwnerDetail).unwrap();
    assert_eq!(profile.data["full_name"], "Anna Petrova");
    assert_eq!(h.card_titles(Container::OwnerPets), vec!["Rex", "Murka"]);
}

#[tokio::test]
async fn test_owner_without_pets_shows_message() {
    let mut h = clinic();
    h.api
        .store()
        .create_owner(&fixtures::owner_fields("Olga", "Smirnova", "olga@example.com"))
        .unwrap();
    let olga = OwnerId::new(9);

    h.app.navigate(Destination::OwnerDetail(olga)).await;

    let pets = h.panel(Container::OwnerPets).unwrap();
    assert!(pets.text.contains("This owner has no registered pets yet."));
}

#[tokio::test]
async fn test_owner_with_blank_email_is_not_sent() {
    let mut h = clinic();
    let fields = FormFields::new()
        .with("first_name", "Olga")
        .with("last_name", "Smirnova")
        .with("email", "");

    let outcome = h.app.submit(FormKind::AddOwner, &fields).await;

    assert_eq!(outcome, Outcome::Invalid);
    assert_eq!(h.api.count(Operation::CreateOwner), 0);
    let notices = h.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, StatusLevel::Warning);
    assert_eq!(notices[0].message, OWNER_REQUIRED);
    assert!(h.resets().is_empty());
}

#[tokio::test]
async fn test_owner_rejection_is_shown_verbatim() {
    let mut h = clinic();
    let duplicate = fixtures::owner_fields("Anna", "Petrova", "anna@example.com");

    let outcome = h.app.submit(FormKind::AddOwner, &duplicate).await;

    assert_eq!(outcome, Outcome::Failed);
    let notices = h.notices();
    assert_eq!(notices[0].level, StatusLevel::Error);
    assert_eq!(
        notices[0].message,
        "pq: duplicate key value violates unique constraint \"owners_email_key\""
    );
    assert!(h.resets().is_empty());
    assert_eq!(h.app.active_section(), None);
}

#[tokio::test]
async fn test_owner_transport_failure_is_a_connection_error() {
    let mut h = clinic();
    h.api.fail(Operation::CreateOwner, Failure::Unreachable);

    h.app
        .submit(
            FormKind::AddOwner,
            &fixtures::owner_fields("Olga", "Smirnova", "olga@example.com"),
        )
        .await;

    assert_eq!(h.notices()[0].message, CONNECTION_ERROR);
}

#[tokio::test]
async fn test_owner_success_names_the_owner_and_opens_owner_list() {
    let mut h = clinic();

    let outcome = h
        .app
        .submit(
            FormKind::AddOwner,
            &fixtures::owner_fields("Olga", "Smirnova", "olga@example.com"),
        )
        .await;

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(h.notices()[0].message, "Owner Olga Smirnova added successfully!");
    assert_eq!(h.resets(), vec![FormKind::AddOwner]);
    assert_eq!(h.app.active_section(), Some(Section::OwnerList));
    assert_eq!(
        h.card_titles(Container::OwnersList),
        vec!["Anna Petrova", "Ivan Sidorov", "Olga Smirnova"]
    );
    let select = h.panel(Container::OwnerSelect).unwrap();
    assert_eq!(select.data["options"][3]["label"], "Olga Smirnova");
}

#[tokio::test]
async fn test_pet_success_refreshes_and_shows_owner_name() {
    let mut h = clinic();

    let outcome = h
        .app
        .submit(FormKind::AddPet, &fixtures::pet_fields("Sharik", "dog", IVAN))
        .await;

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(h.notices()[0].message, PET_ADDED);
    assert_eq!(h.app.active_section(), Some(Section::PetList));

    let list = h.panel(Container::PetsList).unwrap();
    let sharik = &list.data["cards"][3];
    assert_eq!(sharik["title"], "Sharik");
    assert_eq!(sharik["fields"][2]["label"], "Owner");
    assert_eq!(sharik["fields"][2]["value"], "Ivan Sidorov");

    let select = h.panel(Container::PetSelect).unwrap();
    assert_eq!(select.data["options"][4]["label"], "Sharik (Ivan Sidorov)");
}

#[tokio::test]
async fn test_pet_rejection_uses_fixed_message_and_stays_put() {
    let mut h = clinic();
    h.app.navigate(Destination::AddPet).await;

    let outcome = h
        .app
        .submit(
            FormKind::AddPet,
            &fixtures::pet_fields("Ghost", "cat", OwnerId::new(77)),
        )
        .await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(h.notices()[0].message, PET_FAILED);
    assert_eq!(h.app.active_section(), Some(Section::AddPet));
    assert!(h.resets().is_empty());
}

#[tokio::test]
async fn test_record_success_returns_to_pet_list_without_chart_redraw() {
    let mut h = clinic();
    h.app.navigate(Destination::PetDetail(REX)).await;
    h.api.clear_calls();

    let outcome = h
        .app
        .dispatch(Action::Submit(
            FormKind::AddRecord,
            fixtures::visit_fields(REX, "2024-05-20", "31.5", "38.4"),
        ))
        .await;

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(h.notices()[0].message, RECORD_ADDED);
    assert_eq!(h.app.active_section(), Some(Section::PetList));
    assert_eq!(h.charts().len(), 1);
    assert!(!h.api.calls().contains(&ApiCall::ListHealthRecords(REX)));
    assert_eq!(h.api.store().records_by_pet(REX).len(), 4);
}

#[tokio::test]
async fn test_fields_are_sent_as_typed() {
    let mut h = clinic();
    let fields = fixtures::visit_fields(REX, "2024-05-20", "", "38.4").with("notes", "");

    h.app.submit(FormKind::AddRecord, &fields).await;

    assert!(
        h.api
            .calls()
            .contains(&ApiCall::CreateHealthRecord(fields.clone()))
    );
}
