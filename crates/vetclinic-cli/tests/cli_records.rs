//! The `pets`, `owners` and `records` subcommands against a live fake server.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use vetclinic_testing::assertions::{
    assert_card_titles, assert_notice, assert_section, card_titles, container,
};
use vetclinic_testing::fixtures::{self, REX};
use vetclinic_testing::{FakeServer, Store, TestWorld};

fn clinic() -> (FakeServer, TestWorld) {
    let server = FakeServer::start(fixtures::clinic()).unwrap();
    let world = TestWorld::new().with_api_base(server.base_url());
    (server, world)
}

#[test]
fn test_pets_list_json() {
    let (_server, world) = clinic();

    let result = world.json().run(&["pets", "list"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_section(&json, "pet-list").unwrap();
    assert_card_titles(&json, "pets-list", &["Rex", "Murka", "Kesha"]).unwrap();

    let rex = &container(&json, "pets-list").unwrap()["cards"][0];
    assert_eq!(rex["fields"][1]["value"], "Labrador");
    assert_eq!(rex["fields"][2]["value"], "Anna Petrova");
    let murka = &container(&json, "pets-list").unwrap()["cards"][1];
    assert_eq!(murka["fields"][1]["value"], "not specified");
}

#[test]
fn test_pets_list_empty_server() {
    let server = FakeServer::start(Store::new()).unwrap();
    let world = TestWorld::new().with_api_base(server.base_url());

    let result = world.run(&["pets", "list"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("== Pets =="));
    assert!(result.stdout().contains("No pets registered yet."));
}

#[test]
fn test_owners_show_plain() {
    let (_server, world) = clinic();

    let result = world.run(&["owners", "show", "2"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout(), @r"
    == Owner ==

    Ivan Sidorov (#2)
      Email: ivan@example.com
      Phone: not specified
      Address: not specified
      Registered: 2024-02-10

    Pets (1)
      #5 Kesha
        Species: parrot
        Breed: Budgerigar
        Age: unknown
    ");
}

#[test]
fn test_pets_show_includes_visits_and_chart() {
    let (_server, world) = clinic();

    let id = REX.to_string();
    let result = world.json().run(&["pets", "show", id.as_str()]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_section(&json, "pet-detail").unwrap();

    let detail = container(&json, "pet-detail").unwrap();
    assert_eq!(detail["owner"]["id"], 1);

    let records = container(&json, "health-records").unwrap();
    assert_eq!(records["count"], 3);
    assert_eq!(records["records"][0]["visit_date"], "2024-03-01");

    let chart = container(&json, "health-chart").unwrap();
    assert_eq!(chart["type"], "line");
    assert_eq!(chart["data"]["labels"][0], "2023-09-12");
    assert_eq!(chart["data"]["datasets"][0]["yAxisID"], "y");
    assert_eq!(chart["data"]["datasets"][1]["borderColor"], "#e74c3c");
    assert_eq!(chart["options"]["scales"]["y1"]["position"], "right");
}

#[test]
fn test_pets_show_plain_draws_chart() {
    let (_server, world) = clinic();

    let result = world.run(&["pets", "show", "3"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("Rex (#3)"));
    assert!(stdout.contains("  Owner: Anna Petrova (#1)"));
    assert!(stdout.contains("Visit history (3)"));
    assert!(stdout.contains("Weight (kg)"));
    assert!(stdout.contains("Temperature (°C)"));
}

#[test]
fn test_missing_pet_fails_without_painting() {
    let (_server, world) = clinic();

    let result = world.run(&["pets", "show", "404"]).unwrap();

    assert!(!result.success());
    assert!(!result.stdout().contains("== Pet =="));
    assert!(result.stderr().contains("Error: Loading pet 404 failed"));
}

#[test]
fn test_pets_new_lists_owner_choices() {
    let (_server, world) = clinic();

    let result = world.run(&["pets", "new"]).unwrap();

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("== Add pet =="));
    assert!(stdout.contains("Choices for owner_id:"));
    assert!(stdout.contains("Please choose an owner"));
    assert!(stdout.contains("Anna Petrova"));
    assert!(stdout.contains("vetclinic pets add"));
}

#[test]
fn test_add_owner_then_list() {
    let (server, world) = clinic();
    let world = world.json();

    let result = world
        .run(&[
            "owners",
            "add",
            "first_name=Olga",
            "last_name=Smirnova",
            "email=olga@example.com",
            "address=Kazan, Baumana 5",
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let docs = result.json_documents().unwrap();
    assert_notice(&docs, "success", "Owner Olga Smirnova added successfully!").unwrap();
    let list = docs.last().unwrap();
    assert_section(list, "owner-list").unwrap();
    assert_eq!(
        card_titles(list, "owners-list").unwrap(),
        vec!["Anna Petrova", "Ivan Sidorov", "Olga Smirnova"]
    );

    let olga = server.store().owners().pop().unwrap();
    assert_eq!(olga.address.as_deref(), Some("Kazan, Baumana 5"));
    assert_eq!(olga.phone, None);
}

#[test]
fn test_add_owner_missing_email_is_refused_locally() {
    let (server, world) = clinic();

    let result = world
        .run(&["owners", "add", "first_name=Olga", "last_name=Smirnova"])
        .unwrap();

    assert!(!result.success());
    assert!(
        result
            .stdout()
            .contains("Please fill in the required fields (First name, Last name, Email)")
    );
    assert!(result.stderr().contains("Adding the owner was not submitted"));
    assert_eq!(server.store().owners().len(), 2);
}

#[test]
fn test_add_duplicate_owner_shows_server_text() {
    let (_server, world) = clinic();

    let result = world
        .json()
        .run(&[
            "owners",
            "add",
            "first_name=Anna",
            "last_name=Petrova",
            "email=anna@example.com",
        ])
        .unwrap();

    assert!(!result.success());
    let docs = result.json_documents().unwrap();
    assert_notice(
        &docs,
        "error",
        "pq: duplicate key value violates unique constraint \"owners_email_key\"",
    )
    .unwrap();
    assert_eq!(docs.len(), 1);
}

#[test]
fn test_add_pet_with_unknown_owner_uses_fixed_message() {
    let (_server, world) = clinic();

    let result = world
        .json()
        .run(&["pets", "add", "name=Ghost", "species=cat", "owner_id=77"])
        .unwrap();

    assert!(!result.success());
    let docs = result.json_documents().unwrap();
    assert_notice(&docs, "error", "Failed to add pet").unwrap();
}

#[test]
fn test_add_record_shows_on_next_visit() {
    let (_server, world) = clinic();

    let added = world
        .run(&[
            "records",
            "add",
            "pet_id=4",
            "visit_date=2024-05-20",
            "weight=4.2",
            "temperature=38.1",
            "notes=First visit",
        ])
        .unwrap();
    assert!(added.success(), "stderr: {}", added.stderr());
    assert!(
        added
            .stdout()
            .contains("Health record added successfully!")
    );
    assert!(added.stdout().contains("== Pets =="));

    let shown = world.json().run(&["pets", "show", "4"]).unwrap();
    let json = shown.json().unwrap();
    let records = container(&json, "health-records").unwrap();
    assert_eq!(records["title"], "Visit history (1)");
    assert_eq!(records["records"][0]["fields"][0]["value"], "4.2 kg");
}

#[test]
fn test_malformed_field_is_a_usage_error() {
    let (_server, world) = clinic();

    let result = world.run(&["owners", "add", "first_name"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("expected name=value"));
}

#[test]
fn test_unreachable_server_exits_nonzero() {
    let world = TestWorld::new().with_api_base("http://127.0.0.1:9/api");

    let mut cmd = cargo_bin_cmd!("vetclinic");
    world
        .configure_command(&mut cmd)
        .args(["owners", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Loading owners failed"));
}
