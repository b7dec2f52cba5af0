//! Create-forms as command objects.
//!
//! Each form knows how to check its input, which API call creates the
//! record, and what the client does afterwards. The controller in
//! [`crate::app::App`] runs them; nothing here touches the surface.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use vetclinic_client::{ClientError, VetApi};
use vetclinic_types::{FormFields, HealthRecord, Owner, Pet};

use super::navigator::{Container, Destination, Section};
use crate::presentation::view_models::Notice;

pub const PET_ADDED: &str = "Pet added successfully!";
pub const PET_FAILED: &str = "Failed to add pet";
pub const RECORD_ADDED: &str = "Health record added successfully!";
pub const RECORD_FAILED: &str = "Failed to add health record";
pub const OWNER_FAILED: &str = "Failed to add owner";
pub const OWNER_REQUIRED: &str = "Please fill in the required fields (First name, Last name, Email)";
pub const CONNECTION_ERROR: &str = "Server connection error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    AddPet,
    AddOwner,
    AddRecord,
}

/// One input of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Dropdown that lists the accepted values.
    pub choices: Option<Container>,
}

const fn field(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        required: false,
        choices: None,
    }
}

const fn required(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        required: true,
        choices: None,
    }
}

const PET_FIELDS: &[FieldSpec] = &[
    required("name", "Name"),
    required("species", "Species"),
    field("breed", "Breed"),
    field("date_of_birth", "Date of birth"),
    field("color", "Color"),
    field("microchip_id", "Microchip"),
    FieldSpec {
        choices: Some(Container::OwnerSelect),
        ..required("owner_id", "Owner")
    },
];

const OWNER_FIELDS: &[FieldSpec] = &[
    required("first_name", "First name"),
    required("last_name", "Last name"),
    required("email", "Email"),
    field("phone", "Phone"),
    field("address", "Address"),
];

const RECORD_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        choices: Some(Container::PetSelect),
        ..required("pet_id", "Pet")
    },
    required("visit_date", "Visit date"),
    field("weight", "Weight (kg)"),
    field("temperature", "Temperature (°C)"),
    field("heart_rate", "Heart rate (bpm)"),
    field("respiratory_rate", "Respiratory rate (breaths/min)"),
    field("diagnosis", "Diagnosis"),
    field("treatment", "Treatment"),
    field("notes", "Notes"),
    field("next_visit_date", "Next visit"),
];

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::AddPet => "add-pet",
            FormKind::AddOwner => "add-owner",
            FormKind::AddRecord => "add-record",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            FormKind::AddPet => Section::AddPet,
            FormKind::AddOwner => Section::AddOwner,
            FormKind::AddRecord => Section::AddRecord,
        }
    }

    /// Inputs in display order. `required` marks what the form asks for;
    /// only the owner form enforces it before submitting.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::AddPet => PET_FIELDS,
            FormKind::AddOwner => OWNER_FIELDS,
            FormKind::AddRecord => RECORD_FIELDS,
        }
    }

    pub fn command(&self) -> Box<dyn FormCommand> {
        match self {
            FormKind::AddPet => Box::new(AddPetCommand),
            FormKind::AddOwner => Box::new(AddOwnerCommand),
            FormKind::AddRecord => Box::new(AddHealthRecordCommand),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The record a successful submission created.
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    Pet(Pet),
    Owner(Owner),
    HealthRecord(HealthRecord),
}

/// Data the controller reloads after a successful create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    PetList,
    OwnerList,
    PetSelect,
    OwnerSelect,
}

/// What happens after a successful submission, in this order:
/// notify, reset the form, run the refreshes, navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessPlan {
    pub notice: Notice,
    pub reset_form: FormKind,
    pub refresh: Vec<Refresh>,
    pub navigate_to: Destination,
}

#[async_trait]
pub trait FormCommand: Send + Sync {
    fn kind(&self) -> FormKind;

    /// Checked before any network call. `Err` carries the notice to show.
    fn validate(&self, _fields: &FormFields) -> Result<(), Notice> {
        Ok(())
    }

    async fn submit(
        &self,
        api: &dyn VetApi,
        fields: &FormFields,
    ) -> vetclinic_client::Result<Created>;

    fn on_success(&self, created: &Created) -> SuccessPlan;

    fn on_failure(&self, error: &ClientError) -> Notice;
}

pub struct AddPetCommand;

#[async_trait]
impl FormCommand for AddPetCommand {
    fn kind(&self) -> FormKind {
        FormKind::AddPet
    }

    async fn submit(
        &self,
        api: &dyn VetApi,
        fields: &FormFields,
    ) -> vetclinic_client::Result<Created> {
        api.create_pet(fields).await.map(Created::Pet)
    }

    fn on_success(&self, _created: &Created) -> SuccessPlan {
        SuccessPlan {
            notice: Notice::success(PET_ADDED),
            reset_form: FormKind::AddPet,
            refresh: vec![Refresh::PetSelect],
            navigate_to: Destination::PetList,
        }
    }

    fn on_failure(&self, _error: &ClientError) -> Notice {
        Notice::error(PET_FAILED)
    }
}

pub struct AddOwnerCommand;

#[async_trait]
impl FormCommand for AddOwnerCommand {
    fn kind(&self) -> FormKind {
        FormKind::AddOwner
    }

    fn validate(&self, fields: &FormFields) -> Result<(), Notice> {
        let missing = ["first_name", "last_name", "email"]
            .iter()
            .any(|name| fields.is_blank(name));
        if missing {
            return Err(Notice::warning(OWNER_REQUIRED));
        }
        Ok(())
    }

    async fn submit(
        &self,
        api: &dyn VetApi,
        fields: &FormFields,
    ) -> vetclinic_client::Result<Created> {
        api.create_owner(fields).await.map(Created::Owner)
    }

    fn on_success(&self, created: &Created) -> SuccessPlan {
        let message = match created {
            Created::Owner(owner) => format!(
                "Owner {} {} added successfully!",
                owner.first_name, owner.last_name
            ),
            _ => "Owner added successfully!".to_string(),
        };
        SuccessPlan {
            notice: Notice::success(message),
            reset_form: FormKind::AddOwner,
            refresh: vec![Refresh::OwnerSelect],
            navigate_to: Destination::OwnerList,
        }
    }

    fn on_failure(&self, error: &ClientError) -> Notice {
        if error.is_rejection() {
            Notice::error(error.server_message().unwrap_or(OWNER_FAILED))
        } else {
            Notice::error(CONNECTION_ERROR)
        }
    }
}

pub struct AddHealthRecordCommand;

#[async_trait]
impl FormCommand for AddHealthRecordCommand {
    fn kind(&self) -> FormKind {
        FormKind::AddRecord
    }

    async fn submit(
        &self,
        api: &dyn VetApi,
        fields: &FormFields,
    ) -> vetclinic_client::Result<Created> {
        api.create_health_record(fields)
            .await
            .map(Created::HealthRecord)
    }

    // The pet's detail view is left as it was; the visit shows up the next
    // time that pet is opened.
    fn on_success(&self, _created: &Created) -> SuccessPlan {
        SuccessPlan {
            notice: Notice::success(RECORD_ADDED),
            reset_form: FormKind::AddRecord,
            refresh: Vec::new(),
            navigate_to: Destination::PetList,
        }
    }

    fn on_failure(&self, _error: &ClientError) -> Notice {
        Notice::error(RECORD_FAILED)
    }
}
