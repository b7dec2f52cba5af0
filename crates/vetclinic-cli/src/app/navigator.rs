//! Which section of the client is showing.

use serde::Serialize;
use std::fmt;
use vetclinic_types::{OwnerId, PetId};

use super::forms::FormKind;

/// One logical view of the client. At most one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    PetList,
    OwnerList,
    AddPet,
    AddOwner,
    AddRecord,
    PetDetail,
    OwnerDetail,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::PetList,
        Section::OwnerList,
        Section::AddPet,
        Section::AddOwner,
        Section::AddRecord,
        Section::PetDetail,
        Section::OwnerDetail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::PetList => "pet-list",
            Section::OwnerList => "owner-list",
            Section::AddPet => "add-pet",
            Section::AddOwner => "add-owner",
            Section::AddRecord => "add-record",
            Section::PetDetail => "pet-detail",
            Section::OwnerDetail => "owner-detail",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::PetList => "Pets",
            Section::OwnerList => "Owners",
            Section::AddPet => "Add pet",
            Section::AddOwner => "Add owner",
            Section::AddRecord => "Add health record",
            Section::PetDetail => "Pet",
            Section::OwnerDetail => "Owner",
        }
    }

    /// Containers painted inside this section, top to bottom.
    pub fn containers(&self) -> &'static [Container] {
        match self {
            Section::PetList => &[Container::PetsList],
            Section::OwnerList => &[Container::OwnersList],
            Section::AddPet => &[Container::OwnerSelect],
            Section::AddOwner => &[],
            Section::AddRecord => &[Container::PetSelect],
            Section::PetDetail => &[
                Container::PetDetail,
                Container::HealthRecords,
                Container::HealthChart,
            ],
            Section::OwnerDetail => &[Container::OwnerDetail, Container::OwnerPets],
        }
    }

    pub fn form(&self) -> Option<FormKind> {
        match self {
            Section::AddPet => Some(FormKind::AddPet),
            Section::AddOwner => Some(FormKind::AddOwner),
            Section::AddRecord => Some(FormKind::AddRecord),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named region of the layout that receives rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Container {
    PetsList,
    OwnersList,
    OwnerSelect,
    PetSelect,
    PetDetail,
    HealthRecords,
    HealthChart,
    OwnerDetail,
    OwnerPets,
}

impl Container {
    pub fn as_str(&self) -> &'static str {
        match self {
            Container::PetsList => "pets-list",
            Container::OwnersList => "owners-list",
            Container::OwnerSelect => "owner-select",
            Container::PetSelect => "pet-select",
            Container::PetDetail => "pet-detail",
            Container::HealthRecords => "health-records",
            Container::HealthChart => "health-chart",
            Container::OwnerDetail => "owner-detail",
            Container::OwnerPets => "owner-pets",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Container::PetsList => Section::PetList,
            Container::OwnersList => Section::OwnerList,
            Container::OwnerSelect => Section::AddPet,
            Container::PetSelect => Section::AddRecord,
            Container::PetDetail | Container::HealthRecords | Container::HealthChart => {
                Section::PetDetail
            }
            Container::OwnerDetail | Container::OwnerPets => Section::OwnerDetail,
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the user asked to go. Detail sections carry the entity id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    PetList,
    OwnerList,
    AddPet,
    AddOwner,
    AddRecord,
    PetDetail(PetId),
    OwnerDetail(OwnerId),
}

impl Destination {
    pub fn section(&self) -> Section {
        match self {
            Destination::PetList => Section::PetList,
            Destination::OwnerList => Section::OwnerList,
            Destination::AddPet => Section::AddPet,
            Destination::AddOwner => Section::AddOwner,
            Destination::AddRecord => Section::AddRecord,
            Destination::PetDetail(_) => Section::PetDetail,
            Destination::OwnerDetail(_) => Section::OwnerDetail,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub previous: Option<Section>,
    pub next: Section,
}

#[derive(Debug, Default)]
pub struct Navigator {
    active: Option<Section>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }

    /// Make `section` the only active section.
    pub fn activate(&mut self, section: Section) -> Transition {
        let previous = self.active.replace(section);
        Transition {
            previous,
            next: section,
        }
    }
}
