use anyhow::Result;
use vetclinic_types::{FormFields, OwnerId, PetId};

use super::ensure;
use crate::app::{App, Destination, FormKind};

pub async fn list_pets(app: &mut App) -> Result<()> {
    ensure(app.navigate(Destination::PetList).await, "Loading pets")
}

pub async fn show_pet(app: &mut App, id: PetId) -> Result<()> {
    ensure(
        app.navigate(Destination::PetDetail(id)).await,
        &format!("Loading pet {}", id),
    )
}

pub async fn list_owners(app: &mut App) -> Result<()> {
    ensure(app.navigate(Destination::OwnerList).await, "Loading owners")
}

pub async fn show_owner(app: &mut App, id: OwnerId) -> Result<()> {
    ensure(
        app.navigate(Destination::OwnerDetail(id)).await,
        &format!("Loading owner {}", id),
    )
}

/// Show a blank form with its dropdown filled in.
pub async fn new_form(app: &mut App, kind: FormKind) -> Result<()> {
    let choices = match kind {
        FormKind::AddPet => app.load_owner_select().await,
        FormKind::AddRecord => app.load_pet_select().await,
        FormKind::AddOwner => crate::app::Outcome::Done,
    };
    let destination = match kind {
        FormKind::AddPet => Destination::AddPet,
        FormKind::AddOwner => Destination::AddOwner,
        FormKind::AddRecord => Destination::AddRecord,
    };
    app.navigate(destination).await;
    ensure(choices, "Loading choices")
}

pub async fn add(app: &mut App, kind: FormKind, fields: &FormFields) -> Result<()> {
    let what = match kind {
        FormKind::AddPet => "Adding the pet",
        FormKind::AddOwner => "Adding the owner",
        FormKind::AddRecord => "Adding the health record",
    };
    ensure(app.submit(kind, fields).await, what)
}
