//! In-memory records behaving like the veterinary records service.
//!
//! Both [`FakeApi`](crate::FakeApi) and [`FakeServer`](crate::FakeServer)
//! sit on top of this store, so the controller tests and the binary tests
//! see the same server-side rules: string form values parsed into numbers,
//! unique owner emails, `owner_name` filled in on the pet listings, and
//! visits ordered newest first.

use vetclinic_types::{
    FormFields, HealthRecord, HealthRecordId, HealthStatus, Owner, OwnerId, Pet, PetId,
};

const INVALID_PAYLOAD: &str = "Invalid request payload";

/// A refusal the service would answer with `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub message: String,
}

impl Rejection {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn bad_request() -> Self {
        Self::new(400, INVALID_PAYLOAD)
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    owners: Vec<Owner>,
    pets: Vec<Pet>,
    records: Vec<HealthRecord>,
    next_id: i64,
    created_at: String,
    database_connected: bool,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            owners: Vec::new(),
            pets: Vec::new(),
            records: Vec::new(),
            next_id: 1,
            created_at: "2024-05-01T09:00:00Z".to_string(),
            database_connected: true,
        }
    }

    /// Timestamp stamped on every row created from now on.
    pub fn set_created_at(&mut self, timestamp: impl Into<String>) {
        self.created_at = timestamp.into();
    }

    pub fn set_database_connected(&mut self, connected: bool) {
        self.database_connected = connected;
    }

    pub fn owners(&self) -> Vec<Owner> {
        self.owners.clone()
    }

    pub fn owner(&self, id: OwnerId) -> Result<Owner, Rejection> {
        self.owners
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| Rejection::new(404, "Owner not found"))
    }

    /// All pets with the owner's display name filled in.
    pub fn pets(&self) -> Vec<Pet> {
        self.pets.iter().map(|p| self.with_owner_name(p)).collect()
    }

    pub fn pet(&self, id: PetId) -> Result<Pet, Rejection> {
        self.pets
            .iter()
            .find(|p| p.id == id)
            .map(|p| self.with_owner_name(p))
            .ok_or_else(|| Rejection::new(404, "Pet not found"))
    }

    /// Pets of one owner. Like the real service this listing does not
    /// carry `owner_name`.
    pub fn pets_by_owner(&self, owner_id: OwnerId) -> Vec<Pet> {
        self.pets
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect()
    }

    /// Visits of one pet, newest first.
    pub fn records_by_pet(&self, pet_id: PetId) -> Vec<HealthRecord> {
        let mut records: Vec<HealthRecord> = self
            .records
            .iter()
            .filter(|r| r.pet_id == pet_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));
        records
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            timestamp: Some(self.created_at.clone()),
            database: Some(if self.database_connected {
                "connected".to_string()
            } else {
                "disconnected".to_string()
            }),
        }
    }

    pub fn create_owner(&mut self, fields: &FormFields) -> Result<Owner, Rejection> {
        let email = text(fields, "email").unwrap_or_default();
        if self.owners.iter().any(|o| o.email == email) {
            return Err(Rejection::new(
                500,
                "pq: duplicate key value violates unique constraint \"owners_email_key\"",
            ));
        }

        let owner = Owner {
            id: OwnerId::new(self.allocate_id()),
            first_name: text(fields, "first_name").unwrap_or_default(),
            last_name: text(fields, "last_name").unwrap_or_default(),
            email,
            phone: text(fields, "phone"),
            address: text(fields, "address"),
            created_at: Some(self.created_at.clone()),
        };
        self.owners.push(owner.clone());
        Ok(owner)
    }

    /// Stores the pet and answers with the row as inserted, without
    /// `owner_name`, the way the service does.
    pub fn create_pet(&mut self, fields: &FormFields) -> Result<Pet, Rejection> {
        let owner_id = number::<i64>(fields, "owner_id")?
            .map(OwnerId::new)
            .unwrap_or(OwnerId::new(0));
        if !self.owners.iter().any(|o| o.id == owner_id) {
            return Err(Rejection::new(
                500,
                "pq: insert or update on table \"pets\" violates foreign key constraint \"pets_owner_id_fkey\"",
            ));
        }

        let pet = Pet {
            id: PetId::new(self.allocate_id()),
            owner_id,
            name: text(fields, "name").unwrap_or_default(),
            species: text(fields, "species").unwrap_or_default(),
            breed: text(fields, "breed"),
            date_of_birth: text(fields, "date_of_birth"),
            color: text(fields, "color"),
            microchip_id: text(fields, "microchip_id"),
            owner_name: None,
            created_at: Some(self.created_at.clone()),
        };
        self.pets.push(pet.clone());
        Ok(pet)
    }

    pub fn create_health_record(&mut self, fields: &FormFields) -> Result<HealthRecord, Rejection> {
        let pet_id = number::<i64>(fields, "pet_id")?
            .map(PetId::new)
            .unwrap_or(PetId::new(0));
        if !self.pets.iter().any(|p| p.id == pet_id) {
            return Err(Rejection::new(
                500,
                "pq: insert or update on table \"health_records\" violates foreign key constraint \"health_records_pet_id_fkey\"",
            ));
        }

        let record = HealthRecord {
            id: HealthRecordId::new(self.allocate_id()),
            pet_id,
            visit_date: text(fields, "visit_date").unwrap_or_default(),
            weight: number(fields, "weight")?.filter(|w: &f64| *w != 0.0),
            temperature: number(fields, "temperature")?.filter(|t: &f64| *t != 0.0),
            heart_rate: number(fields, "heart_rate")?.filter(|h: &u32| *h != 0),
            respiratory_rate: number(fields, "respiratory_rate")?.filter(|r: &u32| *r != 0),
            diagnosis: text(fields, "diagnosis"),
            treatment: text(fields, "treatment"),
            notes: text(fields, "notes"),
            next_visit_date: text(fields, "next_visit_date"),
            created_at: Some(self.created_at.clone()),
        };
        self.records.push(record.clone());
        Ok(record)
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn with_owner_name(&self, pet: &Pet) -> Pet {
        let mut pet = pet.clone();
        pet.owner_name = self
            .owners
            .iter()
            .find(|o| o.id == pet.owner_id)
            .map(Owner::full_name);
        pet
    }
}

fn text(fields: &FormFields, name: &str) -> Option<String> {
    fields
        .get(name)
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

fn number<T: std::str::FromStr>(fields: &FormFields, name: &str) -> Result<Option<T>, Rejection> {
    match fields.get(name).map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw.parse().map(Some).map_err(|_| Rejection::bad_request()),
        None => Ok(None),
    }
}
