//! In-memory [`VetApi`] for controller tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use vetclinic_client::{ClientError, Result, VetApi};
use vetclinic_types::{FormFields, HealthRecord, HealthStatus, Owner, OwnerId, Pet, PetId};

use crate::store::{Rejection, Store};

/// One operation of the API, used as the key for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListPets,
    GetPet,
    ListPetsByOwner,
    CreatePet,
    ListOwners,
    GetOwner,
    CreateOwner,
    ListHealthRecords,
    CreateHealthRecord,
    Health,
}

/// A recorded call, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListPets,
    GetPet(PetId),
    ListPetsByOwner(OwnerId),
    CreatePet(FormFields),
    ListOwners,
    GetOwner(OwnerId),
    CreateOwner(FormFields),
    ListHealthRecords(PetId),
    CreateHealthRecord(FormFields),
    Health,
}

impl ApiCall {
    pub fn operation(&self) -> Operation {
        match self {
            ApiCall::ListPets => Operation::ListPets,
            ApiCall::GetPet(_) => Operation::GetPet,
            ApiCall::ListPetsByOwner(_) => Operation::ListPetsByOwner,
            ApiCall::CreatePet(_) => Operation::CreatePet,
            ApiCall::ListOwners => Operation::ListOwners,
            ApiCall::GetOwner(_) => Operation::GetOwner,
            ApiCall::CreateOwner(_) => Operation::CreateOwner,
            ApiCall::ListHealthRecords(_) => Operation::ListHealthRecords,
            ApiCall::CreateHealthRecord(_) => Operation::CreateHealthRecord,
            ApiCall::Health => Operation::Health,
        }
    }
}

/// How an injected failure surfaces to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The server answered with a non-2xx status.
    Rejected { status: u16, message: Option<String> },
    /// The server could not be reached.
    Unreachable,
    /// The server answered 2xx with a body that does not decode.
    Malformed,
}

impl Failure {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Failure::Rejected {
            status,
            message: Some(message.into()),
        }
    }

    fn into_error(self, operation: Operation) -> ClientError {
        match self {
            Failure::Rejected { status, message } => ClientError::Status { status, message },
            Failure::Unreachable => {
                ClientError::Generic(anyhow::anyhow!("connection refused during {:?}", operation))
            }
            Failure::Malformed => ClientError::Decode {
                operation: "fake_api",
                details: "expected value at line 1 column 1".to_string(),
            },
        }
    }
}

impl From<Rejection> for ClientError {
    fn from(rejection: Rejection) -> Self {
        ClientError::Status {
            status: rejection.status,
            message: Some(rejection.message),
        }
    }
}

/// [`VetApi`] over an in-memory [`Store`].
///
/// Clones share the store, the call log and the injected failures, so a
/// test can keep one handle while the controller owns another.
#[derive(Clone, Default)]
pub struct FakeApi {
    store: Arc<Mutex<Store>>,
    calls: Arc<Mutex<Vec<ApiCall>>>,
    failures: Arc<Mutex<HashMap<Operation, Failure>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            ..Default::default()
        }
    }

    /// Direct access to the records, bypassing the call log.
    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().expect("store lock poisoned")
    }

    /// Make every later call of `operation` fail until cleared.
    pub fn fail(&self, operation: Operation, failure: Failure) {
        self.failures
            .lock()
            .expect("failures lock poisoned")
            .insert(operation, failure);
    }

    pub fn clear_failures(&self) {
        self.failures.lock().expect("failures lock poisoned").clear();
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    pub fn count(&self, operation: Operation) -> usize {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .iter()
            .filter(|c| c.operation() == operation)
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().expect("calls lock poisoned").clear();
    }

    fn record(&self, call: ApiCall) -> Result<()> {
        let operation = call.operation();
        self.calls.lock().expect("calls lock poisoned").push(call);

        let failure = self
            .failures
            .lock()
            .expect("failures lock poisoned")
            .get(&operation)
            .cloned();
        match failure {
            Some(failure) => Err(failure.into_error(operation)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl VetApi for FakeApi {
    async fn list_pets(&self) -> Result<Vec<Pet>> {
        self.record(ApiCall::ListPets)?;
        Ok(self.store().pets())
    }

    async fn get_pet(&self, id: PetId) -> Result<Pet> {
        self.record(ApiCall::GetPet(id))?;
        Ok(self.store().pet(id)?)
    }

    async fn list_pets_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Pet>> {
        self.record(ApiCall::ListPetsByOwner(owner_id))?;
        Ok(self.store().pets_by_owner(owner_id))
    }

    async fn create_pet(&self, fields: &FormFields) -> Result<Pet> {
        self.record(ApiCall::CreatePet(fields.clone()))?;
        Ok(self.store().create_pet(fields)?)
    }

    async fn list_owners(&self) -> Result<Vec<Owner>> {
        self.record(ApiCall::ListOwners)?;
        Ok(self.store().owners())
    }

    async fn get_owner(&self, id: OwnerId) -> Result<Owner> {
        self.record(ApiCall::GetOwner(id))?;
        Ok(self.store().owner(id)?)
    }

    async fn create_owner(&self, fields: &FormFields) -> Result<Owner> {
        self.record(ApiCall::CreateOwner(fields.clone()))?;
        Ok(self.store().create_owner(fields)?)
    }

    async fn list_health_records_by_pet(&self, pet_id: PetId) -> Result<Vec<HealthRecord>> {
        self.record(ApiCall::ListHealthRecords(pet_id))?;
        Ok(self.store().records_by_pet(pet_id))
    }

    async fn create_health_record(&self, fields: &FormFields) -> Result<HealthRecord> {
        self.record(ApiCall::CreateHealthRecord(fields.clone()))?;
        Ok(self.store().create_health_record(fields)?)
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.record(ApiCall::Health)?;
        Ok(self.store().health())
    }
}
