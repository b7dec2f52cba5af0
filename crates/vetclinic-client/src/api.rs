use async_trait::async_trait;
use vetclinic_types::{FormFields, HealthRecord, HealthStatus, Owner, OwnerId, Pet, PetId};

use crate::client::HttpApiClient;
use crate::error::Result;

/// Every call the client makes against the records service.
///
/// Each operation is one round trip. Nothing is cached or retried; a non-2xx
/// answer, a transport fault, or an undecodable body is an error of that call.
/// Create operations send the form fields verbatim as the JSON body.
#[async_trait]
pub trait VetApi: Send + Sync {
    async fn list_pets(&self) -> Result<Vec<Pet>>;
    async fn get_pet(&self, id: PetId) -> Result<Pet>;
    async fn list_pets_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Pet>>;
    async fn create_pet(&self, fields: &FormFields) -> Result<Pet>;

    async fn list_owners(&self) -> Result<Vec<Owner>>;
    async fn get_owner(&self, id: OwnerId) -> Result<Owner>;
    async fn create_owner(&self, fields: &FormFields) -> Result<Owner>;

    async fn list_health_records_by_pet(&self, pet_id: PetId) -> Result<Vec<HealthRecord>>;
    async fn create_health_record(&self, fields: &FormFields) -> Result<HealthRecord>;

    async fn health(&self) -> Result<HealthStatus>;
}

#[async_trait]
impl VetApi for HttpApiClient {
    async fn list_pets(&self) -> Result<Vec<Pet>> {
        HttpApiClient::list_pets(self).await
    }

    async fn get_pet(&self, id: PetId) -> Result<Pet> {
        HttpApiClient::get_pet(self, id).await
    }

    async fn list_pets_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Pet>> {
        HttpApiClient::list_pets_by_owner(self, owner_id).await
    }

    async fn create_pet(&self, fields: &FormFields) -> Result<Pet> {
        HttpApiClient::create_pet(self, fields).await
    }

    async fn list_owners(&self) -> Result<Vec<Owner>> {
        HttpApiClient::list_owners(self).await
    }

    async fn get_owner(&self, id: OwnerId) -> Result<Owner> {
        HttpApiClient::get_owner(self, id).await
    }

    async fn create_owner(&self, fields: &FormFields) -> Result<Owner> {
        HttpApiClient::create_owner(self, fields).await
    }

    async fn list_health_records_by_pet(&self, pet_id: PetId) -> Result<Vec<HealthRecord>> {
        HttpApiClient::list_health_records_by_pet(self, pet_id).await
    }

    async fn create_health_record(&self, fields: &FormFields) -> Result<HealthRecord> {
        HttpApiClient::create_health_record(self, fields).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        HttpApiClient::health(self).await
    }
}
