use vetclinic_types::{FormFields, OwnerId, Pet, PetId};

use crate::client::HttpApiClient;
use crate::error::Result;
use crate::response::{ResponseExt, decode, decode_list};

impl HttpApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_pets(&self) -> Result<Vec<Pet>> {
        let response = self
            .client
            .get(self.url("/pets"))
            .send()
            .await
            .map_client_error()
            .await?;

        decode_list(response, "list_pets").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_pet(&self, id: PetId) -> Result<Pet> {
        let response = self
            .client
            .get(self.url(&format!("/pets/{}", id)))
            .send()
            .await
            .map_client_error()
            .await?;

        decode(response, "get_pet").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_pets_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Pet>> {
        let response = self
            .client
            .get(self.url(&format!("/pets/owner/{}", owner_id)))
            .send()
            .await
            .map_client_error()
            .await?;

        decode_list(response, "list_pets_by_owner").await
    }

    #[tracing::instrument(skip(self, fields), fields(field_count = fields.len()))]
    pub async fn create_pet(&self, fields: &FormFields) -> Result<Pet> {
        let response = self
            .client
            .post(self.url("/pets"))
            .json(fields)
            .send()
            .await
            .map_client_error()
            .await?;

        decode(response, "create_pet").await
    }
}
