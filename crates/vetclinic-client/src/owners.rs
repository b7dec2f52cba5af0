use vetclinic_types::{FormFields, Owner, OwnerId};

use crate::client::HttpApiClient;
use crate::error::Result;
use crate::response::{ResponseExt, decode, decode_list};

impl HttpApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_owners(&self) -> Result<Vec<Owner>> {
        let response = self
            .client
            .get(self.url("/owners"))
            .send()
            .await
            .map_client_error()
            .await?;

        decode_list(response, "list_owners").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_owner(&self, id: OwnerId) -> Result<Owner> {
        let response = self
            .client
            .get(self.url(&format!("/owners/{}", id)))
            .send()
            .await
            .map_client_error()
            .await?;

        decode(response, "get_owner").await
    }

    #[tracing::instrument(skip(self, fields), fields(field_count = fields.len()))]
    pub async fn create_owner(&self, fields: &FormFields) -> Result<Owner> {
        let response = self
            .client
            .post(self.url("/owners"))
            .json(fields)
            .send()
            .await
            .map_client_error()
            .await?;

        decode(response, "create_owner").await
    }
}
