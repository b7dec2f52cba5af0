use vetclinic_types::{FormFields, HealthRecord, HealthStatus, PetId};

use crate::client::HttpApiClient;
use crate::error::Result;
use crate::response::{ResponseExt, decode, decode_list};

impl HttpApiClient {
    /// Records come back newest visit first.
    #[tracing::instrument(skip(self))]
    pub async fn list_health_records_by_pet(&self, pet_id: PetId) -> Result<Vec<HealthRecord>> {
        let response = self
            .client
            .get(self.url(&format!("/health-records/pet/{}", pet_id)))
            .send()
            .await
            .map_client_error()
            .await?;

        decode_list(response, "list_health_records_by_pet").await
    }

    #[tracing::instrument(skip(self, fields), fields(field_count = fields.len()))]
    pub async fn create_health_record(&self, fields: &FormFields) -> Result<HealthRecord> {
        let response = self
            .client
            .post(self.url("/health-records"))
            .json(fields)
            .send()
            .await
            .map_client_error()
            .await?;

        decode(response, "create_health_record").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_client_error()
            .await?;

        decode(response, "health").await
    }
}
