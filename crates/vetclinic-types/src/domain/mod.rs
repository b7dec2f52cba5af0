mod health;
mod health_record;
mod ids;
mod owner;
mod pet;

pub use health::HealthStatus;
pub use health_record::HealthRecord;
pub use ids::{HealthRecordId, OwnerId, PetId};
pub use owner::Owner;
pub use pet::Pet;
