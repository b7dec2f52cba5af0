//! vetclinic-client: typed access to the veterinary records REST API.
//!
//! # Overview
//!
//! The records service exposes three collections (pets, owners,
//! health-records) plus two relationship queries (pets of an owner, records
//! of a pet). This crate wraps them behind the [`VetApi`] trait so callers can
//! swap the HTTP implementation for an in-memory one in tests.
//!
//! # Quickstart
//!
//! ```no_run
//! use vetclinic_client::{ClientConfig, HttpApiClient};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpApiClient::new(ClientConfig::new("http://localhost:8000/api"))?;
//!
//! for pet in client.list_pets().await? {
//!     println!("{} ({})", pet.name, pet.species);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error model
//!
//! - Non-2xx answers become [`ClientError::Status`], carrying the server's
//!   `{"error": "..."}` text when present.
//! - Transport faults, including timeouts, become [`ClientError::Transport`].
//! - Bodies that do not match the expected shape become [`ClientError::Decode`].
//!
//! Nothing is retried.

pub mod api;
pub mod client;
pub mod error;
mod health_records;
mod owners;
mod pets;
mod response;

pub use api::VetApi;
pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpApiClient};
pub use error::{ClientError, Result};

pub mod types {
    pub use vetclinic_types::*;
}
