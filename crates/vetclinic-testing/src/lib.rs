//! Testing infrastructure for vetclinic integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `Store`: in-memory records that behave like the real service
//! - `FakeApi`: a [`VetApi`](vetclinic_client::VetApi) over a `Store` with a call log and failure injection
//! - `FakeServer`: the same `Store` served over HTTP for running the binary
//! - `TestWorld`: isolated config directory and command builder for the CLI
//! - `fixtures`: sample owners, pets and visits
//! - `assertions`: checks over the CLI's JSON output

pub mod assertions;
pub mod fake_api;
pub mod fake_server;
pub mod fixtures;
pub mod store;
pub mod world;

pub use fake_api::{ApiCall, FakeApi, Failure, Operation};
pub use fake_server::FakeServer;
pub use store::{Rejection, Store};
pub use world::{CliResult, TestWorld};
