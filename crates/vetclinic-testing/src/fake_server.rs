//! The in-memory [`Store`] served over HTTP.
//!
//! The server speaks the same dialect as the real service: `null` for empty
//! listings, `{"error": "..."}` bodies on failure, `201 Created` on inserts.
//! It runs on its own thread and runtime so it can back tests that spawn the
//! `vetclinic` binary as well as async client tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::oneshot;
use vetclinic_types::{FormFields, OwnerId, PetId};

use crate::store::{Rejection, Store};

type Shared = Arc<Mutex<Store>>;

pub struct FakeServer {
    addr: SocketAddr,
    store: Shared,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl FakeServer {
    /// Bind an ephemeral port on localhost and start serving `store`.
    pub fn start(store: Store) -> std::io::Result<Self> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let store = Arc::new(Mutex::new(store));
        let app = router(store.clone());
        let (shutdown, signal) = oneshot::channel::<()>();

        let thread = std::thread::spawn(move || {
            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::from_std(listener) {
                    Ok(listener) => listener,
                    Err(e) => {
                        eprintln!("fake server: cannot adopt listener: {}", e);
                        return;
                    }
                };
                let served = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = signal.await;
                    })
                    .await;
                if let Err(e) = served {
                    eprintln!("fake server stopped: {}", e);
                }
            });
        });

        Ok(Self {
            addr,
            store,
            shutdown: Some(shutdown),
            thread: Some(thread),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL including the `/api` prefix, as the client expects it.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn store(&self) -> MutexGuard<'_, Store> {
        lock(&self.store)
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn lock(store: &Shared) -> MutexGuard<'_, Store> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn router(store: Shared) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/pets", get(list_pets).post(create_pet))
        .route("/api/pets/{id}", get(get_pet))
        .route("/api/pets/owner/{owner_id}", get(list_pets_by_owner))
        .route("/api/owners", get(list_owners).post(create_owner))
        .route("/api/owners/{id}", get(get_owner))
        .route("/api/health-records", axum::routing::post(create_health_record))
        .route("/api/health-records/pet/{pet_id}", get(list_health_records))
        .with_state(store)
}

fn error(status: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": message }))).into_response()
}

fn reject(rejection: Rejection) -> Response {
    error(rejection.status, &rejection.message)
}

/// Empty listings are `null` on the wire.
fn listing<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        Json(Value::Null).into_response()
    } else {
        Json(items).into_response()
    }
}

fn created<T: Serialize>(result: Result<T, Rejection>) -> Response {
    match result {
        Ok(entity) => (StatusCode::CREATED, Json(entity)).into_response(),
        Err(rejection) => reject(rejection),
    }
}

fn form(body: &Bytes) -> Option<FormFields> {
    serde_json::from_slice(body).ok()
}

async fn health(State(store): State<Shared>) -> Response {
    Json(lock(&store).health()).into_response()
}

async fn list_pets(State(store): State<Shared>) -> Response {
    listing(lock(&store).pets())
}

async fn get_pet(State(store): State<Shared>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<PetId>() else {
        return error(400, "Invalid pet ID");
    };
    match lock(&store).pet(id) {
        Ok(pet) => Json(pet).into_response(),
        Err(rejection) => reject(rejection),
    }
}

async fn list_pets_by_owner(State(store): State<Shared>, Path(owner_id): Path<String>) -> Response {
    let Ok(owner_id) = owner_id.parse::<OwnerId>() else {
        return error(400, "Invalid owner ID");
    };
    listing(lock(&store).pets_by_owner(owner_id))
}

async fn create_pet(State(store): State<Shared>, body: Bytes) -> Response {
    let Some(fields) = form(&body) else {
        return error(400, "Invalid request payload");
    };
    created(lock(&store).create_pet(&fields))
}

async fn list_owners(State(store): State<Shared>) -> Response {
    listing(lock(&store).owners())
}

async fn get_owner(State(store): State<Shared>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<OwnerId>() else {
        return error(400, "Invalid owner ID");
    };
    match lock(&store).owner(id) {
        Ok(owner) => Json(owner).into_response(),
        Err(rejection) => reject(rejection),
    }
}

async fn create_owner(State(store): State<Shared>, body: Bytes) -> Response {
    let Some(fields) = form(&body) else {
        return error(400, "Invalid request payload");
    };
    created(lock(&store).create_owner(&fields))
}

async fn list_health_records(State(store): State<Shared>, Path(pet_id): Path<String>) -> Response {
    let Ok(pet_id) = pet_id.parse::<PetId>() else {
        return error(400, "Invalid pet ID");
    };
    listing(lock(&store).records_by_pet(pet_id))
}

async fn create_health_record(State(store): State<Shared>, body: Bytes) -> Response {
    let Some(fields) = form(&body) else {
        return error(400, "Invalid request payload");
    };
    created(lock(&store).create_health_record(&fields))
}
