use axum::{Router, routing::get};

use crate::db::PwdListStorage;
use crate::handlers::lookup::{cleartext_handler, sha1_handler};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct LookupState {
    pub storage: PwdListStorage,
}

impl LookupState {
    pub fn new(storage: PwdListStorage) -> Self {
        Self { storage }
    }
}

pub fn lookup_router(state: LookupState) -> Router {
    Router::new()
        .route("/sha1/{digest}", get(sha1_handler))
        // catch-all so passwords containing '/' still reach the handler
        .route("/cleartext/{*password}", get(cleartext_handler))
        .with_state(state)
}
