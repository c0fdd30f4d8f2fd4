use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::digest::Sha1Digest;
use crate::middleware::{CleartextParam, DigestParam};
use crate::{CheckError, router::LookupState};

/// GET /sha1/{digest} -> 406 if the digest is breached, 204 otherwise.
pub async fn sha1_handler(
    State(state): State<LookupState>,
    DigestParam(digest): DigestParam,
) -> Result<StatusCode, CheckError> {
    lookup(&state, &digest).await
}

/// GET /cleartext/{*password} -> hashes the password, then answers as `/sha1`.
pub async fn cleartext_handler(
    State(state): State<LookupState>,
    CleartextParam(password): CleartextParam,
) -> Result<StatusCode, CheckError> {
    let digest = Sha1Digest::of_bytes(&password);
    lookup(&state, &digest).await
}

async fn lookup(state: &LookupState, digest: &Sha1Digest) -> Result<StatusCode, CheckError> {
    let found = state.storage.exists(digest).await?;
    debug!(%digest, found, "password lookup");
    Ok(status_for(found))
}

/// Found means the password is not acceptable for use.
pub fn status_for(found: bool) -> StatusCode {
    if found {
        StatusCode::NOT_ACCEPTABLE
    } else {
        StatusCode::NO_CONTENT
    }
}
