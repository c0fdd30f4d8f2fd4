use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use tracing::debug;

use crate::digest::Sha1Digest;
use crate::error::CheckError;

/// Path extractor for `/sha1/{digest}` that only yields validated digests.
/// Anything that is not 40 hex characters is rejected with `400`.
#[derive(Debug, Clone)]
pub struct DigestParam(pub Sha1Digest);

impl<S> FromRequestParts<S> for DigestParam
where
    S: Send + Sync,
{
    type Rejection = CheckError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| CheckError::InvalidDigest)?;
        Sha1Digest::parse(&raw).map(Self).inspect_err(|_| {
            debug!(len = raw.len(), "rejected malformed digest");
        })
    }
}
