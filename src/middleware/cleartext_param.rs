use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};
use percent_encoding::percent_decode_str;

pub const CLEARTEXT_PREFIX: &str = "/cleartext/";

/// Raw password bytes taken from the path of `/cleartext/{*password}`.
///
/// The segment is URL-decoded the way form data is (`+` is a space, `%XX`
/// is one byte) and never rejected: bytes that are not valid UTF-8 are still
/// a password.
#[derive(Debug, Clone)]
pub struct CleartextParam(pub Vec<u8>);

impl<S> FromRequestParts<S> for CleartextParam
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .uri
            .path()
            .strip_prefix(CLEARTEXT_PREFIX)
            .ok_or(StatusCode::NOT_FOUND)?;
        Ok(Self(url_decode(raw)))
    }
}

/// Decode `+` to space, then `%XX` escapes to bytes. A literal plus arrives
/// as `%2B` and survives.
pub fn url_decode(raw: &str) -> Vec<u8> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).collect()
}
