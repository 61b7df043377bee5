use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Header carrying the caller identity established by the session
/// collaborator in front of this service.
pub const IDENTITY_HEADER: &str = "x-user-email";

/// The caller's identity, if any. Extraction never fails; absent or blank
/// identities resolve to `None` and the core falls back to its anonymous
/// sentinel.
pub struct Identity(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(IDENTITY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(Identity(user))
    }
}
