// ============================================================================
// TOKEN - reads the user id out of a JWT payload
// ============================================================================
// The signature is never checked here; the backend does that. We only need
// the `id` claim when the login response or stored record lacks one.
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::error::SessionError;

#[derive(Deserialize)]
struct Claims {
    #[serde(default, alias = "_id")]
    id: Option<String>,
}

/// Decodes the middle segment of `header.payload.signature` and returns its
/// `id` claim.
pub fn user_id_from_token(token: &str) -> Result<String, SessionError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(SessionError::MissingPayload)?;

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let claims: Claims = serde_json::from_slice(&bytes)?;

    claims
        .id
        .filter(|id| !id.is_empty())
        .ok_or(SessionError::MissingId)
}
