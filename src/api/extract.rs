use super::error::ApiError;
use crate::contacts::types::NewContact;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};

/// Create-request body.
///
/// A request without a JSON content type, or with an empty body, reads as
/// `{}` and so fails the required-field check. Only a non-empty JSON body
/// that does not parse is rejected as malformed.
#[derive(Debug, Clone, Default)]
pub struct ContactPayload(pub NewContact);

pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json")
}

/// Decodes a raw body the way the create handler sees it.
pub fn decode_new_contact(is_json: bool, body: &[u8]) -> Result<NewContact, ApiError> {
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewContact::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        ApiError::InvalidBody(format!("Failed to parse the request body as JSON: {}", e))
    })
}

#[async_trait]
impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(req.headers());
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.body_text()))?;

        decode_new_contact(is_json, &body).map(ContactPayload)
    }
}
