use super::error::ApiError;
use super::extract::ContactPayload;
use crate::contacts::types::{Contact, ContactId};
use crate::contacts::validation::validate_new_contact;
use crate::storage::SharedStore;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::Html,
};

/// Format of the timestamp printed by `/info`.
pub const INFO_TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

pub async fn handle_welcome() -> Html<&'static str> {
    Html("<h1>Welcome to the phonebook app!</h1>")
}

pub async fn handle_list_persons(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let persons = store.list_all().await?;
    tracing::debug!("Listing {} contacts", persons.len());
    Ok(Json(persons))
}

pub async fn handle_get_person(
    Extension(store): Extension<SharedStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    let id: ContactId = raw_id.parse()?;

    match store.find_by_id(id).await? {
        Some(contact) => Ok(Json(contact)),
        None => Err(ApiError::NotFound(id)),
    }
}

/// Removes a contact. Unknown ids still answer 204.
pub async fn handle_delete_person(
    Extension(store): Extension<SharedStore>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: ContactId = raw_id.parse()?;

    if store.delete_by_id(id).await? {
        tracing::info!("Deleted contact {}", id);
    } else {
        tracing::debug!("Delete of unknown contact {} ignored", id);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Validates and stores a new contact.
///
/// Checks run in order: required fields, then case-insensitive name
/// uniqueness. The uniqueness check and the insert are two separate store
/// calls, so concurrent creates with the same name can both succeed.
pub async fn handle_create_person(
    Extension(store): Extension<SharedStore>,
    ContactPayload(input): ContactPayload,
) -> Result<Json<Contact>, ApiError> {
    let existing = store.list_all().await?;
    let draft = validate_new_contact(input, &existing)?;
    let contact = store.insert(draft).await?;

    tracing::info!("Created contact {} ({})", contact.id, contact.name);
    Ok(Json(contact))
}

pub async fn handle_info(Extension(store): Extension<SharedStore>) -> Result<Html<String>, ApiError> {
    let count = store.count().await?;
    let now = chrono::Local::now().format(INFO_TIMESTAMP_FORMAT);

    Ok(Html(format!(
        "<p>Phonebook has info for {} people</p><p>{}</p>",
        count, now
    )))
}

pub async fn handle_unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}
