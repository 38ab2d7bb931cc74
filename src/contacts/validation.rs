use super::types::{Contact, ContactDraft, NewContact};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The name or number is missing")]
    MissingField,

    #[error("The name {0} already exists in the phonebook")]
    DuplicateName(String),
}

/// Checks that both `name` and `phoneNumber` were supplied and are non-empty.
pub fn require_fields(input: NewContact) -> Result<ContactDraft, ValidationError> {
    match (input.name, input.phone_number) {
        (Some(name), Some(phone_number)) if !name.is_empty() && !phone_number.is_empty() => {
            Ok(ContactDraft { name, phone_number })
        }
        _ => Err(ValidationError::MissingField),
    }
}

/// Rejects a draft whose name matches an existing contact, ignoring case.
pub fn ensure_unique_name(
    draft: &ContactDraft,
    existing: &[Contact],
) -> Result<(), ValidationError> {
    let wanted = draft.name.to_uppercase();
    if existing.iter().any(|c| c.name.to_uppercase() == wanted) {
        return Err(ValidationError::DuplicateName(draft.name.clone()));
    }
    Ok(())
}

/// Runs both create-time checks in order: fields first, then uniqueness.
pub fn validate_new_contact(
    input: NewContact,
    existing: &[Contact],
) -> Result<ContactDraft, ValidationError> {
    let draft = require_fields(input)?;
    ensure_unique_name(&draft, existing)?;
    Ok(draft)
}
