//! Contact Storage Module
//!
//! The persistence adapter sitting between the HTTP handlers and the data.
//!
//! ## Core Concepts
//! - **Adapter**: `ContactStore` is the only way handlers read or write contacts.
//!   Exactly one implementation is active per process.
//! - **Ephemeral**: `MemoryStore` keeps contacts in an ordered `Vec` for the process lifetime.
//! - **Durable**: `SledStore` keeps one JSON document per contact in an embedded sled tree.
//! - **Ids**: Each backend assigns ids at insert time; callers only ever hand over drafts.

pub mod durable;
pub mod memory;


use crate::contacts::types::{Contact, ContactDraft, ContactId};
use async_trait::async_trait;
use std::sync::Arc;

pub use durable::SledStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(#[from] sled::Error),

    #[error("failed to encode or decode contact: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("corrupt contact key of length {0}")]
    CorruptKey(usize),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle shared by every request handler.
pub type SharedStore = Arc<dyn ContactStore>;

/// Read/write access to the phonebook.
///
/// Deleting an id that is not stored is not an error; `delete_by_id` reports
/// whether anything was removed so callers can log it.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts, in insertion order.
    async fn list_all(&self) -> StoreResult<Vec<Contact>>;

    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>>;

    async fn delete_by_id(&self, id: ContactId) -> StoreResult<bool>;

    /// Assigns a fresh id to the draft and persists it.
    async fn insert(&self, draft: ContactDraft) -> StoreResult<Contact>;

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.list_all().await?.len())
    }

    /// Short backend name used in logs.
    fn kind(&self) -> &'static str;
}

/// The entries a fresh in-memory phonebook starts with.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new(ContactId(1), "Arto Hellas", "040-123456"),
        Contact::new(ContactId(2), "Ada Lovelace", "39-44-5323523"),
        Contact::new(ContactId(3), "Dan Abramov", "12-43-234345"),
        Contact::new(ContactId(4), "Mary Poppendieck", "39-23-6423122"),
    ]
}
