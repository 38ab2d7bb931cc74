use super::{ContactStore, StoreResult};
use crate::contacts::identity::generate_id;
use crate::contacts::types::{Contact, ContactDraft, ContactId};

use async_trait::async_trait;
use parking_lot::RwLock;

/// Ephemeral phonebook held in process memory.
///
/// Each operation takes the lock for its whole body, so two mutations never
/// interleave. Ids come from [`generate_id`] without a collision check.
pub struct MemoryStore {
    persons: RwLock<Vec<Contact>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            persons: RwLock::new(contacts),
        }
    }

    pub fn len(&self) -> usize {
        self.persons.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.read().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.persons.read().clone())
    }

    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        Ok(self.persons.read().iter().find(|c| c.id == id).cloned())
    }

    async fn delete_by_id(&self, id: ContactId) -> StoreResult<bool> {
        let mut persons = self.persons.write();
        let before = persons.len();
        persons.retain(|c| c.id != id);
        Ok(persons.len() != before)
    }

    async fn insert(&self, draft: ContactDraft) -> StoreResult<Contact> {
        let contact = Contact::from_draft(generate_id(), draft);
        self.persons.write().push(contact.clone());
        tracing::debug!("Stored contact {} in memory", contact.id);
        Ok(contact)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.len())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
