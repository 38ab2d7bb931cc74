//! Sled-backed contact store.

use super::{ContactStore, StoreError, StoreResult};
use crate::contacts::types::{Contact, ContactDraft, ContactId};

use async_trait::async_trait;
use sled::{Db, IVec};
use std::path::Path;

const PERSONS_TREE_NAME: &str = "persons";

/// Durable phonebook stored in an embedded sled database.
///
/// Keys are big-endian ids, so iterating the tree yields contacts in the
/// order they were inserted. Ids come from sled's monotonic generator and
/// stay unique across restarts.
pub struct SledStore {
    db: Db,
    persons: sled::Tree,
}

impl SledStore {
    /// Open or create a sled database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let db = sled::open(path.as_ref())?;
        Self::with_db(db)
    }

    /// Wrap an already opened database.
    pub fn with_db(db: Db) -> StoreResult<Self> {
        let persons = db.open_tree(PERSONS_TREE_NAME)?;
        Ok(Self { db, persons })
    }

    pub async fn flush(&self) -> StoreResult<()> {
        self.db.flush_async().await?;
        Ok(())
    }

    fn decode(key: &IVec, value: &IVec) -> StoreResult<Contact> {
        let bytes = <[u8; 8]>::try_from(&key[..]).map_err(|_| StoreError::CorruptKey(key.len()))?;
        let mut contact: Contact = serde_json::from_slice(value)?;
        // The key is authoritative for the id.
        contact.id = ContactId::from_be_bytes(bytes);
        Ok(contact)
    }
}

#[async_trait]
impl ContactStore for SledStore {
    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        let mut contacts = Vec::with_capacity(self.persons.len());
        for entry in self.persons.iter() {
            let (key, value) = entry?;
            contacts.push(Self::decode(&key, &value)?);
        }
        Ok(contacts)
    }

    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        let key = id.to_be_bytes();
        match self.persons.get(key)? {
            Some(value) => Ok(Some(Self::decode(&IVec::from(&key[..]), &value)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: ContactId) -> StoreResult<bool> {
        let removed = self.persons.remove(id.to_be_bytes())?;
        if removed.is_some() {
            self.flush().await?;
        }
        Ok(removed.is_some())
    }

    async fn insert(&self, draft: ContactDraft) -> StoreResult<Contact> {
        let id = ContactId(self.db.generate_id()?);
        let contact = Contact::from_draft(id, draft);
        let value = serde_json::to_vec(&contact)?;

        self.persons.insert(id.to_be_bytes(), value)?;
        self.flush().await?;

        tracing::debug!("Stored contact {} in sled", contact.id);
        Ok(contact)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.persons.len())
    }

    fn kind(&self) -> &'static str {
        "sled"
    }
}
