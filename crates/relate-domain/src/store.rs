//! Contact storage trait and in-memory backend

use std::collections::HashMap;
use std::sync::RwLock;

use crate::contact::Contact;

/// The trait that all contact storage backends implement.
///
/// The resolution engine treats the store as an external collaborator:
/// it reads contacts through `list`/`get` and proposes changes through
/// `update`/`delete`, never mutating a contact in place.
pub trait ContactStore: Send + Sync {
    /// List all contacts.
    fn list(&self) -> Result<Vec<Contact>, StoreError>;

    /// Get a contact by ID.
    fn get(&self, id: &str) -> Result<Option<Contact>, StoreError>;

    /// Replace the contact stored under `id`.
    fn update(&self, id: &str, contact: Contact) -> Result<(), StoreError>;

    /// Delete a contact by ID.
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Errors from the contact store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// In-memory contact store implementation
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl InMemoryContactStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            contacts: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a contact, returning its ID
    pub fn insert(&self, contact: Contact) -> Result<String, StoreError> {
        let id = contact.id.clone();
        self.write()?.insert(id.clone(), contact);
        Ok(id)
    }

    /// Get the number of contacts in the store
    pub fn len(&self) -> usize {
        self.contacts.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, Contact>>, StoreError> {
        self.contacts
            .read()
            .map_err(|e| StoreError::Storage(e.to_string()))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, Contact>>, StoreError> {
        self.contacts
            .write()
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}

impl ContactStore for InMemoryContactStore {
    fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let mut contacts: Vec<Contact> = self.read()?.values().cloned().collect();
        // Deterministic output: newest first, ties broken by id
        contacts.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(contacts)
    }

    fn get(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        Ok(self.read()?.get(id).cloned())
    }

    fn update(&self, id: &str, contact: Contact) -> Result<(), StoreError> {
        let mut contacts = self.write()?;
        if !contacts.contains_key(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        contacts.insert(id.to_string(), contact);
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut contacts = self.write()?;
        if contacts.remove(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
