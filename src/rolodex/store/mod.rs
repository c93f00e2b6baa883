//! # Storage Layer
//!
//! Contacts reach the view through the [`ContactSource`] trait, so the table
//! logic never knows whether its rows come from the built-in sample, a JSON
//! file, or a future backend.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a fixed list held in memory (the built-in
//!   sample, and tests)
//! - [`fs::FileStore`]: a JSON array of contacts read once at open time
//!
//! Both validate that contact ids are unique when they are built. Sources are
//! read-only: nothing in rolodex creates, edits or deletes contacts.

use crate::commands::filter::filter_contacts;
use crate::error::{Result, RolodexError};
use crate::model::Contact;
use std::collections::HashSet;

pub mod fs;
pub mod memory;

/// Read-only access to a list of contacts.
pub trait ContactSource {
    /// All contacts, in source order
    fn list(&self) -> Result<Vec<Contact>>;

    /// Contacts matching a search query, in source order
    fn filter(&self, query: &str) -> Result<Vec<Contact>> {
        Ok(filter_contacts(&self.list()?, query))
    }

    /// A single contact by id
    fn get(&self, id: &str) -> Result<Contact> {
        self.list()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| RolodexError::ContactNotFound(id.to_string()))
    }
}

pub(crate) fn ensure_unique_ids(contacts: &[Contact]) -> Result<()> {
    let mut seen = HashSet::new();
    for contact in contacts {
        if !seen.insert(contact.id.as_str()) {
            return Err(RolodexError::DuplicateId(contact.id.clone()));
        }
    }
    Ok(())
}

impl<T: ContactSource + ?Sized> ContactSource for Box<T> {
    fn list(&self) -> Result<Vec<Contact>> {
        (**self).list()
    }

    fn filter(&self, query: &str) -> Result<Vec<Contact>> {
        (**self).filter(query)
    }

    fn get(&self, id: &str) -> Result<Contact> {
        (**self).get(id)
    }
}
