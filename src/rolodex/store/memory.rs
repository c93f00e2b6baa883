use super::{ensure_unique_ids, ContactSource};
use crate::error::Result;
use crate::model::Contact;
use crate::sample::sample_contacts;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
}

impl InMemoryStore {
    pub fn new(contacts: Vec<Contact>) -> Result<Self> {
        ensure_unique_ids(&contacts)?;
        Ok(Self { contacts })
    }

    /// The nine built-in contacts.
    pub fn sample() -> Self {
        Self {
            contacts: sample_contacts(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl ContactSource for InMemoryStore {
    fn list(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        contacts: Vec<Contact>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                contacts: Vec::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            let start = self.contacts.len();
            for i in start..start + count {
                let n = i + 1;
                self.contacts.push(
                    Contact::new(
                        n.to_string(),
                        format!("Contact {n}"),
                        format!("contact{n}@example.com"),
                        format!("+100 00 {n:04}"),
                    )
                    .with_date_created("1 Jan, 2021"),
                );
            }
            self
        }

        pub fn with_tagged(mut self, id: &str, name: &str, tags: &[&str]) -> Self {
            self.contacts.push(
                Contact::new(id, name, format!("{id}@example.com"), "+000")
                    .with_tags(tags.iter().copied()),
            );
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::new(self.contacts).expect("fixture ids are unique")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::error::RolodexError;

    #[test]
    fn sample_lists_nine() {
        let store = InMemoryStore::sample();
        assert_eq!(store.list().unwrap().len(), 9);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let contacts = vec![
            Contact::new("1", "A", "a@x", "1"),
            Contact::new("1", "B", "b@x", "2"),
        ];
        let err = InMemoryStore::new(contacts).unwrap_err();
        assert!(matches!(err, RolodexError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn default_filter_uses_substring_match() {
        let store = InMemoryStore::sample();
        let found = store.filter("jampack.com").unwrap();
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn get_by_id() {
        let store = StoreFixture::new().with_contacts(3).build();
        assert_eq!(store.get("2").unwrap().name, "Contact 2");
        assert!(matches!(
            store.get("42"),
            Err(RolodexError::ContactNotFound(_))
        ));
    }

    #[test]
    fn fixture_appends_tagged_contacts() {
        let store = StoreFixture::new()
            .with_contacts(2)
            .with_tagged("vip", "Vera", &["Vip"])
            .build();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("vip").unwrap().tags, vec!["Vip"]);
    }
}
