use crate::model::Contact;
use std::collections::BTreeSet;

/// Ids of the contacts ticked in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header checkbox: selects the whole filtered set (every page) or clears.
    pub fn select_all(&mut self, filtered: &[Contact], checked: bool) {
        self.ids.clear();
        if checked {
            self.ids.extend(filtered.iter().map(|c| c.id.clone()));
        }
    }

    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Header checkbox state: every filtered contact selected, and at least one.
    pub fn all_checked(&self, filtered: &[Contact]) -> bool {
        !filtered.is_empty() && filtered.iter().all(|c| self.is_selected(&c.id))
    }

    /// Drops ids that are no longer part of `filtered`.
    pub fn retain_visible(&mut self, filtered: &[Contact]) {
        let visible: BTreeSet<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
        self.ids.retain(|id| visible.contains(id.as_str()));
    }

    /// The selected contacts, in the order they appear in `contacts`.
    pub fn pick<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        contacts.iter().filter(|c| self.is_selected(&c.id)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
