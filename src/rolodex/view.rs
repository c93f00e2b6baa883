//! # Contacts View
//!
//! [`ContactsView`] is the transient state behind the contacts table: the
//! search box, the ticked checkboxes, the sort selector and the pagination
//! cursor. It owns no contacts. Every event is applied against the current
//! contact list and every read goes through [`ContactsView::snapshot`], which
//! derives the visible rows from scratch.
//!
//! Derivation order is fixed: filter, then sort, then paginate.
//!
//! Two behaviors are settled here rather than left to the caller:
//! - Changing the search term returns to page 1 and drops selected ids that
//!   the new filter hides, so the selection is always a subset of the
//!   filtered set.
//! - "Select all" ticks the whole filtered set, not just the current page.

use crate::commands::filter::filter_contacts;
use crate::commands::pagination::{Page, PageSize};
use crate::commands::selection::Selection;
use crate::commands::sort::{sort_contacts, SortKey};
use crate::commands::tags::TagStyle;
use crate::model::Contact;
use serde::Serialize;
use tracing::debug;

/// A discrete UI interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Search(String),
    Toggle { id: String, checked: bool },
    SelectAll(bool),
    PageSize(PageSize),
    NextPage,
    PrevPage,
    GoTo(usize),
    SortBy(SortKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsView {
    search_term: String,
    selection: Selection,
    current_page: usize,
    page_size: PageSize,
    sort_by: SortKey,
}

impl Default for ContactsView {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selection: Selection::new(),
            current_page: 1,
            page_size: PageSize::default(),
            sort_by: SortKey::default(),
        }
    }
}

impl ContactsView {
    pub fn new(page_size: PageSize, sort_by: SortKey) -> Self {
        Self {
            page_size,
            sort_by,
            ..Self::default()
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    /// Filtered and sorted contacts, before pagination.
    pub fn filtered(&self, contacts: &[Contact]) -> Vec<Contact> {
        let mut filtered = filter_contacts(contacts, &self.search_term);
        sort_contacts(&mut filtered, self.sort_by);
        filtered
    }

    fn page(&self, total: usize) -> Page {
        Page::new(total, self.page_size, self.current_page)
    }

    pub fn apply(&mut self, contacts: &[Contact], event: ViewEvent) {
        debug!(?event, "applying view event");
        match event {
            ViewEvent::Search(term) => {
                self.search_term = term;
                self.current_page = 1;
                let filtered = self.filtered(contacts);
                self.selection.retain_visible(&filtered);
            }
            ViewEvent::Toggle { id, checked } => {
                let visible = self.filtered(contacts).iter().any(|c| c.id == id);
                if visible || !checked {
                    self.selection.toggle(&id, checked);
                }
            }
            ViewEvent::SelectAll(checked) => {
                let filtered = self.filtered(contacts);
                self.selection.select_all(&filtered, checked);
            }
            ViewEvent::PageSize(size) => {
                self.page_size = size;
                let total = self.filtered(contacts).len();
                self.current_page = self.page(total).clamped().current;
            }
            ViewEvent::NextPage => {
                let total = self.filtered(contacts).len();
                self.current_page = self.page(total).next().current;
            }
            ViewEvent::PrevPage => {
                let total = self.filtered(contacts).len();
                self.current_page = self.page(total).prev().current;
            }
            ViewEvent::GoTo(page) => {
                let total = self.filtered(contacts).len();
                self.current_page = self.page(total).go_to(page).current;
            }
            ViewEvent::SortBy(key) => self.sort_by = key,
        }
    }

    pub fn apply_all<I>(&mut self, contacts: &[Contact], events: I)
    where
        I: IntoIterator<Item = ViewEvent>,
    {
        for event in events {
            self.apply(contacts, event);
        }
    }

    /// Derives the rendered table from the current state.
    pub fn snapshot(&self, contacts: &[Contact]) -> ViewSnapshot {
        let filtered = self.filtered(contacts);
        let page = self.page(filtered.len()).clamped();
        let rows = page
            .slice(&filtered)
            .iter()
            .map(|c| ContactRow::new(c.clone(), self.selection.is_selected(&c.id)))
            .collect();

        let snapshot = ViewSnapshot {
            rows,
            search_term: self.search_term.clone(),
            sort_by: self.sort_by,
            page_size: self.page_size.get(),
            page: page.current,
            total_pages: page.total_pages(),
            label: page.label(),
            has_prev: page.has_prev(),
            has_next: page.has_next(),
            all_checked: self.selection.all_checked(&filtered),
            selected_count: self.selection.len(),
            filtered_count: filtered.len(),
        };
        debug!(
            filtered = snapshot.filtered_count,
            page = snapshot.page,
            rows = snapshot.rows.len(),
            "computed view snapshot"
        );
        snapshot
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub contact: Contact,
    pub selected: bool,
    pub initials: String,
    pub tag_styles: Vec<TagStyle>,
}

impl ContactRow {
    pub fn new(contact: Contact, selected: bool) -> Self {
        let initials = contact.initials();
        let tag_styles = contact.tags.iter().map(|t| TagStyle::for_tag(t)).collect();
        Self {
            contact,
            selected,
            initials,
            tag_styles,
        }
    }
}

/// Everything a front end needs to draw the table once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub rows: Vec<ContactRow>,
    pub search_term: String,
    pub sort_by: SortKey,
    pub page_size: usize,
    pub page: usize,
    pub total_pages: usize,
    pub label: String,
    pub has_prev: bool,
    pub has_next: bool,
    pub all_checked: bool,
    pub selected_count: usize,
    pub filtered_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_contacts;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    fn row_names(snapshot: &ViewSnapshot) -> Vec<&str> {
        snapshot
            .rows
            .iter()
            .map(|r| r.contact.name.as_str())
            .collect()
    }

    #[test]
    fn default_view_shows_first_page_of_everything() {
        let contacts = sample_contacts();
        let snap = ContactsView::default().snapshot(&contacts);
        assert_eq!(snap.rows.len(), 9);
        assert_eq!(snap.label, "1 – 9 of 9");
        assert_eq!(snap.total_pages, 1);
        assert!(!snap.has_prev);
        assert!(!snap.has_next);
        assert!(!snap.all_checked);
    }

    #[test]
    fn second_page_of_five() {
        let contacts = sample_contacts();
        let mut view = ContactsView::new(size(5), SortKey::None);
        view.apply(&contacts, ViewEvent::NextPage);

        let snap = view.snapshot(&contacts);
        assert_eq!(snap.page, 2);
        assert_eq!(snap.label, "6 – 9 of 9");
        assert_eq!(
            row_names(&snap),
            vec!["John Brother", "Jaquline Joker", "Katharine Jones", "Morgan Freeman"]
        );
        assert!(snap.has_prev);
        assert!(!snap.has_next);
    }

    #[test]
    fn search_resets_page_and_prunes_selection() {
        let contacts = sample_contacts();
        let mut view = ContactsView::new(size(5), SortKey::None);
        view.apply_all(
            &contacts,
            [
                ViewEvent::SelectAll(true),
                ViewEvent::NextPage,
                ViewEvent::Search("jampack.com".into()),
            ],
        );

        assert_eq!(view.current_page(), 1);
        let snap = view.snapshot(&contacts);
        assert_eq!(snap.filtered_count, 4);
        assert_eq!(snap.selected_count, 4);
        assert!(snap.all_checked);
        assert_eq!(snap.label, "1 – 4 of 4");
    }

    #[test]
    fn select_all_covers_every_page() {
        let contacts = sample_contacts();
        let mut view = ContactsView::new(size(5), SortKey::None);
        view.apply(&contacts, ViewEvent::SelectAll(true));

        let snap = view.snapshot(&contacts);
        assert_eq!(snap.rows.len(), 5);
        assert_eq!(snap.selected_count, 9);
        assert!(snap.all_checked);
    }

    #[test]
    fn deselecting_one_unchecks_header() {
        let contacts = sample_contacts();
        let mut view = ContactsView::default();
        view.apply_all(
            &contacts,
            [
                ViewEvent::SelectAll(true),
                ViewEvent::Toggle {
                    id: "4".into(),
                    checked: false,
                },
            ],
        );
        let snap = view.snapshot(&contacts);
        assert_eq!(snap.selected_count, 8);
        assert!(!snap.all_checked);
        assert!(!snap.rows[3].selected);
        assert!(snap.rows[4].selected);
    }

    #[test]
    fn toggling_hidden_contact_is_ignored() {
        let contacts = sample_contacts();
        let mut view = ContactsView::default();
        view.apply_all(
            &contacts,
            [
                ViewEvent::Search("jampack".into()),
                ViewEvent::Toggle {
                    id: "1".into(),
                    checked: true,
                },
            ],
        );
        assert!(view.selection().is_empty());
    }

    #[test]
    fn page_size_change_clamps_page() {
        let contacts = sample_contacts();
        let mut view = ContactsView::new(size(5), SortKey::None);
        view.apply(&contacts, ViewEvent::NextPage);
        view.apply(&contacts, ViewEvent::PageSize(size(20)));
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.snapshot(&contacts).label, "1 – 9 of 9");
    }

    #[test]
    fn no_matches_is_one_empty_page() {
        let contacts = sample_contacts();
        let mut view = ContactsView::default();
        view.apply_all(
            &contacts,
            [
                ViewEvent::Search("nobody-at-all".into()),
                ViewEvent::NextPage,
                ViewEvent::SelectAll(true),
            ],
        );
        let snap = view.snapshot(&contacts);
        assert!(snap.rows.is_empty());
        assert_eq!(snap.page, 1);
        assert_eq!(snap.total_pages, 0);
        assert_eq!(snap.label, "0 – 0 of 0");
        assert!(!snap.all_checked);
        assert!(!snap.has_next);
    }

    #[test]
    fn sort_is_applied_before_pagination() {
        let contacts = sample_contacts();
        let mut view = ContactsView::new(size(5), SortKey::None);
        view.apply(&contacts, ViewEvent::SortBy(SortKey::Name));
        let snap = view.snapshot(&contacts);
        assert_eq!(
            row_names(&snap),
            vec![
                "Charlie Chaplin",
                "Danial Craig",
                "Dean Shaw",
                "Hence Work",
                "Huma Therman"
            ]
        );
    }

    #[test]
    fn rows_carry_initials_and_tag_styles() {
        let contacts = sample_contacts();
        let snap = ContactsView::default().snapshot(&contacts);
        let dean = &snap.rows[2];
        assert_eq!(dean.initials, "DS");
        assert_eq!(
            dean.tag_styles,
            vec![TagStyle::Collaborator, TagStyle::Developer]
        );
    }
}
