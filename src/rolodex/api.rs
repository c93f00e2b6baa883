//! # API Facade
//!
//! The single entry point for rolodex operations, whatever the front end.
//! It turns a [`ViewQuery`] into [`ViewEvent`]s, replays them on a fresh
//! [`ContactsView`], and hands back structured results. No printing, no
//! formatting.
//!
//! `RolodexApi<S: ContactSource>` is generic over where contacts come from:
//! the CLI uses [`FileStore`](crate::store::fs::FileStore) or the built-in
//! [`InMemoryStore`](crate::store::memory::InMemoryStore); tests use fixtures.

use crate::commands;
use crate::error::Result;
use crate::model::Contact;
use crate::store::ContactSource;
use crate::view::{ContactsView, ViewEvent};
use std::path::{Path, PathBuf};
use tracing::debug;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportFormat;
pub use crate::commands::pagination::PageSize;
pub use crate::commands::sort::SortKey;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The view state requested by a one-shot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: Option<String>,
    pub sort_by: SortKey,
    pub page_size: PageSize,
    pub page: usize,
    pub selected: Vec<String>,
    pub select_all: bool,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort_by: SortKey::default(),
            page_size: PageSize::default(),
            page: 1,
            selected: Vec::new(),
            select_all: false,
        }
    }
}

impl ViewQuery {
    /// The UI events that reproduce this query, in the order a user would
    /// issue them: search, sort, page size, selection, then navigation.
    pub fn events(&self) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        if let Some(term) = &self.search {
            events.push(ViewEvent::Search(term.clone()));
        }
        events.push(ViewEvent::SortBy(self.sort_by));
        events.push(ViewEvent::PageSize(self.page_size));
        if self.select_all {
            events.push(ViewEvent::SelectAll(true));
        }
        events.extend(self.selected.iter().map(|id| ViewEvent::Toggle {
            id: id.clone(),
            checked: true,
        }));
        events.push(ViewEvent::GoTo(self.page));
        events
    }
}

pub struct RolodexApi<S: ContactSource> {
    source: S,
    config_dir: PathBuf,
}

impl<S: ContactSource> RolodexApi<S> {
    pub fn new(source: S, config_dir: PathBuf) -> Self {
        Self { source, config_dir }
    }

    pub fn contacts(&self) -> Result<Vec<Contact>> {
        self.source.list()
    }

    /// Builds the view described by `query` against the current contacts.
    pub fn open_view(&self, query: &ViewQuery) -> Result<(Vec<Contact>, ContactsView)> {
        let contacts = self.source.list()?;
        let mut view = ContactsView::new(query.page_size, query.sort_by);
        view.apply_all(&contacts, query.events());
        debug!(
            search = view.search_term(),
            page = view.current_page(),
            selected = view.selection().len(),
            "opened view"
        );
        Ok((contacts, view))
    }

    pub fn list(&self, query: &ViewQuery) -> Result<CmdResult> {
        let (contacts, view) = self.open_view(query)?;
        let mut result = CmdResult::default().with_snapshot(view.snapshot(&contacts));
        warn_unselected(&mut result, query, &view);
        if query.page > view.current_page() {
            result.add_message(CmdMessage::warning(format!(
                "Page {} is out of range, showing page {}",
                query.page,
                view.current_page()
            )));
        }
        Ok(result)
    }

    pub fn contact(&self, id: &str) -> Result<Contact> {
        self.source.get(id)
    }

    pub fn show<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        let contacts = ids
            .iter()
            .map(|id| self.source.get(id.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(CmdResult::default().with_contacts(contacts))
    }

    /// Exports the selection of `query`, or every matching contact when
    /// nothing is selected.
    pub fn export(&self, query: &ViewQuery, format: ExportFormat) -> Result<CmdResult> {
        let (contacts, view) = self.open_view(query)?;
        let filtered = view.filtered(&contacts);
        let mut result = CmdResult::default();
        warn_unselected(&mut result, query, &view);

        let picked: Vec<&Contact> = if view.selection().is_empty() {
            result.add_message(CmdMessage::info(format!(
                "No contacts selected, exporting all {} matching",
                filtered.len()
            )));
            filtered.iter().collect()
        } else {
            view.selection().pick(&filtered)
        };

        let exported = commands::export::export(&picked, format)?;
        result.add_message(CmdMessage::success(format!(
            "Exported {} contact(s) as {format}",
            picked.len()
        )));
        Ok(result.with_exported(exported))
    }

    pub fn tags(&self) -> Result<CmdResult> {
        let contacts = self.source.list()?;
        Ok(CmdResult::default().with_tags(commands::tags::summarize(&contacts)))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn warn_unselected(result: &mut CmdResult, query: &ViewQuery, view: &ContactsView) {
    for id in &query.selected {
        if !view.selection().is_selected(id) {
            result.add_message(CmdMessage::warning(format!(
                "Contact {id} is not in the current results and was not selected"
            )));
        }
    }
}
