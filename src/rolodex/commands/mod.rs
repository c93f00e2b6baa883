use crate::commands::tags::TagSummary;
use crate::config::RolodexConfig;
use crate::model::Contact;
use crate::view::ViewSnapshot;

pub mod config;
pub mod export;
pub mod filter;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod tags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub snapshot: Option<ViewSnapshot>,
    pub contacts: Vec<Contact>,
    pub exported: Option<String>,
    pub tags: Vec<TagSummary>,
    pub config: Option<RolodexConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_snapshot(mut self, snapshot: ViewSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_exported(mut self, exported: String) -> Self {
        self.exported = Some(exported);
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagSummary>) -> Self {
        self.tags = tags;
        self
    }
}
