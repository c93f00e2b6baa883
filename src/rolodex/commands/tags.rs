use crate::model::Contact;
use serde::Serialize;
use std::collections::BTreeMap;

/// Badge style for a contact tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagStyle {
    Collaborator,
    Developer,
    Promotion,
    Secondary,
}

impl TagStyle {
    /// Case-insensitive lookup; unknown tags fall back to `Secondary`.
    pub fn for_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "collaborator" => TagStyle::Collaborator,
            "angular developer" => TagStyle::Developer,
            "promotion" => TagStyle::Promotion,
            _ => TagStyle::Secondary,
        }
    }

    /// Theme style name used by renderers.
    pub fn style_name(self) -> &'static str {
        match self {
            TagStyle::Collaborator => "tag_collaborator",
            TagStyle::Developer => "tag_developer",
            TagStyle::Promotion => "tag_promotion",
            TagStyle::Secondary => "tag_secondary",
        }
    }
}

/// A distinct tag across a contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    pub name: String,
    pub style: TagStyle,
    pub count: usize,
}

/// Distinct tags in first-seen spelling, sorted case-insensitively, with usage counts.
pub fn summarize(contacts: &[Contact]) -> Vec<TagSummary> {
    let mut by_key: BTreeMap<String, TagSummary> = BTreeMap::new();
    for tag in contacts.iter().flat_map(|c| c.tags.iter()) {
        by_key
            .entry(tag.to_lowercase())
            .or_insert_with(|| TagSummary {
                name: tag.clone(),
                style: TagStyle::for_tag(tag),
                count: 0,
            })
            .count += 1;
    }
    by_key.into_values().collect()
}
