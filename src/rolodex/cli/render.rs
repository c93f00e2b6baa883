//! # Rendering Module
//!
//! Turns library results into terminal text. Column widths, truncation and
//! padding are computed here because they need Unicode-aware measuring; the
//! templates in `templates/` decide placement and style names.

use super::styles::{names, ROLODEX_THEME};
use super::templates::{CONTACT_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, TAGS_TEMPLATE};
use minijinja::{Environment, Value};
use rolodex::api::{CmdMessage, MessageLevel};
use rolodex::commands::tags::{TagStyle, TagSummary};
use rolodex::model::Contact;
use rolodex::view::ViewSnapshot;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MAX_CELL_WIDTH: usize = 32;
const INITIALS_WIDTH: usize = 3;
const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
const STAR: &str = "★";
const NO_STAR: &str = "☆";

#[derive(Serialize)]
struct Badge {
    text: String,
    style: &'static str,
}

impl Badge {
    fn new(tag: &str, style: TagStyle) -> Self {
        Self {
            text: format!(" {tag} "),
            style: style.style_name(),
        }
    }
}

#[derive(Serialize)]
struct Toolbar {
    sort: String,
    per_page: usize,
    label: String,
    prev_style: &'static str,
    next_style: &'static str,
    search: Option<String>,
    selected: usize,
}

#[derive(Serialize)]
struct HeaderData {
    check: &'static str,
    check_style: &'static str,
    lead: String,
    name: String,
    email: String,
    phone: String,
    tags: String,
    labels: String,
    date: &'static str,
}

#[derive(Serialize)]
struct RowData {
    check: &'static str,
    check_style: &'static str,
    star: &'static str,
    star_style: &'static str,
    initials: String,
    initials_pad: String,
    name: String,
    email: String,
    phone: String,
    tags: Vec<Badge>,
    tags_pad: String,
    labels: String,
    date: String,
}

#[derive(Serialize)]
struct ListData {
    toolbar: Toolbar,
    header: HeaderData,
    rows: Vec<RowData>,
    empty: bool,
}

#[derive(Serialize)]
struct Field {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ContactEntry {
    initials: String,
    name: String,
    starred: bool,
    fields: Vec<Field>,
    tags_key: String,
    tags: Vec<Badge>,
}

#[derive(Serialize)]
struct ContactsData {
    contacts: Vec<ContactEntry>,
}

#[derive(Serialize)]
struct TagLine {
    badge: String,
    style: &'static str,
    pad: String,
    style_name: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct TagsData {
    tags: Vec<TagLine>,
    empty: bool,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    let theme = ROLODEX_THEME.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env.render_str(template, data)
}

/// Renders one page of the contact table.
pub fn render_table(snapshot: &ViewSnapshot, use_color: bool) -> String {
    let rows = &snapshot.rows;

    let name_cells: Vec<String> = rows
        .iter()
        .map(|r| truncate_to_width(&r.contact.name, MAX_CELL_WIDTH))
        .collect();
    let email_cells: Vec<String> = rows
        .iter()
        .map(|r| truncate_to_width(&r.contact.email, MAX_CELL_WIDTH))
        .collect();
    let label_cells: Vec<String> = rows
        .iter()
        .map(|r| truncate_to_width(&r.contact.labels.join(", "), MAX_CELL_WIDTH))
        .collect();
    let tag_badges: Vec<Vec<Badge>> = rows
        .iter()
        .map(|r| {
            r.contact
                .tags
                .iter()
                .zip(&r.tag_styles)
                .map(|(tag, style)| Badge::new(tag, *style))
                .collect()
        })
        .collect();
    let tag_widths: Vec<usize> = tag_badges.iter().map(|b| badges_width(b)).collect();

    let name_w = column_width("Name", &name_cells);
    let email_w = column_width("Email Address", &email_cells);
    let phone_w = rows
        .iter()
        .map(|r| r.contact.phone.width())
        .chain(std::iter::once("Phone".width()))
        .max()
        .unwrap_or(0);
    let tags_w = tag_widths
        .iter()
        .copied()
        .chain(std::iter::once("Tags".width()))
        .max()
        .unwrap_or(0);
    let labels_w = column_width("Labels", &label_cells);

    let header_checked = snapshot.all_checked;
    let header = HeaderData {
        check: if header_checked { CHECKED } else { UNCHECKED },
        check_style: if header_checked {
            names::SELECTED
        } else {
            names::MUTED
        },
        lead: " ".repeat(1 + 1 + INITIALS_WIDTH + 1),
        name: pad_to_width("Name", name_w),
        email: pad_to_width("Email Address", email_w),
        phone: pad_to_width("Phone", phone_w),
        tags: pad_to_width("Tags", tags_w),
        labels: pad_to_width("Labels", labels_w),
        date: "Date Created",
    };

    let row_data: Vec<RowData> = rows
        .iter()
        .zip(tag_badges)
        .zip(tag_widths)
        .enumerate()
        .map(|(i, ((row, tags), tags_width))| {
            let initials = truncate_to_width(&row.initials, INITIALS_WIDTH);
            RowData {
                check: if row.selected { CHECKED } else { UNCHECKED },
                check_style: if row.selected {
                    names::SELECTED
                } else {
                    names::MUTED
                },
                star: if row.contact.starred { STAR } else { NO_STAR },
                star_style: if row.contact.starred {
                    names::STARRED
                } else {
                    names::UNSTARRED
                },
                initials_pad: " ".repeat(INITIALS_WIDTH.saturating_sub(initials.width())),
                initials,
                name: pad_to_width(&name_cells[i], name_w),
                email: pad_to_width(&email_cells[i], email_w),
                phone: pad_to_width(&row.contact.phone, phone_w),
                tags,
                tags_pad: " ".repeat(tags_w.saturating_sub(tags_width)),
                labels: pad_to_width(&label_cells[i], labels_w),
                date: row.contact.date_created.clone(),
            }
        })
        .collect();

    let data = ListData {
        toolbar: Toolbar {
            sort: snapshot.sort_by.to_string(),
            per_page: snapshot.page_size,
            label: snapshot.label.clone(),
            prev_style: if snapshot.has_prev {
                names::NAV
            } else {
                names::NAV_DISABLED
            },
            next_style: if snapshot.has_next {
                names::NAV
            } else {
                names::NAV_DISABLED
            },
            search: Some(snapshot.search_term.clone()).filter(|s| !s.is_empty()),
            selected: snapshot.selected_count,
        },
        header,
        empty: row_data.is_empty(),
        rows: row_data,
    };

    render_template(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders full contact records.
pub fn render_contacts(contacts: &[Contact], use_color: bool) -> String {
    const KEY_WIDTH: usize = 13;
    let key = |k: &str| pad_to_width(k, KEY_WIDTH);

    let entries = contacts
        .iter()
        .map(|c| ContactEntry {
            initials: c.initials(),
            name: c.name.clone(),
            starred: c.starred,
            fields: vec![
                Field {
                    key: key("Id"),
                    value: c.id.clone(),
                },
                Field {
                    key: key("Email"),
                    value: c.email.clone(),
                },
                Field {
                    key: key("Phone"),
                    value: c.phone.clone(),
                },
                Field {
                    key: key("Labels"),
                    value: c.labels.join(", "),
                },
                Field {
                    key: key("Date Created"),
                    value: c.date_created.clone(),
                },
                Field {
                    key: key("Avatar"),
                    value: c.avatar.clone(),
                },
            ],
            tags_key: key("Tags"),
            tags: c
                .tags
                .iter()
                .map(|t| Badge::new(t, TagStyle::for_tag(t)))
                .collect(),
        })
        .collect();

    render_template(CONTACT_TEMPLATE, &ContactsData { contacts: entries }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_tags(tags: &[TagSummary], use_color: bool) -> String {
    let badges: Vec<String> = tags.iter().map(|t| format!(" {} ", t.name)).collect();
    let badge_w = badges.iter().map(|b| b.width()).max().unwrap_or(0);

    let lines = tags
        .iter()
        .zip(badges)
        .map(|(t, badge)| TagLine {
            pad: " ".repeat(badge_w.saturating_sub(badge.width())),
            badge,
            style: t.style.style_name(),
            style_name: t.style.style_name(),
            count: t.count,
        })
        .collect::<Vec<_>>();

    let data = TagsData {
        empty: lines.is_empty(),
        tags: lines,
    };
    render_template(TAGS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| "No tags.\n".to_string())
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Like [`print_messages`], for commands whose stdout carries data.
pub fn eprint_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        eprint!("{}", output);
    }
}

fn badges_width(badges: &[Badge]) -> usize {
    let text: usize = badges.iter().map(|b| b.text.width()).sum();
    text + badges.len().saturating_sub(1)
}

fn column_width(header: &str, cells: &[String]) -> usize {
    cells
        .iter()
        .map(|c| c.width())
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
