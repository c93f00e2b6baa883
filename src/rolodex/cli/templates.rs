//! Output templates, embedded at compile time.
//!
//! Templates are minijinja, rendered with `trim_blocks` and `lstrip_blocks`:
//! a block tag that ends a line swallows its newline, so every output line
//! comes from a line that ends in a `{{ ... }}` expression or literal text.
//! Layout math (column widths, padding) happens in `render.rs`; templates
//! only place pre-padded cells and pick style names.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const CONTACT_TEMPLATE: &str = include_str!("templates/contact.tmp");
pub const TAGS_TEMPLATE: &str = include_str!("templates/tags.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
