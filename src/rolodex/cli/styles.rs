//! Styles for the rolodex CLI.
//!
//! Templates never carry ANSI codes. They name a semantic style through the
//! `style` filter (`{{ row.email | style("muted") }}`) and the theme below maps
//! that name to a `console::Style`. When color is off the filter passes text
//! through untouched. Unknown names are prefixed with `(!?)` so typos show up
//! while iterating on templates.
//!
//! Tag badges use the names from [`TagStyle::style_name`], so the tag lookup
//! in the library decides the badge and this file decides its color.
//!
//! [`TagStyle::style_name`]: rolodex::commands::tags::TagStyle::style_name

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADER: &str = "header";
    pub const MUTED: &str = "muted";
    pub const NAME: &str = "name";
    pub const INITIALS: &str = "initials";
    pub const STARRED: &str = "starred";
    pub const UNSTARRED: &str = "unstarred";
    pub const SELECTED: &str = "selected";
    pub const NAV: &str = "nav";
    pub const NAV_DISABLED: &str = "nav_disabled";
    pub const LABEL: &str = "label";
    pub const FIELD: &str = "field";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// A set of named styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies a style by name. With `use_color` off the text comes back plain.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(_) if !use_color => text.to_string(),
            Some(style) => style.apply_to(text).force_styling(true).to_string(),
            None => format!("{MISSING_STYLE_INDICATOR} {text}"),
        }
    }
}

pub static ROLODEX_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::MUTED, Style::new().color256(246))
        .add(names::NAME, Style::new().bold())
        .add(names::INITIALS, Style::new().black().on_white())
        .add(names::STARRED, Style::new().yellow())
        .add(names::UNSTARRED, Style::new().color256(246))
        .add(names::SELECTED, Style::new().cyan())
        .add(names::NAV, Style::new())
        .add(names::NAV_DISABLED, Style::new().color256(240))
        .add(names::LABEL, Style::new().color256(246).italic())
        .add(names::FIELD, Style::new().color256(246))
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
        .add("tag_collaborator", Style::new().black().on_cyan())
        .add("tag_developer", Style::new().white().on_magenta())
        .add("tag_promotion", Style::new().black().on_yellow())
        .add("tag_secondary", Style::new().black().on_white())
});
