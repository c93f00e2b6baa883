//! Page arithmetic for the contact table.
//!
//! Pages are 1-based. An empty result still has one (empty) page to stand on,
//! so navigation never divides by zero and never leaves `[1, last_page]`.

use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rows per page offered by the "View" selector.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self> {
        if PAGE_SIZES.contains(&size) {
            Ok(Self(size))
        } else {
            Err(RolodexError::InvalidPageSize(size.to_string()))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = RolodexError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.0
    }
}

impl FromStr for PageSize {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        let n: usize = s
            .trim()
            .parse()
            .map_err(|_| RolodexError::InvalidPageSize(s.to_string()))?;
        Self::new(n)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pagination cursor over `total` filtered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub total: usize,
    pub per_page: PageSize,
    pub current: usize,
}

impl Page {
    pub fn new(total: usize, per_page: PageSize, current: usize) -> Self {
        Self {
            total,
            per_page,
            current,
        }
    }

    /// `ceil(total / per_page)`; zero when there is nothing to show.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page.get())
    }

    /// Highest page navigation may reach. Never below 1.
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    pub fn clamped(self) -> Self {
        Self {
            current: self.current.clamp(1, self.last_page()),
            ..self
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.last_page()
    }

    pub fn next(self) -> Self {
        Self {
            current: self.current.saturating_add(1),
            ..self
        }
        .clamped()
    }

    pub fn prev(self) -> Self {
        Self {
            current: self.current.saturating_sub(1),
            ..self
        }
        .clamped()
    }

    pub fn go_to(self, page: usize) -> Self {
        Self {
            current: page,
            ..self
        }
        .clamped()
    }

    /// Half-open slice bounds of the current page, clamped to `total`.
    pub fn bounds(&self) -> (usize, usize) {
        let per_page = self.per_page.get();
        let start = (self.current.max(1) - 1)
            .saturating_mul(per_page)
            .min(self.total);
        let end = start.saturating_add(per_page).min(self.total);
        (start, end)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds();
        &items[start.min(items.len())..end.min(items.len())]
    }

    /// The "X – Y of Z" range label.
    pub fn label(&self) -> String {
        let (start, end) = self.bounds();
        if start == end {
            return format!("0 – 0 of {}", self.total);
        }
        format!("{} – {} of {}", start + 1, end, self.total)
    }
}
