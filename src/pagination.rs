//! Fixed-size page windows shared by the task and audit-log listings.
//!
//! Callers ask for a one-based [`PageNumber`]; repositories receive a
//! [`PageWindow`] expressed as offset and limit; services answer with a
//! [`Page`] carrying `total_pages = ceil(matching / page_size)`.

use serde::Serialize;
use std::fmt;

/// One-based page number requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageNumber(u64);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Creates a page number, treating zero as the first page.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        if value == 0 { Self::FIRST } else { Self(value) }
    }

    /// Parses the leading decimal digits of a raw query value, so `"2abc"`
    /// is page 2. Falls back to the first page when the value is absent,
    /// has no leading digits, is zero, or is negative. Values beyond `u64`
    /// saturate.
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        let Some(value) = raw else {
            return Self::FIRST;
        };
        let trimmed = value.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Self::FIRST;
        }
        Self::new(digits.parse::<u64>().unwrap_or(u64::MAX))
    }

    /// Returns the underlying one-based value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of items on a full page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u64);

impl PageSize {
    /// Creates a page size, treating zero as one.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        if value == 0 { Self(1) } else { Self(value) }
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Number of pages needed to hold `total` items.
    #[must_use]
    pub const fn pages_for(self, total: u64) -> u64 {
        total.div_ceil(self.0)
    }
}

/// Offset/limit slice handed to repositories.
///
/// Both values fit in an `i64`, the widest `OFFSET`/`LIMIT` a SQL backend
/// accepts; windows past that point are clamped and match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    offset: u64,
    limit: u64,
}

impl PageWindow {
    /// Largest offset or limit a window carries.
    pub const MAX_EXTENT: u64 = i64::MAX.unsigned_abs();

    /// Computes the window covering `page` for the given page size.
    #[must_use]
    pub const fn new(page: PageNumber, size: PageSize) -> Self {
        Self {
            offset: clamp_extent((page.value() - 1).saturating_mul(size.value())),
            limit: clamp_extent(size.value()),
        }
    }

    /// Number of matching items to skip.
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.offset
    }

    /// Maximum number of items to return.
    #[must_use]
    pub const fn limit(self) -> u64 {
        self.limit
    }

    /// Applies the window to an already ordered iterator.
    pub fn apply<I>(self, items: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
    {
        let skip = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(take)
    }
}

const fn clamp_extent(value: u64) -> u64 {
    if value > PageWindow::MAX_EXTENT {
        PageWindow::MAX_EXTENT
    } else {
        value
    }
}

/// One page of results plus the pagination envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    current_page: PageNumber,
    total_pages: u64,
}

impl<T> Page<T> {
    /// Builds a page from the window contents and the total match count.
    #[must_use]
    pub const fn new(items: Vec<T>, current_page: PageNumber, total: u64, size: PageSize) -> Self {
        Self {
            items,
            current_page,
            total_pages: size.pages_for(total),
        }
    }

    /// Items on this page. Empty when the page is past the last one.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The page that was requested.
    #[must_use]
    pub const fn current_page(&self) -> PageNumber {
        self.current_page
    }

    /// Total number of pages for the matching set.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }
}
