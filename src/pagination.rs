//! Pagination strategies computing first/prev/next/last page descriptors.
//!
//! A strategy looks at the numeric `page[...]` values of a querystring and
//! works out where another page starts. Two numbering schemes are
//! supported:
//!
//! | Strategy             | Keys               | `next`            |
//! |----------------------|--------------------|-------------------|
//! | [`OffsetStrategy`]   | `limit`, `offset`  | `offset + limit`  |
//! | [`PageSizeStrategy`] | `size`, `page`     | `page + 1`        |
//!
//! Strategies are stateless. Every operation returns `None` when the page
//! map lacks the sizing key (`limit` or `size`) or holds a non-positive
//! size, meaning the strategy does not apply to this request.
//!
//! ```
//! use queryoptions::map::Map;
//! use queryoptions::pagination::{OffsetStrategy, Paginate};
//!
//! let page = Map::from_iter([("limit".to_owned(), 100), ("offset".to_owned(), 200)]);
//!
//! let prev = OffsetStrategy.prev(&page).unwrap();
//! assert_eq!(prev.to_string(), "page[limit]=100&page[offset]=100");
//!
//! let last = OffsetStrategy.last(&page, 907).unwrap();
//! assert_eq!(last.position(), 900);
//! ```

use std::fmt;

use crate::map::Map;

/// Sizing key of the offset strategy.
pub const LIMIT: &str = "limit";
/// Position key of the offset strategy.
pub const OFFSET: &str = "offset";
/// Sizing key of the page-size strategy.
pub const SIZE: &str = "size";
/// Position key of the page-size strategy.
pub const PAGE: &str = "page";

/// The position of a page, as computed by a strategy.
///
/// A descriptor is a sizing key/value followed by a position key/value,
/// e.g. `limit=100, offset=200`. It renders in that order as a querystring
/// fragment: `page[limit]=100&page[offset]=200`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageDescriptor {
    size_key: &'static str,
    size: i64,
    position_key: &'static str,
    position: i64,
}

impl PageDescriptor {
    /// Negative positions are clamped to zero.
    pub const fn new(
        size_key: &'static str,
        size: i64,
        position_key: &'static str,
        position: i64,
    ) -> Self {
        Self {
            size_key,
            size,
            position_key,
            position: if position < 0 { 0 } else { position },
        }
    }

    pub const fn size_key(&self) -> &'static str {
        self.size_key
    }

    pub const fn size(&self) -> i64 {
        self.size
    }

    pub const fn position_key(&self) -> &'static str {
        self.position_key
    }

    pub const fn position(&self) -> i64 {
        self.position
    }

    /// Converts the descriptor into a page map.
    pub fn into_page(self) -> Map<String, i64> {
        Map::from_iter([
            (self.size_key.to_owned(), self.size),
            (self.position_key.to_owned(), self.position),
        ])
    }
}

impl fmt::Display for PageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = itoa::Buffer::new();
        write!(f, "page[{}]=", self.size_key)?;
        f.write_str(buffer.format(self.size))?;
        write!(f, "&page[{}]=", self.position_key)?;
        f.write_str(buffer.format(self.position))
    }
}

/// Computes page descriptors relative to the current page.
///
/// `None` means the strategy is not applicable to the given page map.
pub trait Paginate {
    /// The first page.
    fn first(&self, page: &Map<String, i64>) -> Option<PageDescriptor>;

    /// The page before the current one, never before the first page.
    fn prev(&self, page: &Map<String, i64>) -> Option<PageDescriptor>;

    /// The page after the current one. There is no upper bound: callers
    /// detect running past the end from their own results.
    fn next(&self, page: &Map<String, i64>) -> Option<PageDescriptor>;

    /// The page holding the final item out of `total`.
    fn last(&self, page: &Map<String, i64>, total: i64) -> Option<PageDescriptor>;

    /// The current page.
    fn current(&self, page: &Map<String, i64>) -> Option<PageDescriptor>;
}

/// A positive sizing value, or `None`.
fn sizing(page: &Map<String, i64>, key: &str) -> Option<i64> {
    page.get(key).copied().filter(|size| *size > 0)
}

/// The current position, defaulting to (and clamped at) zero.
fn position(page: &Map<String, i64>, key: &str) -> i64 {
    page.get(key).copied().unwrap_or(0).max(0)
}

/// Pagination over `page[limit]` and `page[offset]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OffsetStrategy;

impl OffsetStrategy {
    const fn descriptor(limit: i64, offset: i64) -> PageDescriptor {
        PageDescriptor::new(LIMIT, limit, OFFSET, offset)
    }
}

impl Paginate for OffsetStrategy {
    fn first(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        let limit = sizing(page, LIMIT)?;
        Some(Self::descriptor(limit, 0))
    }

    fn prev(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        let limit = sizing(page, LIMIT)?;
        let offset = position(page, OFFSET).saturating_sub(limit);
        Some(Self::descriptor(limit, offset))
    }

    fn next(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        let limit = sizing(page, LIMIT)?;
        let offset = position(page, OFFSET).saturating_add(limit);
        Some(Self::descriptor(limit, offset))
    }

    fn last(&self, page: &Map<String, i64>, total: i64) -> Option<PageDescriptor> {
        let limit = sizing(page, LIMIT)?;
        // start of the final page; cannot overflow since it is <= total
        let offset = total.max(0) / limit * limit;
        Some(Self::descriptor(limit, offset))
    }

    fn current(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        let limit = sizing(page, LIMIT)?;
        Some(Self::descriptor(limit, position(page, OFFSET)))
    }
}

/// Pagination over `page[size]` and zero-based `page[page]` numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageSizeStrategy;

impl PageSizeStrategy {
    const fn descriptor(size: i64, page: i64) -> PageDescriptor {
        PageDescriptor::new(SIZE, size, PAGE, page)
    }
}

impl Paginate for PageSizeStrategy {
    fn first(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        let size = sizing(page, SIZE)?;
        Some(Self::descriptor(size, 0))
    }

    fn prev(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        let size = sizing(page, SIZE)?;
        Some(Self::descriptor(size, position(page, PAGE).saturating_sub(1)))
    }

    fn next(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        let size = sizing(page, SIZE)?;
        Some(Self::descriptor(size, position(page, PAGE).saturating_add(1)))
    }

    fn last(&self, page: &Map<String, i64>, total: i64) -> Option<PageDescriptor> {
        let size = sizing(page, SIZE)?;
        Some(Self::descriptor(size, total.max(0) / size))
    }

    fn current(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        let size = sizing(page, SIZE)?;
        Some(Self::descriptor(size, position(page, PAGE)))
    }
}

/// The strategy attached to an [`Options`](crate::Options) value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationStrategy {
    /// See [`OffsetStrategy`].
    Offset,
    /// See [`PageSizeStrategy`].
    PageSize,
}

impl PaginationStrategy {
    /// Picks a strategy from the keys present in a page map.
    ///
    /// `size` selects [`PaginationStrategy::PageSize`], otherwise `limit`
    /// selects [`PaginationStrategy::Offset`].
    pub fn infer(page: &Map<String, i64>) -> Option<Self> {
        if page.contains_key(SIZE) {
            Some(PaginationStrategy::PageSize)
        } else if page.contains_key(LIMIT) {
            Some(PaginationStrategy::Offset)
        } else {
            None
        }
    }

    fn as_paginate(&self) -> &'static dyn Paginate {
        match self {
            PaginationStrategy::Offset => &OffsetStrategy,
            PaginationStrategy::PageSize => &PageSizeStrategy,
        }
    }
}

impl Paginate for PaginationStrategy {
    fn first(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        self.as_paginate().first(page)
    }

    fn prev(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        self.as_paginate().prev(page)
    }

    fn next(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        self.as_paginate().next(page)
    }

    fn last(&self, page: &Map<String, i64>, total: i64) -> Option<PageDescriptor> {
        self.as_paginate().last(page, total)
    }

    fn current(&self, page: &Map<String, i64>) -> Option<PageDescriptor> {
        self.as_paginate().current(page)
    }
}

impl From<OffsetStrategy> for PaginationStrategy {
    fn from(_: OffsetStrategy) -> Self {
        PaginationStrategy::Offset
    }
}

impl From<PageSizeStrategy> for PaginationStrategy {
    fn from(_: PageSizeStrategy) -> Self {
        PaginationStrategy::PageSize
    }
}
