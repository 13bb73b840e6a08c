use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::de::{Parser, Term};
use crate::error::Error;
use crate::map::Map;
use crate::pagination::{PageDescriptor, Paginate, PaginationStrategy};
use crate::ser;

/// Operator prefixes a sort entry may carry. Two-character operators come
/// first so that `<=` is not read as `<` followed by `=`.
const SORT_PREFIXES: [&str; 7] = ["<=", ">=", "!=", "<", ">", "-", "+"];

/// Filtering, pagination, sorting and field projection instructions, as
/// provided via a querystring in bracketed object notation.
///
/// `Options` are usually decoded with [`from_str`](crate::from_str) or
/// [`Config::decode`](crate::Config::decode), which also attach a
/// [`PaginationStrategy`] based on the page keys present. The link
/// helpers ([`first`](Options::first), [`prev`](Options::prev),
/// [`next`](Options::next), [`last`](Options::last) and
/// [`current`](Options::current)) re-encode the options with the page
/// computed by that strategy.
///
/// ```
/// use queryoptions::{Options, PaginationStrategy};
///
/// let options: Options = "filter[kind]=book&page[size]=20&page[page]=3".parse().unwrap();
/// assert_eq!(options.pagination_strategy(), Some(PaginationStrategy::PageSize));
/// assert_eq!(options.prev(), "filter[kind]=book&page[size]=20&page[page]=2");
/// assert_eq!(options.last(95), "filter[kind]=book&page[size]=20&page[page]=4");
/// assert_eq!(options.to_string(), "filter[kind]=book&page[size]=20&page[page]=3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Field name to the accepted values, in the order given.
    pub filter: Map<String, Vec<String>>,
    /// Numeric pagination values, e.g. `limit` and `offset`.
    pub page: Map<String, i64>,
    /// Sort fields, primary first, with any `-`/`+`/comparison prefix kept.
    pub sort: Vec<String>,
    /// Projected fields. Empty means all fields.
    pub fields: Vec<String>,

    #[serde(skip)]
    pub(crate) raw: String,
    #[serde(skip)]
    pub(crate) strategy: Option<PaginationStrategy>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// The percent-decoded querystring these options were decoded from.
    pub fn raw_querystring(&self) -> &str {
        &self.raw
    }

    pub fn pagination_strategy(&self) -> Option<PaginationStrategy> {
        self.strategy
    }

    /// Returns these options with the given strategy attached in place of
    /// any inferred one.
    pub fn with_pagination_strategy(mut self, strategy: impl Into<PaginationStrategy>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    pub fn set_pagination_strategy(&mut self, strategy: impl Into<PaginationStrategy>) {
        self.strategy = Some(strategy.into());
    }

    /// Querystring for the first page.
    pub fn first(&self) -> String {
        self.link(|strategy, page| strategy.first(page))
    }

    /// Querystring for the previous page.
    pub fn prev(&self) -> String {
        self.link(|strategy, page| strategy.prev(page))
    }

    /// Querystring for the next page.
    pub fn next(&self) -> String {
        self.link(|strategy, page| strategy.next(page))
    }

    /// Querystring for the last page, given the total number of items.
    pub fn last(&self, total: i64) -> String {
        self.link(|strategy, page| strategy.last(page, total))
    }

    /// Querystring for the current page.
    ///
    /// The page segments are taken verbatim from the decoded querystring,
    /// in their original order. Options that were built rather than
    /// decoded fall back to rendering the page map.
    pub fn current(&self) -> String {
        self.link_with(|strategy, page| {
            strategy.current(page)?;
            Some(self.page_fragment())
        })
    }

    /// Whether a filter is given for `name`.
    pub fn contains_filter_field(&self, name: &str) -> bool {
        !name.is_empty() && self.filter.contains_key(name)
    }

    /// Whether the options sort by `name`, in any direction or with any
    /// comparison prefix (`-name`, `<=name`, ...).
    pub fn contains_sort_field(&self, name: &str) -> bool {
        contains(&self.sort, name, true)
    }

    /// Whether `name` is explicitly projected.
    pub fn contains_field(&self, name: &str) -> bool {
        contains(&self.fields, name, false)
    }

    fn link<F>(&self, compute: F) -> String
    where
        F: FnOnce(&PaginationStrategy, &Map<String, i64>) -> Option<PageDescriptor>,
    {
        self.link_with(|strategy, page| compute(strategy, page).map(|d| d.to_string()))
    }

    /// Encodes the options with the page fragment produced by `compute`.
    ///
    /// The link is empty without a strategy, or when the strategy does not
    /// apply to the page map. An empty page map lacks the sizing key too,
    /// so it yields an empty link whatever the filter, fields and sort.
    fn link_with<F>(&self, compute: F) -> String
    where
        F: FnOnce(&PaginationStrategy, &Map<String, i64>) -> Option<String>,
    {
        self.strategy
            .as_ref()
            .and_then(|strategy| compute(strategy, &self.page))
            .map(|fragment| self.encode(&fragment))
            .unwrap_or_default()
    }

    fn encode(&self, page: &str) -> String {
        ser::encode(&self.filter, &self.fields, page, &self.sort)
    }

    fn page_fragment(&self) -> String {
        let segments: Vec<&str> = Parser::new(&self.raw)
            .filter_map(|term| match term {
                Ok(Term::Page { segment, .. }) => Some(segment),
                _ => None,
            })
            .collect();

        if segments.is_empty() {
            ser::encode_page(&self.page)
        } else {
            segments.join("&")
        }
    }
}

fn strip_operator(field: &str) -> &str {
    SORT_PREFIXES
        .iter()
        .find_map(|prefix| field.strip_prefix(prefix))
        .unwrap_or(field)
}

fn contains(list: &[String], value: &str, strip_prefix: bool) -> bool {
    if value.is_empty() {
        return false;
    }
    list.iter().any(|item| {
        let item = if strip_prefix {
            strip_operator(item)
        } else {
            item.as_str()
        };
        item == value
    })
}

impl fmt::Display for Options {
    /// Writes the querystring of the current page, see [`Options::current`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.current())
    }
}

impl FromStr for Options {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::de::from_str(s)
    }
}
