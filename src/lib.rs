//! Filtering, pagination and sorting options from JSON:API style
//! querystrings.
//!
//! APIs following the [JSON:API](https://jsonapi.org/format/#fetching)
//! conventions describe list requests with a handful of bracketed
//! querystring parameters:
//!
//! - `filter[<field>]=<value>[,<value>...]` restricts results, one list of
//!   accepted values per field
//! - `page[<key>]=<integer>` selects a page, e.g. `page[limit]` and
//!   `page[offset]`, or `page[size]` and `page[page]`
//! - `sort=<field>[,<field>...]` orders results, `-field` for descending
//! - `fields=<field>[,<field>...]` projects the returned fields
//!
//! This library decodes such a querystring into an [`Options`] value and
//! encodes it back, including links to the first, previous, next and last
//! page under the pagination scheme the request uses.
//!
//! Only a single bracket level is supported. A key such as
//! `filter[a][b]=c` is rejected with [`Error::NestedHierarchy`]; for
//! arbitrarily nested querystrings into your own types, reach for a
//! general purpose querystring deserializer instead.
//!
//! ## Usage
//!
//! ```
//! let options = queryoptions::from_str(
//!     "filter[genre]=jazz,blues&fields=title,artist&page[limit]=50&page[offset]=100&sort=-year",
//! )
//! .unwrap();
//!
//! assert_eq!(options.filter["genre"], vec!["jazz", "blues"]);
//! assert_eq!(options.fields, vec!["title", "artist"]);
//! assert_eq!(options.page["limit"], 50);
//! assert!(options.contains_sort_field("year"));
//!
//! assert_eq!(
//!     options.first(),
//!     "filter[genre]=jazz,blues&fields=title,artist&page[limit]=50&page[offset]=0&sort=-year"
//! );
//! assert_eq!(
//!     options.last(1234),
//!     "filter[genre]=jazz,blues&fields=title,artist&page[limit]=50&page[offset]=1200&sort=-year"
//! );
//! ```
//!
//! ## Error handling
//!
//! Decoding is tolerant: parameters it does not recognise are ignored, and
//! a bracket term without a value (`filter[x]` rather than `filter[x]=`)
//! is dropped. Only three inputs are rejected:
//!
//! - malformed percent-encoding ([`Error::InvalidEncoding`])
//! - a `page[...]` value that is not an integer ([`Error::InvalidPageValue`])
//! - nested bracket hierarchies ([`Error::NestedHierarchy`])

#[cfg(feature = "axum")]
pub mod axum;
mod config;
mod de;
mod error;
pub mod map;
mod options;
pub mod pagination;
pub mod ser;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use de::from_str;
pub use error::{Error, Result};
#[doc(inline)]
pub use options::Options;
#[doc(inline)]
pub use pagination::{OffsetStrategy, PageSizeStrategy, Paginate, PaginationStrategy};
