//! Deserialization of JSON:API style querystrings into [`Options`].
//!
//! ### An overview of the design
//!
//! Decoding happens in three steps:
//!
//! 1. The whole querystring is percent-decoded up front (see
//!    `parse::decode`), so that encoded brackets such as `page%5Blimit%5D`
//!    are recognised like their literal form. A `+` becomes a space except
//!    in `sort` and `fields` values, where it is a direction prefix. This
//!    is the only step that can fail on malformed encoding.
//! 2. The `parse::Parser` tokenizes the decoded string in a single pass,
//!    yielding `filter[...]`, `page[...]`, `fields` and `sort` terms. It
//!    drops anything it cannot make sense of, except for nested bracket
//!    hierarchies which are an error.
//! 3. The terms are folded into an [`Options`] value here: list values are
//!    comma-split, page values parsed as integers (failing fast on the
//!    first invalid one), and a pagination strategy is inferred from the
//!    page keys.

mod parse;
mod string_parser;

pub(crate) use parse::{Parser, Term};

use crate::error::{Error, Result};
use crate::map::Map;
use crate::pagination::PaginationStrategy;
use crate::{Config, Options};

use string_parser::{parse_int, split_list};

/// Decodes a querystring into [`Options`] using the default [`Config`].
///
/// ```
/// let options = queryoptions::from_str(
///     "filter[status]=open,pending&page[limit]=25&page[offset]=50&sort=-created",
/// )
/// .unwrap();
///
/// assert_eq!(options.filter["status"], vec!["open", "pending"]);
/// assert_eq!(options.page["offset"], 50);
/// assert_eq!(options.sort, vec!["-created"]);
/// assert_eq!(
///     options.next(),
///     "filter[status]=open,pending&page[limit]=25&page[offset]=75&sort=-created"
/// );
/// ```
pub fn from_str(input: &str) -> Result<Options> {
    Config::default().decode(input)
}

pub(crate) fn decode_with_config(input: &str, config: Config) -> Result<Options> {
    if input.is_empty() {
        return Ok(Options::default());
    }
    tracing::trace!(input, "decoding querystring");

    let decoded = parse::decode(input, config.plus_as_space)?;

    let mut filter = Map::new();
    let mut page = Map::new();
    let mut fields = Vec::new();
    let mut sort = Vec::new();

    for term in Parser::new(&decoded) {
        match term? {
            Term::Filter { name, value } => {
                let values = split_list(value).map(str::to_owned).collect();
                filter.insert(name.to_owned(), values);
            }
            Term::Page { name, value, .. } => {
                let number = parse_int(value).map_err(|source| Error::InvalidPageValue {
                    key: name.to_owned(),
                    value: value.to_owned(),
                    source,
                })?;
                page.insert(name.to_owned(), number);
            }
            Term::Fields(value) => fields.extend(list_items(value)),
            Term::Sort(value) => sort.extend(list_items(value)),
        }
    }

    let strategy = if config.infer_pagination {
        PaginationStrategy::infer(&page)
    } else {
        None
    };
    if let Some(strategy) = strategy {
        tracing::debug!(?strategy, "inferred pagination strategy");
    }

    Ok(Options {
        filter,
        page,
        sort,
        fields,
        raw: decoded.into_owned(),
        strategy,
    })
}

/// `fields` and `sort` entries, without the empty ones.
fn list_items(value: &str) -> impl Iterator<Item = String> + '_ {
    split_list(value)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
}
