use std::str::Split;

use crate::error::{Error, Result};

mod decode;

pub use decode::decode;

/// A single recognised parameter in a (decoded) querystring.
///
/// Values borrow from the querystring and are still unsplit: list values
/// are expanded and page values are parsed by the caller.
#[derive(Debug, PartialEq, Eq)]
pub enum Term<'qs> {
    /// `filter[<name>]=<value>`
    Filter { name: &'qs str, value: &'qs str },
    /// `page[<name>]=<value>`, along with the whole `key=value` segment
    Page {
        name: &'qs str,
        value: &'qs str,
        segment: &'qs str,
    },
    /// `fields=<value>`
    Fields(&'qs str),
    /// `sort=<value>`
    Sort(&'qs str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Group {
    Filter,
    Page,
    Sort,
}

impl Group {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "filter" => Some(Group::Filter),
            "page" => Some(Group::Page),
            "sort" => Some(Group::Sort),
            _ => None,
        }
    }
}

/// The `Parser` is a single-pass tokenizer over an already decoded
/// querystring.
///
/// It walks the `&`-separated segments and yields `(group, name, value)`
/// triples as [`Term`]s. Segments it does not understand are skipped, and
/// the only structural error is a second bracket level after a
/// `filter[...]`/`page[...]`/`sort[...]` key.
pub struct Parser<'qs> {
    segments: Split<'qs, char>,
}

impl<'qs> Parser<'qs> {
    pub fn new(decoded: &'qs str) -> Self {
        Parser {
            segments: decoded.split('&'),
        }
    }
}

impl<'qs> Iterator for Parser<'qs> {
    type Item = Result<Term<'qs>>;

    fn next(&mut self) -> Option<Self::Item> {
        for segment in self.segments.by_ref() {
            if let Some(term) = parse_segment(segment).transpose() {
                return Some(term);
            }
        }
        None
    }
}

fn parse_segment(segment: &str) -> Result<Option<Term<'_>>> {
    if segment.is_empty() {
        return Ok(None);
    }

    let (key, value) = match segment.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (segment, None),
    };

    let Some(open) = key.find('[') else {
        // plain top-level parameter
        return Ok(match (key, value) {
            ("fields", Some(value)) => Some(Term::Fields(value)),
            ("sort", Some(value)) => Some(Term::Sort(value)),
            _ => None,
        });
    };

    let Some(group) = Group::from_key(&key[..open]) else {
        return Ok(None);
    };

    let rest = &key[open + 1..];
    let Some(close) = rest.find(']') else {
        tracing::debug!(segment, "dropping unterminated bracket term");
        return Ok(None);
    };
    let name = &rest[..close];
    let trailing = &rest[close + 1..];

    if trailing.starts_with('[') {
        return Err(Error::NestedHierarchy {
            key: key.to_owned(),
        });
    }
    if name.is_empty() || !trailing.is_empty() {
        tracing::debug!(segment, "dropping malformed bracket term");
        return Ok(None);
    }
    let Some(value) = value else {
        tracing::debug!(segment, "dropping bracket term without a value");
        return Ok(None);
    };

    Ok(match group {
        Group::Filter => Some(Term::Filter { name, value }),
        Group::Page => Some(Term::Page {
            name,
            value,
            segment,
        }),
        Group::Sort => {
            tracing::debug!(segment, "ignoring bracketed sort term");
            None
        }
    })
}
