use std::num::ParseIntError;

/// Error type for `queryoptions`.
///
/// Only three kinds of input are rejected outright. Anything else that
/// looks like a querystring decodes to a best-effort [`Options`] value.
///
/// [`Options`]: crate::Options
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A `%` escape was not followed by two hex digits, or the decoded
    /// bytes were not valid UTF-8.
    #[error("invalid percent-encoding at position {position}")]
    InvalidEncoding { position: usize },

    /// A `page[<key>]` value could not be parsed as an integer.
    #[error("invalid value for page[{key}]: '{value}'")]
    InvalidPageValue {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The querystring nests more than one bracket level, e.g.
    /// `filter[a][b]=c`.
    #[error("cannot parse nested object hierarchy: {key}")]
    NestedHierarchy { key: String },
}

impl Error {
    /// Generate an encoding error at the given byte offset.
    pub(crate) fn invalid_encoding(position: usize) -> Self {
        Error::InvalidEncoding { position }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
