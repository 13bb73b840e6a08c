use crate::error::Result;
use crate::Options;

/// Configuration for decoding querystrings into [`Options`].
///
/// ## Plus as space
///
/// Querystrings produced by HTML forms encode spaces as `+`. By default a
/// `+` is decoded to a space, matching `application/x-www-form-urlencoded`
/// handling. The `sort` and `fields` values are the exception: a literal
/// `+` there is the ascending prefix and is always kept. Disable this to
/// keep literal `+` characters everywhere.
///
/// ```
/// use queryoptions::Config;
///
/// let options = Config::new().decode("filter[name]=a+b&sort=+name").unwrap();
/// assert_eq!(options.filter["name"], vec!["a b"]);
/// assert_eq!(options.sort, vec!["+name"]);
///
/// let options = Config::new().plus_as_space(false).decode("filter[name]=a+b").unwrap();
/// assert_eq!(options.filter["name"], vec!["a+b"]);
/// ```
///
/// ## Pagination strategy inference
///
/// When a `page[limit]` key is present the offset strategy is attached,
/// and when `page[size]` is present the page-size strategy is attached.
/// Switch this off to always get an `Options` value without a strategy
/// and inject one explicitly.
///
/// Default values: `plus_as_space = true`, `infer_pagination = true`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) plus_as_space: bool,
    pub(crate) infer_pagination: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            plus_as_space: true,
            infer_pagination: true,
        }
    }

    /// Whether `+` decodes to a space. Default is `true`.
    pub const fn plus_as_space(mut self, plus_as_space: bool) -> Self {
        self.plus_as_space = plus_as_space;
        self
    }

    /// Whether a pagination strategy is attached based on the page keys
    /// present in the querystring. Default is `true`.
    pub const fn infer_pagination(mut self, infer_pagination: bool) -> Self {
        self.infer_pagination = infer_pagination;
        self
    }

    /// Decodes a querystring into [`Options`] using this `Config`.
    pub fn decode(self, input: &str) -> Result<Options> {
        crate::de::decode_with_config(input, self)
    }
}
