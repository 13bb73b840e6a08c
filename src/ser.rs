//! Serialization of options back into a canonical querystring.

use crate::map::Map;

/// Accumulates `&`-separated segments.
struct Segments {
    buffer: String,
}

impl Segments {
    fn with_capacity(capacity: usize) -> Self {
        Segments {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Starts a new segment, inserting a separator if one came before.
    fn start(&mut self) -> &mut String {
        if !self.buffer.is_empty() {
            self.buffer.push('&');
        }
        &mut self.buffer
    }

    fn list(&mut self, key: &str, values: &[String]) {
        let buffer = self.start();
        buffer.push_str(key);
        buffer.push('=');
        join(buffer, values);
    }

    fn into_string(self) -> String {
        self.buffer
    }
}

fn join(buffer: &mut String, values: &[String]) {
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            buffer.push(',');
        }
        buffer.push_str(value);
    }
}

/// Builds a querystring from its parts.
///
/// Segments are written in a fixed order: every filter in map iteration
/// order, then `fields`, then the `page` fragment verbatim, then `sort`.
/// Empty parts are left out entirely, so there are never leading, trailing
/// or doubled `&` separators. Values are written as they are, without
/// percent-encoding.
///
/// ```
/// use queryoptions::map::Map;
///
/// let filter = Map::from_iter([(
///     "status".to_owned(),
///     vec!["open".to_owned(), "closed".to_owned()],
/// )]);
/// let sort = ["-id".to_owned()];
/// let qs = queryoptions::ser::encode(&filter, &[], "page[limit]=10&page[offset]=0", &sort);
/// assert_eq!(qs, "filter[status]=open,closed&page[limit]=10&page[offset]=0&sort=-id");
/// ```
pub fn encode(
    filter: &Map<String, Vec<String>>,
    fields: &[String],
    page: &str,
    sort: &[String],
) -> String {
    // a rough guess to avoid most reallocations
    let mut segments = Segments::with_capacity(64 + page.len());

    for (name, values) in filter {
        let buffer = segments.start();
        buffer.push_str("filter[");
        buffer.push_str(name);
        buffer.push_str("]=");
        join(buffer, values);
    }

    if !fields.is_empty() {
        segments.list("fields", fields);
    }

    if !page.is_empty() {
        segments.start().push_str(page);
    }

    if !sort.is_empty() {
        segments.list("sort", sort);
    }

    segments.into_string()
}

/// Renders a page map as `page[<key>]=<value>` segments in map iteration
/// order.
pub fn encode_page(page: &Map<String, i64>) -> String {
    let mut segments = Segments::with_capacity(page.len() * 16);
    let mut number = itoa::Buffer::new();
    for (key, value) in page {
        let buffer = segments.start();
        buffer.push_str("page[");
        buffer.push_str(key);
        buffer.push_str("]=");
        buffer.push_str(number.format(*value));
    }
    segments.into_string()
}

#[cfg(test)]
mod test {
    use super::{encode, encode_page};
    use crate::map::Map;

    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn encode_nothing() {
        assert_eq!(encode(&Map::new(), &[], "", &[]), "");
    }

    #[test]
    fn encode_single_parts() {
        let filter = Map::from_iter([("a".to_owned(), strings(&["1"]))]);
        assert_eq!(encode(&filter, &[], "", &[]), "filter[a]=1");
        assert_eq!(encode(&Map::new(), &strings(&["x", "y"]), "", &[]), "fields=x,y");
        assert_eq!(
            encode(&Map::new(), &[], "page[size]=1&page[page]=0", &[]),
            "page[size]=1&page[page]=0"
        );
        assert_eq!(encode(&Map::new(), &[], "", &strings(&["-a", "b"])), "sort=-a,b");
    }

    #[test]
    fn encode_ordering() {
        let filter = Map::from_iter([
            ("fieldA".to_owned(), strings(&["valueA", "valueB"])),
            ("fieldB".to_owned(), strings(&["valueC"])),
        ]);
        assert_eq!(
            encode(
                &filter,
                &strings(&["name"]),
                "page[limit]=10&page[offset]=0",
                &strings(&["fieldA", "-fieldB"]),
            ),
            "filter[fieldA]=valueA,valueB&filter[fieldB]=valueC&fields=name&page[limit]=10&page[offset]=0&sort=fieldA,-fieldB"
        );
    }

    #[test]
    fn encode_empty_filter_value() {
        let filter = Map::from_iter([("x".to_owned(), strings(&[""]))]);
        assert_eq!(encode(&filter, &[], "", &strings(&["y"])), "filter[x]=&sort=y");
    }

    #[test]
    fn encode_page_map() {
        let page = Map::from_iter([("limit".to_owned(), 10), ("offset".to_owned(), -1)]);
        assert_eq!(encode_page(&page), "page[limit]=10&page[offset]=-1");
        assert_eq!(encode_page(&Map::new()), "");
    }
}
