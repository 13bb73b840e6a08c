//! Helpers turning raw value strings into lists and integers.

use std::num::ParseIntError;

fn trim_one_start(s: &str) -> &str {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_whitespace() => chars.as_str(),
        _ => s,
    }
}

fn trim_one_end(s: &str) -> &str {
    let mut chars = s.chars();
    match chars.next_back() {
        Some(c) if c.is_ascii_whitespace() => chars.as_str(),
        _ => s,
    }
}

/// Splits a list value on commas.
///
/// A single whitespace character on either side of each comma is treated
/// as part of the separator, so `a, b` and `a ,b` both yield `["a", "b"]`.
/// Whitespace at the very start or end of the value is kept.
///
/// A value without commas, including the empty string, yields exactly one
/// item.
pub fn split_list(value: &str) -> impl Iterator<Item = &str> + '_ {
    let last = value.matches(',').count();
    value.split(',').enumerate().map(move |(idx, item)| {
        let item = if idx > 0 { trim_one_start(item) } else { item };
        if idx < last { trim_one_end(item) } else { item }
    })
}

/// Parses a signed integer, inferring the radix from its prefix.
///
/// `0x`/`0X` selects hex, `0o`/`0O` and a bare leading `0` select octal,
/// `0b`/`0B` selects binary. Everything else is base 10. An optional sign
/// may precede the prefix but not follow it.
pub fn parse_int(value: &str) -> Result<i64, ParseIntError> {
    let (sign, unsigned) = match value.as_bytes().first() {
        Some(b'-') => ('-', &value[1..]),
        Some(b'+') => ('+', &value[1..]),
        _ => ('+', value),
    };

    let (radix, digits) = match unsigned.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &unsigned[2..]),
        [b'0', b'o' | b'O', ..] => (8, &unsigned[2..]),
        [b'0', b'b' | b'B', ..] => (2, &unsigned[2..]),
        [b'0', _, ..] => (8, &unsigned[1..]),
        _ => (10, unsigned),
    };

    // re-attach the sign explicitly so that a second sign after the radix
    // prefix (e.g. `0x-1`) is rejected by `from_str_radix`
    i64::from_str_radix(&format!("{sign}{digits}"), radix)
}
