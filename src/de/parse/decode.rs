use std::borrow::Cow;

use crate::error::{Error, Result};

#[inline(always)]
fn is_hex_digit(c: Option<&u8>) -> bool {
    c.is_some_and(u8::is_ascii_hexdigit)
}

/// Top-level keys whose values keep a literal `+`: there it is an
/// ascending sort prefix, not an encoded space.
const VERBATIM_PLUS_KEYS: [&str; 2] = ["sort", "fields"];

/// Decodes the input string, applying the following:
/// - Replaces `+` with a space (when `plus_as_space` is set), except in
///   `sort=` and `fields=` segments
/// - Decodes percent-encoded characters
/// - Converts the result to a UTF-8 string
///
/// Unlike a lenient form decoder, a `%` that is not followed by two hex
/// digits is rejected, as is any decoded byte sequence that is not UTF-8.
/// The reported position is the byte offset of the offending `%` in the
/// input, or of the first invalid byte in the decoded output.
pub fn decode(input: &str, plus_as_space: bool) -> Result<Cow<'_, str>> {
    let bytes = input.as_bytes();
    let has_plus = plus_as_space && bytes.contains(&b'+');
    if !has_plus && !bytes.contains(&b'%') {
        // nothing to decode
        return Ok(Cow::Borrowed(input));
    }

    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            if !is_hex_digit(bytes.get(idx + 1)) || !is_hex_digit(bytes.get(idx + 2)) {
                return Err(Error::invalid_encoding(idx));
            }
            idx += 3;
        } else {
            idx += 1;
        }
    }

    // `+` has to be replaced before percent-decoding so that an escaped
    // `%2B` survives as a literal plus
    let spaced: Cow<'_, [u8]> = if has_plus {
        Cow::Owned(replace_plus(input))
    } else {
        Cow::Borrowed(bytes)
    };

    let decoded: Cow<'_, [u8]> = percent_encoding::percent_decode(&spaced).into();
    String::from_utf8(decoded.into_owned())
        .map(Cow::Owned)
        .map_err(|e| Error::invalid_encoding(e.utf8_error().valid_up_to()))
}

/// Replaces `+` with a space segment by segment, leaving the segments
/// keyed by one of [`VERBATIM_PLUS_KEYS`] untouched.
fn replace_plus(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for (idx, segment) in input.split('&').enumerate() {
        if idx > 0 {
            out.push(b'&');
        }
        let key = segment.split_once('=').map_or(segment, |(key, _)| key);
        if VERBATIM_PLUS_KEYS.contains(&key) {
            out.extend_from_slice(segment.as_bytes());
        } else {
            out.extend(segment.bytes().map(|b| if b == b'+' { b' ' } else { b }));
        }
    }
    out
}
