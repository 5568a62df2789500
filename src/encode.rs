//! Form-style encoding of free-text query values.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Spaces are excluded from the escape set so they can be mapped to `+`
/// afterwards, matching the form encoding the service expects.
const FORM: &AsciiSet = &NON_ALPHANUMERIC.remove(b' ');

/// Encode a free-text query value for the service's query string.
///
/// ASCII letters and digits pass through unchanged, spaces become `+`, and
/// every other byte is percent-escaped (UTF-8 input escapes per byte, so
/// `"café"` becomes `caf%C3%A9`).
pub fn form_encode(value: &str) -> String {
    utf8_percent_encode(value, FORM)
        .to_string()
        .replace(' ', "+")
}
