use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("[&><\"']").unwrap());

/// Escape text so it can be placed in markup, either as text content or inside a quoted attribute
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    ESCAPE_REGEX.replace_all(text, |caps: &regex::Captures| -> &'static str {
        match &caps[0] {
            "&" => "&amp;",
            ">" => "&gt;",
            "<" => "&lt;",
            "\"" => "&quot;",
            "'" => "&#x27;",
            _ => "",
        }
    })
}
