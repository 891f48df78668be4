//! This module holds the comment stripping pass that runs over the raw
//! configuration text before it is parsed as JSON.

// non-std crates
use regex::Regex;

/// Removes both line comments (`//`) and block comments (`/* ... */`) from
/// a JSON string.
///
/// Line comments span to the end of their line; the line break itself is
/// kept. Block comments may span multiple lines. Everything outside a
/// comment span is preserved byte-for-byte, so stripping an already
/// stripped string changes nothing.
///
/// Comment openers inside JSON string literals are not protected: a value
/// containing `//` or `/*` is stripped like any other comment. Known
/// limitation.
pub fn strip_comments(json_string: &str) -> String {
    let re = Regex::new(r"//[^\n]*|(?s:/\*.*?\*/)").unwrap();
    re.replace_all(json_string, "").to_string()
}
