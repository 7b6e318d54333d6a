//! Building blocks shared by every widget family's query builder.
//!
//! Widget queries are plain XPath 1.0 strings. Labels are always embedded
//! through [`escape_string`], and text comparisons always go through
//! [`normalized`] so that runs of whitespace and non-breaking spaces in the
//! rendered page compare equal to a single space.

use std::fmt;

/// The non-breaking space Appian renders between words of some labels.
pub const NBSP: char = '\u{a0}';

/// How a caller-supplied label is compared with the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPolicy {
    /// The normalized text must equal the label.
    Exact,
    /// The label must occur somewhere in the normalized text.
    Partial,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        MatchPolicy::Exact
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchPolicy::Exact => write!(f, "exact"),
            MatchPolicy::Partial => write!(f, "partial"),
        }
    }
}

/// Escape the specified string for use as an XPath string literal.
pub fn escape_string(value: &str) -> String {
    let contains_single = value.contains('\'');
    let contains_double = value.contains('\"');
    if contains_single && contains_double {
        let parts: Vec<String> = value.split('\"').map(|s| format!("\"{}\"", s)).collect();
        return format!("concat({})", parts.join(", '\"', "));
    }

    if contains_double {
        format!("'{}'", value)
    } else {
        format!("\"{}\"", value)
    }
}

/// Wrap `expr` so it evaluates to its whitespace-normalized string value.
pub fn normalized(expr: &str) -> String {
    format!("normalize-space(translate({}, '{}', ' '))", expr, NBSP)
}

/// Predicate comparing the normalized value of `expr` with `label`.
pub fn text_matches(expr: &str, label: &str, policy: MatchPolicy) -> String {
    match policy {
        MatchPolicy::Exact => format!("{} = {}", normalized(expr), escape_string(label)),
        MatchPolicy::Partial => format!("contains({}, {})", normalized(expr), escape_string(label)),
    }
}

/// Predicate matching an attribute exactly, without normalization.
pub fn attr_equals(attribute: &str, value: &str) -> String {
    format!("@{} = {}", attribute, escape_string(value))
}
