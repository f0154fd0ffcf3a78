//! `tag[@attribute]` selector parsing.

use std::fmt;

/// A request for the rules of one tag, optionally filtered by attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<'s> {
    raw: &'s str,
    /// Tag to look up.
    pub tag: &'s str,
    /// Attribute key to filter by, `None` keeps every rule.
    pub attribute: Option<&'s str>,
}

impl<'s> Selector<'s> {
    /// Parse a selector, splitting on the first `@`.
    ///
    /// An empty attribute (`"cn@"`) means no attribute filter.
    pub fn parse(raw: &'s str) -> Self {
        let (tag, attribute) = match raw.split_once('@') {
            Some((tag, attr)) => (tag, Some(attr).filter(|a| !a.is_empty())),
            None => (raw, None),
        };
        Self {
            raw,
            tag,
            attribute,
        }
    }

    /// The selector exactly as given, used as the output label.
    pub fn as_str(&self) -> &'s str {
        self.raw
    }
}

impl fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
