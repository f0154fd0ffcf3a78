//! Match type definitions.

/// MatchType describes how a rule value is matched against a domain.
///
/// The discriminants are the wire values used by `geosite.dat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MatchType {
    /// Substring (keyword) match
    Plain = 0,
    /// Regular expression match
    Regex = 1,
    /// Domain and all of its subdomains
    Domain = 2,
    /// Exact domain match
    Full = 3,
}

impl MatchType {
    /// All match types in wire order.
    pub const ALL: [MatchType; 4] = [
        MatchType::Plain,
        MatchType::Regex,
        MatchType::Domain,
        MatchType::Full,
    ];

    /// Convert from a wire value.
    ///
    /// Returns `None` for codes outside the known range.
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            0 => Some(MatchType::Plain),
            1 => Some(MatchType::Regex),
            2 => Some(MatchType::Domain),
            3 => Some(MatchType::Full),
            _ => None,
        }
    }

    /// Convert to the wire value.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Line prefix used in the text rule format.
    pub fn prefix(&self) -> &'static str {
        match self {
            MatchType::Plain => "keyword:",
            MatchType::Regex => "regexp:",
            MatchType::Domain => "",
            MatchType::Full => "full:",
        }
    }

    /// Split a text rule line into its match type and value.
    ///
    /// Lines without a known prefix are domain rules. The explicit
    /// `domain:` prefix is also accepted.
    pub fn split_line(line: &str) -> (Self, &str) {
        for (prefix, match_type) in [
            ("keyword:", MatchType::Plain),
            ("regexp:", MatchType::Regex),
            ("full:", MatchType::Full),
            ("domain:", MatchType::Domain),
        ] {
            if let Some(value) = line.strip_prefix(prefix) {
                return (match_type, value);
            }
        }
        (MatchType::Domain, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_from_i32() {
        assert_eq!(MatchType::from_i32(0), Some(MatchType::Plain));
        assert_eq!(MatchType::from_i32(1), Some(MatchType::Regex));
        assert_eq!(MatchType::from_i32(2), Some(MatchType::Domain));
        assert_eq!(MatchType::from_i32(3), Some(MatchType::Full));
        assert_eq!(MatchType::from_i32(4), None);
        assert_eq!(MatchType::from_i32(-1), None);
    }

    #[test]
    fn test_prefix_identifies_type() {
        for match_type in MatchType::ALL {
            let line = format!("{}example.com", match_type.prefix());
            assert_eq!(MatchType::split_line(&line), (match_type, "example.com"));
        }
    }

    #[test]
    fn test_domain_prefix_is_accepted() {
        assert_eq!(
            MatchType::split_line("domain:example.com"),
            (MatchType::Domain, "example.com")
        );
    }
}
