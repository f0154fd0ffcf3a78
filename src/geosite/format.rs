//! Protobuf message definitions for geosite files.

use crate::MatchType;

/// Top-level list of tagged rule sets.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeoSiteList {
    #[prost(message, repeated, tag = "1")]
    pub entry: Vec<GeoSite>,
}

/// Rules sharing one country/region tag.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeoSite {
    #[prost(string, tag = "1")]
    pub country_code: String,
    #[prost(message, repeated, tag = "2")]
    pub domain: Vec<Domain>,
    #[prost(bytes = "vec", tag = "3")]
    pub resource_hash: Vec<u8>,
    #[prost(string, tag = "4")]
    pub code: String,
}

/// A single domain rule.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Domain {
    /// Raw match type code, see [`MatchType`].
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub value: String,
    #[prost(message, repeated, tag = "3")]
    pub attribute: Vec<Attribute>,
}

/// Attribute attached to a domain rule.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Attribute {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(oneof = "attribute::TypedValue", tags = "2, 3")]
    pub typed_value: Option<attribute::TypedValue>,
}

pub mod attribute {
    /// Attribute payload.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum TypedValue {
        #[prost(bool, tag = "2")]
        BoolValue(bool),
        #[prost(int64, tag = "3")]
        IntValue(i64),
    }
}

impl GeoSite {
    /// Create an entry with the given tag and rules.
    pub fn new(country_code: impl Into<String>, domain: Vec<Domain>) -> Self {
        Self {
            country_code: country_code.into(),
            domain,
            ..Default::default()
        }
    }
}

impl Domain {
    /// Create a rule without attributes.
    pub fn new(match_type: MatchType, value: impl Into<String>) -> Self {
        Self {
            r#type: match_type.as_i32(),
            value: value.into(),
            attribute: Vec::new(),
        }
    }

    /// Add a boolean attribute.
    pub fn with_attribute(mut self, key: impl Into<String>) -> Self {
        self.attribute.push(Attribute::flag(key));
        self
    }

    /// Decoded match type, `None` when the code is unknown.
    pub fn match_type(&self) -> Option<MatchType> {
        MatchType::from_i32(self.r#type)
    }

    /// Whether any attribute carries exactly this key.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attribute.iter().any(|a| a.key == key)
    }
}

impl Attribute {
    /// Boolean attribute set to true, the form geosite files use.
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            typed_value: Some(attribute::TypedValue::BoolValue(true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_unknown_match_type_survives_decode() {
        let mut rule = Domain::new(MatchType::Full, "a.b");
        rule.r#type = 42;
        let list = GeoSiteList {
            entry: vec![GeoSite::new("CN", vec![rule])],
        };

        let decoded = GeoSiteList::decode(list.encode_to_vec().as_slice()).unwrap();
        let rule = &decoded.entry[0].domain[0];
        assert_eq!(rule.r#type, 42);
        assert_eq!(rule.match_type(), None);
    }

    #[test]
    fn test_has_attribute_is_case_sensitive() {
        let rule = Domain::new(MatchType::Domain, "example.com").with_attribute("ads");
        assert!(rule.has_attribute("ads"));
        assert!(!rule.has_attribute("ADS"));
        assert!(!rule.has_attribute(""));
    }
}
