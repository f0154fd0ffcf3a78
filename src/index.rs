//! Tag index over a decoded geosite list.

use ahash::AHashMap;

use crate::geosite::{Domain, GeoSiteList};

/// Mapping from lowercased tag to the rules of that tag.
///
/// The index borrows rule lists from the decoded [`GeoSiteList`]; nothing is
/// copied. When a tag occurs more than once the last occurrence wins.
#[derive(Debug, Default)]
pub struct TagIndex<'a> {
    entries: AHashMap<String, &'a [Domain]>,
}

impl<'a> TagIndex<'a> {
    /// Build the index from a decoded list.
    pub fn build(list: &'a GeoSiteList) -> Self {
        let mut entries = AHashMap::with_capacity(list.entry.len());
        for site in &list.entry {
            let tag = site.country_code.to_lowercase();
            if let Some(previous) = entries.insert(tag, site.domain.as_slice()) {
                log::debug!(
                    "Tag {} defined more than once, dropping {} earlier rules",
                    site.country_code,
                    previous.len()
                );
            }
        }
        log::debug!("Indexed {} tags", entries.len());
        Self { entries }
    }

    /// Rules for a tag, matched exactly against the lowercased keys.
    pub fn get(&self, tag: &str) -> Option<&'a [Domain]> {
        self.entries.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tags in sorted order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// `(tag, rules)` pairs in sorted tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a [Domain])> + '_ {
        self.tags()
            .into_iter()
            .map(move |tag| (tag, self.entries[tag]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geosite::GeoSite;
    use crate::MatchType;

    #[test]
    fn test_keys_are_lowercased() {
        let list = GeoSiteList {
            entry: vec![
                GeoSite::new("CN", vec![Domain::new(MatchType::Domain, "a.cn")]),
                GeoSite::new("Geolocation-!CN", vec![]),
            ],
        };
        let index = TagIndex::build(&list);

        assert_eq!(index.tags(), vec!["cn", "geolocation-!cn"]);
        assert!(index.contains("cn"));
        assert!(!index.contains("CN"));
        assert!(index.get("geolocation-!cn").unwrap().is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let list = GeoSiteList {
            entry: vec![
                GeoSite::new("cn", vec![Domain::new(MatchType::Domain, "first.cn")]),
                GeoSite::new(
                    "CN",
                    vec![
                        Domain::new(MatchType::Full, "second.cn"),
                        Domain::new(MatchType::Full, "third.cn"),
                    ],
                ),
            ],
        };
        let index = TagIndex::build(&list);

        assert_eq!(index.len(), 1);
        let rules = index.get("cn").unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].value, "second.cn");
    }

    #[test]
    fn test_rules_are_borrowed() {
        let list = GeoSiteList {
            entry: vec![GeoSite::new(
                "us",
                vec![Domain::new(MatchType::Regex, "^ads\\.")],
            )],
        };
        let index = TagIndex::build(&list);

        let rules = index.get("us").unwrap();
        assert!(std::ptr::eq(rules.as_ptr(), list.entry[0].domain.as_ptr()));
    }
}
