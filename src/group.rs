//! Selector resolution and attribute grouping.

use ahash::AHashMap;

use crate::geosite::Domain;
use crate::index::TagIndex;
use crate::selector::Selector;
use crate::{Error, Result};

/// A named set of rules ready to be written to one file.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputGroup<'a> {
    /// `tag`, `tag@attribute`, or the raw selector string.
    pub label: String,
    pub rules: Vec<&'a Domain>,
}

impl<'a> OutputGroup<'a> {
    pub fn new(label: impl Into<String>, rules: Vec<&'a Domain>) -> Self {
        Self {
            label: label.into(),
            rules,
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Keep the rules carrying `attribute`, or all rules when it is `None`.
pub fn filter_attribute<'a>(rules: &'a [Domain], attribute: Option<&str>) -> Vec<&'a Domain> {
    match attribute {
        Some(key) => rules.iter().filter(|r| r.has_attribute(key)).collect(),
        None => rules.iter().collect(),
    }
}

/// Group rules by attribute key.
///
/// A rule is added once per attribute it carries, so a rule with several
/// keys lands in several groups. Rules without attributes go to the `""`
/// group. Groups are returned in the order their key is first seen.
pub fn group_by_attribute(rules: &[Domain]) -> Vec<(&str, Vec<&Domain>)> {
    let mut positions: AHashMap<&str, usize> = AHashMap::new();
    let mut groups: Vec<(&str, Vec<&Domain>)> = Vec::new();

    let mut push = |key, rule| {
        let pos = *positions.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[pos].1.push(rule);
    };

    for rule in rules {
        if rule.attribute.is_empty() {
            push("", rule);
            continue;
        }
        for attr in &rule.attribute {
            push(attr.key.as_str(), rule);
        }
    }

    groups
}

/// Resolve one selector against the index.
pub fn resolve<'a>(index: &TagIndex<'a>, selector: &Selector<'_>) -> Result<OutputGroup<'a>> {
    let rules = index
        .get(selector.tag)
        .ok_or_else(|| Error::UnknownTag(selector.tag.to_string()))?;
    let rules = filter_attribute(rules, selector.attribute);
    if rules.is_empty() {
        log::warn!("Selector {} matched no rules", selector);
    }
    Ok(OutputGroup::new(selector.as_str(), rules))
}

/// Resolve every selector, failing on the first unknown tag.
pub fn resolve_all<'a>(index: &TagIndex<'a>, selectors: &[&str]) -> Result<Vec<OutputGroup<'a>>> {
    selectors
        .iter()
        .map(|s| resolve(index, &Selector::parse(s)))
        .collect()
}

/// Split every tag into one group per attribute key.
///
/// Tags are visited in sorted order.
pub fn auto_groups<'a>(index: &TagIndex<'a>) -> Vec<OutputGroup<'a>> {
    let mut out = Vec::new();
    for (tag, rules) in index.iter() {
        for (key, grouped) in group_by_attribute(rules) {
            let label = if key.is_empty() {
                tag.to_string()
            } else {
                format!("{}@{}", tag, key)
            };
            out.push(OutputGroup::new(label, grouped));
        }
    }
    out
}
