//! Generic rule-table evaluator.

use std::collections::BTreeMap;

use super::rules::{default_rules, SpecRule};
use super::{SpecGroup, SpecKey, SpecMap};

/// Separator between facets of a multi-valued key.
pub const FACET_SEPARATOR: &str = " + ";

/// Extract specs from free text with the built-in rule table.
///
/// Never fails. Identical input always yields an identical map.
#[must_use]
pub fn extract_specs(text: &str) -> SpecMap {
    extract_with(default_rules(), text)
}

/// Extract specs with an explicit rule table.
///
/// Groups are visited in [`SpecGroup::ALL`] order and rules inside a group in
/// table order. The first accepted match for a `(key, facet)` pair wins; a
/// match never suppresses rules of another key.
#[must_use]
pub fn extract_with(rules: &[SpecRule], text: &str) -> SpecMap {
    let mut specs = SpecMap::new();
    if text.trim().is_empty() {
        return specs;
    }

    let normalized = text.to_lowercase();
    let mut found: BTreeMap<(SpecKey, u8), String> = BTreeMap::new();

    for group in SpecGroup::ALL {
        for rule in rules.iter().filter(|rule| rule.group == group) {
            let slot = (rule.key, rule.facet);
            if found.contains_key(&slot) {
                continue;
            }
            if let Some(value) = rule.apply(&normalized) {
                tracing::trace!(rule = rule.name, key = %rule.key, %value, "spec rule matched");
                found.insert(slot, value);
            }
        }
    }

    // BTreeMap order gives catalog order, then facet order within a key.
    let mut current: Option<(SpecKey, Vec<String>)> = None;
    for ((key, _facet), value) in found {
        match current.as_mut() {
            Some((open_key, values)) if *open_key == key && key.is_multi_valued() => {
                values.push(value);
            }
            _ => {
                if let Some((open_key, values)) = current.take() {
                    specs.insert(open_key, values.join(FACET_SEPARATOR));
                }
                current = Some((key, vec![value]));
            }
        }
    }
    if let Some((open_key, values)) = current {
        specs.insert(open_key, values.join(FACET_SEPARATOR));
    }

    specs
}
