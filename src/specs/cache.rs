//! Memoized spec lookup and side-by-side comparison.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;

use super::engine::extract_specs;
use super::{SpecKey, SpecMap};
use crate::core::Product;

const DEFAULT_CAPACITY: usize = 256;

/// Bounded cache of extracted specs keyed by product id.
///
/// Extraction is pure and products are immutable, so an id always maps to
/// the same spec map.
pub struct SpecCache {
    entries: Mutex<LruCache<String, SpecMap>>,
}

impl std::fmt::Debug for SpecCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.lock();
        f.debug_struct("SpecCache")
            .field("len", &entries.len())
            .field("capacity", &entries.cap())
            .finish()
    }
}

impl Default for SpecCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SpecCache {
    /// A zero capacity is bumped to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Specs for a product, extracted from brand, name and description.
    pub fn specs_for(&self, product: &Product) -> SpecMap {
        let mut entries = self.entries.lock();
        if let Some(specs) = entries.get(&product.id) {
            return specs.clone();
        }
        let specs = extract_specs(&product.spec_text());
        entries.put(product.id.clone(), specs.clone());
        specs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// One row of a two-product spec comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecComparisonRow {
    pub key: SpecKey,
    pub label: &'static str,
    pub left: Option<String>,
    pub right: Option<String>,
}

impl SpecComparisonRow {
    #[must_use]
    pub fn differs(&self) -> bool {
        self.left != self.right
    }
}

/// Rows over the union of keys in catalog order.
#[must_use]
pub fn compare_specs(left: &SpecMap, right: &SpecMap) -> Vec<SpecComparisonRow> {
    let keys: BTreeSet<SpecKey> = left.keys().chain(right.keys()).collect();
    keys.into_iter()
        .map(|key| SpecComparisonRow {
            key,
            label: key.label(),
            left: left.get(key).map(str::to_string),
            right: right.get(key).map(str::to_string),
        })
        .collect()
}
