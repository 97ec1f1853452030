//! Optimized bundle: slots, occupants and alternatives pools.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::Product;
use crate::error::{CartwiseError, Result};

/// Most alternatives a slot keeps.
pub const MAX_ALTERNATIVES: usize = 4;

/// Prefix for slot ids assigned to items that arrive without one.
pub const GENERATED_SLOT_PREFIX: &str = "suggestion_";

/// Where a slot's first occupant came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotOrigin {
    #[serde(alias = "cart")]
    FromCart,
    #[serde(alias = "ai", alias = "optimizer")]
    Suggestion,
}

impl SlotOrigin {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FromCart => "from_cart",
            Self::Suggestion => "suggestion",
        }
    }
}

/// A fixed position in the bundle. Identity survives swaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub slot_id: String,
    pub origin: SlotOrigin,
}

/// One incoming bundle line before slot ids and origins are settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleItem {
    pub product: Product,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<SlotOrigin>,
}

impl BundleItem {
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            slot_id: None,
            origin: None,
        }
    }

    #[must_use]
    pub fn with_slot_id(mut self, slot_id: impl Into<String>) -> Self {
        self.slot_id = Some(slot_id.into());
        self
    }

    #[must_use]
    pub const fn with_origin(mut self, origin: SlotOrigin) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// A slot and the product currently filling it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleSlot {
    #[serde(flatten)]
    pub slot: Slot,
    pub product: Product,
}

/// The bundle as currently edited.
///
/// `optimized_total` always equals the sum of occupant prices and every pool
/// holds at most [`MAX_ALTERNATIVES`] distinct products, none of them the
/// slot's occupant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    slots: Vec<BundleSlot>,
    optimized_total: f64,
    alternatives: HashMap<String, Vec<Product>>,
}

impl OptimizationResult {
    /// Build a result from raw optimizer output.
    ///
    /// `in_cart` decides the default origin of items without one. Every
    /// product is validated before anything is built.
    pub fn build(
        items: Vec<BundleItem>,
        alternatives: HashMap<String, Vec<Product>>,
        in_cart: impl Fn(&str) -> bool,
    ) -> Result<Self> {
        for item in &items {
            item.product.validate()?;
        }
        for product in alternatives.values().flatten() {
            product.validate()?;
        }

        let mut seen = HashSet::with_capacity(items.len());
        let mut slots = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let slot_id = item
                .slot_id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| format!("{GENERATED_SLOT_PREFIX}{index}"));
            if !seen.insert(slot_id.clone()) {
                return Err(CartwiseError::Validation(format!(
                    "duplicate slot id '{slot_id}' in optimized bundle"
                )));
            }
            let origin = item.origin.unwrap_or_else(|| {
                if in_cart(&item.product.id) {
                    SlotOrigin::FromCart
                } else {
                    SlotOrigin::Suggestion
                }
            });
            slots.push(BundleSlot {
                slot: Slot { slot_id, origin },
                product: item.product,
            });
        }

        let mut pools = HashMap::with_capacity(slots.len());
        let mut alternatives = alternatives;
        for slot in &slots {
            let raw = alternatives.remove(&slot.slot.slot_id).unwrap_or_default();
            let pool = normalize_pool(raw, &slot.product.id);
            if !pool.is_empty() {
                pools.insert(slot.slot.slot_id.clone(), pool);
            }
        }
        if !alternatives.is_empty() {
            tracing::debug!(
                orphaned = alternatives.len(),
                "dropping alternatives for unknown slots"
            );
        }

        let optimized_total = occupant_total(&slots);
        Ok(Self {
            slots,
            optimized_total,
            alternatives: pools,
        })
    }

    #[must_use]
    pub fn slots(&self) -> &[BundleSlot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub const fn optimized_total(&self) -> f64 {
        self.optimized_total
    }

    /// Alternatives for a slot, most recently displaced first.
    #[must_use]
    pub fn alternatives(&self, slot_id: &str) -> &[Product] {
        self.alternatives.get(slot_id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn slot_index(&self, slot_id: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.slot.slot_id == slot_id)
    }

    /// Result of swapping `product` into `slot_index`, leaving `self` as is.
    ///
    /// Returns `Ok(None)` when `product` already occupies the slot.
    pub fn swapped(&self, slot_index: usize, product: Product) -> Result<Option<Self>> {
        product.validate()?;
        let current = self.slots.get(slot_index).ok_or(CartwiseError::SlotOutOfRange {
            index: slot_index,
            len: self.slots.len(),
        })?;
        if current.product.id == product.id {
            return Ok(None);
        }

        let slot_id = current.slot.slot_id.clone();
        let mut next = self.clone();
        let displaced = std::mem::replace(&mut next.slots[slot_index].product, product);
        let incoming_id = next.slots[slot_index].product.id.clone();

        let pool = next.alternatives.remove(&slot_id).unwrap_or_default();
        let mut rebuilt = Vec::with_capacity(pool.len() + 1);
        rebuilt.push(displaced);
        rebuilt.extend(pool);
        let pool = normalize_pool(rebuilt, &incoming_id);
        debug_assert!(pool.len() <= MAX_ALTERNATIVES);
        next.alternatives.insert(slot_id, pool);

        next.optimized_total = occupant_total(&next.slots);
        Ok(Some(next))
    }

    /// Check the pool and total invariants.
    ///
    /// A failure here is a defect, never a user error.
    pub fn verify(&self) -> Result<()> {
        for (slot_id, pool) in &self.alternatives {
            if pool.len() > MAX_ALTERNATIVES {
                return Err(CartwiseError::InvariantViolation(format!(
                    "slot '{slot_id}' holds {} alternatives",
                    pool.len()
                )));
            }
            let mut ids = HashSet::with_capacity(pool.len());
            if let Some(dup) = pool.iter().find(|product| !ids.insert(product.id.as_str())) {
                return Err(CartwiseError::InvariantViolation(format!(
                    "slot '{slot_id}' lists '{}' twice",
                    dup.id
                )));
            }
            let occupant = self
                .slots
                .iter()
                .find(|slot| &slot.slot.slot_id == slot_id)
                .map(|slot| slot.product.id.as_str());
            if occupant.is_some_and(|id| ids.contains(id)) {
                return Err(CartwiseError::InvariantViolation(format!(
                    "slot '{slot_id}' lists its occupant as an alternative"
                )));
            }
        }
        let expected = occupant_total(&self.slots);
        if (expected - self.optimized_total).abs() > f64::EPSILON * expected.abs().max(1.0) {
            return Err(CartwiseError::InvariantViolation(format!(
                "optimized total {} does not match slot sum {expected}",
                self.optimized_total
            )));
        }
        Ok(())
    }
}

/// De-duplicate by id keeping first occurrence, drop `occupant_id`, truncate.
fn normalize_pool(products: Vec<Product>, occupant_id: &str) -> Vec<Product> {
    let mut seen = HashSet::new();
    products
        .into_iter()
        .filter(|product| product.id != occupant_id && seen.insert(product.id.clone()))
        .take(MAX_ALTERNATIVES)
        .collect()
}

fn occupant_total(slots: &[BundleSlot]) -> f64 {
    slots.iter().map(|slot| slot.product.price).sum()
}
