//! Request and response bodies of the optimize service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bundle::{BundleItem, SlotOrigin};
use crate::core::Product;

/// Body sent to the optimize service.
///
/// `sequence` is local bookkeeping and never leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizeRequest {
    #[serde(skip)]
    pub sequence: u64,
    pub cart: Vec<Product>,
    pub budget: f64,
    pub user_id: String,
}

/// One product of the proposed bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireBundleProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,
    /// Free-form origin tag; unknown values are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    #[serde(default)]
    pub optimized_products: Vec<WireBundleProduct>,
    /// Informational only; the bundle total is always recomputed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_total: Option<f64>,
    #[serde(default)]
    pub alternatives: HashMap<String, Vec<Product>>,
}

impl OptimizeResponse {
    /// Split into bundle items and alternatives keyed by slot id.
    #[must_use]
    pub fn into_parts(self) -> (Vec<BundleItem>, HashMap<String, Vec<Product>>) {
        let items = self
            .optimized_products
            .into_iter()
            .map(|wire| BundleItem {
                product: wire.product,
                slot_id: wire.slot_id,
                origin: wire.source.as_deref().and_then(parse_source),
            })
            .collect();
        (items, self.alternatives)
    }
}

fn parse_source(source: &str) -> Option<SlotOrigin> {
    match source.trim().to_ascii_lowercase().as_str() {
        "cart" | "from_cart" | "fromcart" | "user" => Some(SlotOrigin::FromCart),
        "suggestion" | "ai" | "optimizer" | "recommended" => Some(SlotOrigin::Suggestion),
        _ => None,
    }
}
