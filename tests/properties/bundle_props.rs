use std::collections::HashMap;

use proptest::prelude::*;

use cartwise::bundle::{BundleItem, BundleState, MAX_ALTERNATIVES};
use cartwise::core::Product;

fn arb_price() -> impl Strategy<Value = f64> {
    // whole cents keep sums comparable
    (0u32..100_000).prop_map(|cents| f64::from(cents) / 100.0)
}

fn arb_product(prefix: &'static str) -> impl Strategy<Value = Product> {
    (0u8..12, arb_price()).prop_map(move |(n, price)| {
        Product::new(format!("{prefix}-{n}"), format!("{prefix} {n}"), price)
    })
}

fn arb_bundle() -> impl Strategy<Value = (Vec<BundleItem>, HashMap<String, Vec<Product>>)> {
    prop::collection::vec(
        (arb_price(), prop::collection::vec(arb_product("alt"), 0..8)),
        1..5,
    )
    .prop_map(|slots| {
        let mut items = Vec::with_capacity(slots.len());
        let mut pools = HashMap::new();
        for (index, (price, pool)) in slots.into_iter().enumerate() {
            let slot_id = format!("slot-{index}");
            items.push(
                BundleItem::new(Product::new(format!("item-{index}"), "item", price))
                    .with_slot_id(slot_id.clone()),
            );
            pools.insert(slot_id, pool);
        }
        (items, pools)
    })
}

fn pool_is_well_formed(state: &BundleState) -> bool {
    let Some(bundle) = state.optimization() else {
        return true;
    };
    bundle.slots().iter().all(|slot| {
        let pool = bundle.alternatives(&slot.slot.slot_id);
        let mut ids: Vec<_> = pool.iter().map(|p| p.id.as_str()).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        len <= MAX_ALTERNATIVES && ids.len() == len && !ids.contains(&slot.product.id.as_str())
    })
}

proptest! {
    #[test]
    fn add_then_remove_is_identity(
        existing in prop::collection::vec(arb_product("cart"), 0..6),
        extra_price in arb_price(),
    ) {
        let mut state = BundleState::default();
        for product in existing {
            state.add_to_cart(product).unwrap();
        }
        let before = state.cart().to_vec();

        state.add_to_cart(Product::new("fresh", "Fresh", extra_price)).unwrap();
        prop_assert!(state.remove_from_cart("fresh"));
        prop_assert_eq!(state.cart(), before.as_slice());
    }

    #[test]
    fn pools_stay_bounded_and_unique(
        (items, pools) in arb_bundle(),
        swaps in prop::collection::vec((0usize..5, 0usize..5), 0..12),
    ) {
        let mut state = BundleState::default();
        state.receive_optimization_result(items, pools).unwrap();
        prop_assert!(pool_is_well_formed(&state));

        for (slot_pick, alt_pick) in swaps {
            let bundle = state.optimization().unwrap();
            let slot_index = slot_pick % bundle.len();
            let slot_id = bundle.slots()[slot_index].slot.slot_id.clone();
            let pool = bundle.alternatives(&slot_id);
            if pool.is_empty() {
                continue;
            }
            let product = pool[alt_pick % pool.len()].clone();
            state.swap(slot_index, product).unwrap();
            prop_assert!(pool_is_well_formed(&state));
        }
    }

    #[test]
    fn total_tracks_occupants_after_swaps(
        (items, pools) in arb_bundle(),
        swaps in prop::collection::vec((0usize..5, 0usize..5), 0..12),
    ) {
        let mut state = BundleState::default();
        state.receive_optimization_result(items, pools).unwrap();

        for (slot_pick, alt_pick) in swaps {
            let bundle = state.optimization().unwrap();
            let slot_index = slot_pick % bundle.len();
            let slot_id = bundle.slots()[slot_index].slot.slot_id.clone();
            let pool = bundle.alternatives(&slot_id);
            if pool.is_empty() {
                continue;
            }
            let product = pool[alt_pick % pool.len()].clone();
            state.swap(slot_index, product).unwrap();
        }

        let bundle = state.optimization().unwrap();
        let expected: f64 = bundle.slots().iter().map(|slot| slot.product.price).sum();
        prop_assert!((bundle.optimized_total() - expected).abs() < 1e-6);
        prop_assert!(bundle.verify().is_ok());
    }
}
