use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use cartwise::bundle::{BundleItem, BundleState, SlotOrigin, StateSnapshot, Transition};
use cartwise::core::Product;
use cartwise::optimizer::OptimizeResponse;
use cartwise::test_utils::fixtures::{monitor_alternatives, product, three_slot_bundle};
use cartwise::test_utils::logging::TestLogger;
use cartwise::CartwiseError;

fn response(products: &[(&str, f64)]) -> OptimizeResponse {
    let optimized_products: Vec<_> = products
        .iter()
        .map(|(id, price)| serde_json::json!({"id": id, "name": id, "price": price}))
        .collect();
    serde_json::from_value(serde_json::json!({ "optimized_products": optimized_products }))
        .unwrap()
}

#[test]
fn swap_updates_total_and_moves_displaced_to_front() {
    let log = TestLogger::new("swap_updates_total_and_moves_displaced_to_front");
    let mut state = BundleState::new(500.0).unwrap();
    state
        .receive_optimization_result(three_slot_bundle(), monitor_alternatives())
        .unwrap();
    assert!((state.optimization().unwrap().optimized_total() - 400.0).abs() < 1e-9);

    log.step("swap slot 0 to the $200 monitor");
    state.swap(0, product("monitor-32", 200.0, "monitors")).unwrap();

    let bundle = state.optimization().unwrap();
    assert!((bundle.optimized_total() - 450.0).abs() < 1e-9);
    let pool: Vec<_> = bundle
        .alternatives("suggestion_0")
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(pool, vec!["monitor-27", "monitor-24"]);
    assert_eq!(bundle.slots()[0].slot.slot_id, "suggestion_0");
    log.pass();
}

#[test]
fn apply_replaces_two_item_cart_with_three_item_bundle() {
    let log = TestLogger::new("apply_replaces_two_item_cart_with_three_item_bundle");
    let mut state = BundleState::new(500.0).unwrap();
    state.add_to_cart(product("old-mouse", 20.0, "peripherals")).unwrap();
    state.add_to_cart(product("monitor-27", 150.0, "monitors")).unwrap();

    state
        .receive_optimization_result(three_slot_bundle(), HashMap::new())
        .unwrap();
    assert_eq!(
        state.optimization().unwrap().slots()[0].slot.origin,
        SlotOrigin::FromCart
    );

    log.step("apply");
    state.apply_optimized_bundle().unwrap();

    let ids: Vec<_> = state.cart().iter().map(|item| item.product.id.as_str()).collect();
    assert_eq!(ids, vec!["monitor-27", "keyboard-mx", "headset-h7"]);
    assert!(state.cart().iter().all(|item| item.quantity == 1));
    assert!(state.optimization().is_none());
    assert!((state.cart_total() - 400.0).abs() < 1e-9);
    log.pass();
}

#[test]
fn late_response_for_superseded_request_is_discarded() {
    let log = TestLogger::new("late_response_for_superseded_request_is_discarded");
    let mut state = BundleState::new(500.0).unwrap();

    let first = state.begin_optimize("user-1");
    let second = state.begin_optimize("user-1");
    assert_eq!((first.sequence, second.sequence), (1, 2));

    log.step("second response arrives first");
    state
        .complete_optimize(second.sequence, Ok(response(&[("new-a", 10.0), ("new-b", 20.0)])))
        .unwrap();
    let after_second = state.optimization().cloned();

    log.step("first response arrives late");
    let err = state
        .complete_optimize(first.sequence, Ok(response(&[("stale", 999.0)])))
        .unwrap_err();
    assert!(matches!(err, CartwiseError::StaleResponse { sequence: 1, latest: 2 }));
    assert!(!err.is_user_facing());
    assert_eq!(state.optimization().cloned(), after_second);
    log.pass();
}

#[test]
fn add_then_remove_restores_cart() {
    let mut state = BundleState::default();
    state.add_to_cart(product("a", 5.0, "x")).unwrap();
    let before = state.cart().to_vec();

    state.add_to_cart(product("b", 7.0, "y")).unwrap();
    assert!(state.remove_from_cart("b"));
    assert_eq!(state.cart(), before.as_slice());
}

#[test]
fn invalid_bundle_is_rejected_without_side_effects() {
    let mut state = BundleState::default();
    state
        .receive_optimization_result(three_slot_bundle(), HashMap::new())
        .unwrap();
    let before = state.optimization().cloned();

    let err = state
        .receive_optimization_result(
            vec![BundleItem::new(Product::new("bad", "Bad", f64::NAN))],
            HashMap::new(),
        )
        .unwrap_err();
    assert!(matches!(err, CartwiseError::InvalidProduct { .. }));
    assert_eq!(state.optimization().cloned(), before);
}

#[test]
fn snapshots_follow_the_bundle_lifecycle() {
    let transitions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&transitions);
    let mut state = BundleState::new(500.0).unwrap();
    state.subscribe(move |snapshot: &StateSnapshot| {
        sink.borrow_mut()
            .push((snapshot.transition.clone(), snapshot.optimization.is_some()));
    });

    state
        .receive_optimization_result(three_slot_bundle(), monitor_alternatives())
        .unwrap();
    state.swap(0, product("monitor-24", 110.0, "monitors")).unwrap();
    state.apply_optimized_bundle().unwrap();

    assert_eq!(
        *transitions.borrow(),
        vec![
            (Transition::OptimizationReceived { sequence: None }, true),
            (Transition::Swapped { slot_index: 0 }, true),
            (Transition::BundleApplied, false),
        ]
    );
}
