use httpmock::prelude::*;
use serde_json::json;

use cartwise::bundle::{BundleState, SlotOrigin};
use cartwise::optimizer::{run_optimize, HttpOptimizer, OptimizerService};
use cartwise::test_utils::fixtures::product;
use cartwise::test_utils::logging::TestLogger;
use cartwise::CartwiseError;

fn cart_state() -> BundleState {
    let mut state = BundleState::new(500.0).unwrap();
    state.add_to_cart(product("monitor-27", 150.0, "monitors")).unwrap();
    state
}

#[test]
fn posts_cart_and_installs_bundle() {
    let log = TestLogger::new("posts_cart_and_installs_bundle");
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/optimize")
            .body_includes("\"user_id\":\"tester\"")
            .body_includes("\"monitor-27\"");
        then.status(200).json_body(json!({
            "optimized_products": [
                {"id": "monitor-27", "name": "Monitor 27", "price": 150.0, "source": "cart"},
                {"id": "keyboard-mx", "name": "Keyboard MX", "price": 120.0}
            ],
            "optimized_total": 270.0,
            "alternatives": {
                "suggestion_1": [{"id": "keyboard-k2", "name": "Keyboard K2", "price": 80.0}]
            }
        }));
    });

    let optimizer = HttpOptimizer::new(&server.url("/optimize"), 5).unwrap();
    let mut state = cart_state();
    log.step("run optimize against mock server");
    run_optimize(&mut state, &optimizer, "tester").unwrap();
    mock.assert();

    let bundle = state.optimization().unwrap();
    assert_eq!(bundle.len(), 2);
    assert_eq!(bundle.slots()[0].slot.origin, SlotOrigin::FromCart);
    assert_eq!(bundle.slots()[1].slot.origin, SlotOrigin::Suggestion);
    assert!((bundle.optimized_total() - 270.0).abs() < 1e-9);
    assert_eq!(bundle.alternatives("suggestion_1")[0].id, "keyboard-k2");
    assert!(!state.is_optimizing());
    log.pass();
}

#[test]
fn server_error_leaves_state_untouched() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/optimize");
        then.status(500).body("boom");
    });

    let optimizer = HttpOptimizer::new(&server.url("/optimize"), 5).unwrap();
    let mut state = cart_state();
    let err = run_optimize(&mut state, &optimizer, "tester").unwrap_err();
    assert!(matches!(err, CartwiseError::ExternalFetch(_)));
    assert!(state.optimization().is_none());
    assert_eq!(state.cart().len(), 1);
    assert!(!state.is_optimizing());
}

#[test]
fn malformed_body_is_an_external_fetch_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/optimize");
        then.status(200).body("<html>not json</html>");
    });

    let optimizer = HttpOptimizer::new(&server.url("/optimize"), 5).unwrap();
    let request = cart_state().begin_optimize("tester");
    let err = optimizer.optimize(&request).unwrap_err();
    assert!(matches!(err, CartwiseError::ExternalFetch(_)));
}

#[test]
fn empty_endpoint_is_missing_config() {
    let err = HttpOptimizer::new("  ", 5).unwrap_err();
    assert!(matches!(err, CartwiseError::MissingConfig(_)));
}
