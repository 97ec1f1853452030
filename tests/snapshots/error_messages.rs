use insta::assert_snapshot;

use cartwise::CartwiseError;

#[test]
fn invalid_product() {
    let err = CartwiseError::invalid_product("sku-7", "price must be finite and non-negative");
    assert_snapshot!(err.to_string(), @"Invalid product sku-7: price must be finite and non-negative");
}

#[test]
fn slot_out_of_range() {
    let err = CartwiseError::SlotOutOfRange { index: 4, len: 3 };
    assert_snapshot!(err.to_string(), @"Slot index 4 out of range (bundle has 3 slots)");
}

#[test]
fn stale_response() {
    let err = CartwiseError::StaleResponse { sequence: 1, latest: 2 };
    assert_snapshot!(err.to_string(), @"Stale optimize response: sequence 1 superseded by 2");
}

#[test]
fn no_optimization_with_hint() {
    let err = CartwiseError::NoOptimization;
    let rendered = format!("{err}\nHint: {}", err.code().suggestion());
    assert_snapshot!(rendered, @r"
    No optimized bundle is present
    Hint: Run `cartwise optimize` to request an optimized bundle first
    ");
}

#[test]
fn structured_display() {
    let structured = CartwiseError::MissingConfig("optimizer.endpoint".to_string()).to_structured();
    assert_snapshot!(
        structured.to_string(),
        @"[E304] Missing required config: optimizer.endpoint"
    );
}
