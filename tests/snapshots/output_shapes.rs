use insta::assert_snapshot;

use cartwise::bundle::OptimizationResult;
use cartwise::quality::budget_status;
use cartwise::specs::extract_specs;
use cartwise::test_utils::fixtures::{gaming_laptop, monitor_alternatives, three_slot_bundle};

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap()
}

#[test]
fn budget_status_json() {
    assert_snapshot!(pretty(&budget_status(425.0, 500.0)), @r#"
    {
      "total": 425.0,
      "budget": 500.0,
      "percentage": 85.0,
      "raw_percentage": 85.0,
      "remaining": 75.0,
      "tier": "tight",
      "over_budget": false,
      "invalid_budget": false
    }
    "#);
}

#[test]
fn gaming_laptop_spec_map() {
    let specs = extract_specs(&gaming_laptop().spec_text());
    assert_snapshot!(pretty(&specs), @r#"
    {
      "screenSize": "15.6\"",
      "resolution": "Full HD 1080p",
      "refreshRate": "144Hz",
      "processor": "Intel Core I7-12700H",
      "ram": "16GB RAM",
      "storage": "512GB SSD",
      "graphics": "NVIDIA RTX 4060"
    }
    "#);
}

#[test]
fn optimized_bundle_slot_listing() {
    let bundle = OptimizationResult::build(three_slot_bundle(), monitor_alternatives(), |id| {
        id == "monitor-27"
    })
    .unwrap();
    let listing: Vec<String> = bundle
        .slots()
        .iter()
        .map(|slot| {
            let alternatives: Vec<&str> = bundle
                .alternatives(&slot.slot.slot_id)
                .iter()
                .map(|p| p.id.as_str())
                .collect();
            format!(
                "{} {:?} {} {:.2} [{}]",
                slot.slot.slot_id,
                slot.slot.origin,
                slot.product.id,
                slot.product.price,
                alternatives.join(", ")
            )
        })
        .collect();
    assert_snapshot!(listing.join("\n"), @r"
    suggestion_0 FromCart monitor-27 150.00 [monitor-32, monitor-24]
    suggestion_1 Suggestion keyboard-mx 120.00 []
    suggestion_2 Suggestion headset-h7 130.00 []
    ");
}
