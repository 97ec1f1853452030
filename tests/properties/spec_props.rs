use proptest::prelude::*;

use cartwise::core::{CartItem, Product};
use cartwise::quality::{budget_status, quality_score};
use cartwise::specs::{extract_specs, SpecKey};

fn arb_listing() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("15.6 inch".to_string()),
        Just("FHD".to_string()),
        Just("4K".to_string()),
        Just("144Hz".to_string()),
        Just("16GB RAM".to_string()),
        Just("512GB SSD".to_string()),
        Just("1TB HDD".to_string()),
        Just("RTX 4070".to_string()),
        Just("Wi-Fi 6".to_string()),
        Just("backlit keyboard".to_string()),
        "[a-zA-Z0-9 ]{0,16}",
    ];
    prop::collection::vec(fragment, 0..8).prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn extraction_is_deterministic(text in arb_listing()) {
        prop_assert_eq!(extract_specs(&text), extract_specs(&text));
    }

    #[test]
    fn extraction_never_panics_on_arbitrary_text(text in ".{0,200}") {
        let specs = extract_specs(&text);
        for (_, value) in specs.iter() {
            prop_assert!(!value.is_empty());
        }
    }

    #[test]
    fn keys_are_in_catalog_order(text in arb_listing()) {
        let keys: Vec<SpecKey> = extract_specs(&text).keys().collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn budget_percentage_is_monotonic(
        budget in 1.0f64..10_000.0,
        a in 0.0f64..20_000.0,
        b in 0.0f64..20_000.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_status = budget_status(low, budget);
        let high_status = budget_status(high, budget);
        prop_assert!(low_status.percentage <= high_status.percentage);
        prop_assert!(low_status.tier <= high_status.tier);
        prop_assert!((0.0..=100.0).contains(&high_status.percentage));
    }

    #[test]
    fn quality_is_monotonic_in_rating(
        ratings in prop::collection::vec(0.0f64..=5.0, 1..6),
        pick in 0usize..6,
        bump in 0.0f64..=5.0,
    ) {
        let cart: Vec<CartItem> = ratings
            .iter()
            .enumerate()
            .map(|(index, rating)| {
                CartItem::new(
                    Product::new(format!("p-{index}"), "item", 10.0)
                        .with_category(format!("c-{}", index % 3))
                        .with_rating(*rating),
                )
            })
            .collect();
        let mut raised = cart.clone();
        let index = pick % raised.len();
        let current = raised[index].product.rating.unwrap_or(0.0);
        raised[index].product.rating = Some((current + bump).min(5.0));

        let before = quality_score(&cart).overall;
        let after = quality_score(&raised).overall;
        prop_assert!(after + 1e-9 >= before);
        prop_assert!((0.0..=10.0).contains(&after));
    }
}
