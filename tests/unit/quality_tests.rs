use cartwise::core::CartItem;
use cartwise::quality::{budget_status, quality_score, BudgetTier, QualityGrade};
use cartwise::test_utils::fixtures::product;
use cartwise::test_utils::{run_table_tests, TestCase};

#[test]
fn budget_tier_table() {
    run_table_tests(
        vec![
            TestCase {
                name: "300 of 500",
                input: (300.0, 500.0),
                expected: (BudgetTier::Comfortable, false),
            },
            TestCase {
                name: "425 of 500",
                input: (425.0, 500.0),
                expected: (BudgetTier::Tight, false),
            },
            TestCase {
                name: "600 of 500",
                input: (600.0, 500.0),
                expected: (BudgetTier::Over, true),
            },
            TestCase {
                name: "empty cart",
                input: (0.0, 500.0),
                expected: (BudgetTier::Comfortable, false),
            },
            TestCase {
                name: "exactly at budget",
                input: (500.0, 500.0),
                expected: (BudgetTier::Over, false),
            },
            TestCase {
                name: "zero budget",
                input: (0.0, 0.0),
                expected: (BudgetTier::Over, true),
            },
        ],
        |(total, budget)| {
            let status = budget_status(total, budget);
            (status.tier, status.over_budget)
        },
    );
}

#[test]
fn over_budget_keeps_raw_percentage() {
    let status = budget_status(600.0, 500.0);
    assert!((status.percentage - 100.0).abs() < 1e-9);
    assert!((status.raw_percentage - 120.0).abs() < 1e-9);
}

#[test]
fn quality_mixes_rating_and_variety() {
    let cart = vec![
        CartItem::new(product("a", 10.0, "laptops").with_rating(5.0)),
        CartItem::new(product("b", 10.0, "audio").with_rating(3.0)),
    ];
    let score = quality_score(&cart);
    // (4 / 5) * 8 + 0.6 * 2
    assert!((score.overall - 7.6).abs() < 1e-9);
    assert_eq!(score.distinct_categories, 2);
    assert_eq!(score.grade, QualityGrade::Good);
}

#[test]
fn uncategorized_items_add_no_variety() {
    let cart = vec![CartItem::new(product("a", 10.0, "").with_rating(5.0))];
    let score = quality_score(&cart);
    assert_eq!(score.distinct_categories, 0);
    assert!((score.overall - 8.0).abs() < 1e-9);
}
