use cartwise::bundle::BundleState;
use cartwise::core::CartItem;
use cartwise::storage::{JsonFileStore, PersistedState, SqliteStore, StateStore};
use cartwise::test_utils::fixtures::{gaming_laptop, product, ultrabook};
use cartwise::test_utils::fixtures::UnitTestFixture;

fn sample_state() -> PersistedState {
    let mut bundled = CartItem::new(product("cable-usb", 9.5, "accessories"));
    bundled.quantity = 3;
    PersistedState::new(
        vec![CartItem::new(gaming_laptop()), CartItem::new(ultrabook()), bundled],
        2500.0,
    )
}

fn assert_round_trip(store: &dyn StateStore) {
    let saved = sample_state();
    store.save(&saved).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.cart, saved.cart);
    assert!((loaded.budget - saved.budget).abs() < f64::EPSILON);
    assert_eq!(loaded.version, saved.version);
}

#[test]
fn sqlite_store_survives_reopen() {
    let fixture = UnitTestFixture::new();
    let path = fixture.data_path.join("nested").join("cart.db");
    {
        let store = SqliteStore::open(&path).unwrap();
        assert_round_trip(&store);
    }
    let reopened = SqliteStore::open(&path).unwrap();
    assert!(reopened.integrity_check().unwrap());
    let loaded = reopened.load().unwrap().unwrap();
    assert_eq!(loaded.cart.len(), 3);
    assert_eq!(loaded.cart[2].quantity, 3);
}

#[test]
fn json_store_round_trip() {
    let fixture = UnitTestFixture::new();
    let store = JsonFileStore::new(fixture.data_path.join("cart.json"));
    assert!(store.load().unwrap().is_none());
    assert_round_trip(&store);
}

#[test]
fn later_save_replaces_earlier_cart() {
    let fixture = UnitTestFixture::new();
    let store = SqliteStore::open(fixture.data_path.join("cart.db")).unwrap();
    store.save(&sample_state()).unwrap();
    store
        .save(&PersistedState::new(vec![CartItem::new(ultrabook())], 1200.0))
        .unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.cart.len(), 1);
    assert_eq!(loaded.cart[0].product.id, "laptop-yoga");
}

#[test]
fn bundle_state_restores_from_either_backend() {
    let fixture = UnitTestFixture::new();
    let stores: Vec<Box<dyn StateStore>> = vec![
        Box::new(SqliteStore::open(fixture.data_path.join("cart.db")).unwrap()),
        Box::new(JsonFileStore::new(fixture.data_path.join("cart.json"))),
    ];

    for store in &stores {
        let mut state = BundleState::new(800.0).unwrap();
        state.add_to_cart(gaming_laptop()).unwrap();
        state.persist(store.as_ref()).unwrap();

        let mut restored = BundleState::default();
        assert!(restored.restore(store.as_ref()).unwrap());
        assert_eq!(restored.cart(), state.cart());
        assert!((restored.budget() - 800.0).abs() < f64::EPSILON);
        assert!(restored.optimization().is_none());
    }
}

#[test]
fn corrupt_json_store_is_an_error() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_file("cart.json", "{ not json");
    let store = JsonFileStore::new(path);
    assert!(store.load().is_err());
}
