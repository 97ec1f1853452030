use std::collections::HashMap;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::bundle::BundleItem;
use crate::core::Product;

/// Isolated directory for config, store and product files.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    /// # Panics
    /// When no temp directory can be created.
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();
        Self { temp_dir, data_path }
    }

    /// # Panics
    /// When the file cannot be written.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write products as a JSON array.
    ///
    /// # Panics
    /// When serialization or the write fails.
    #[must_use]
    pub fn create_products_file(&self, relative_path: &str, products: &[Product]) -> PathBuf {
        let json = serde_json::to_string_pretty(products).expect("serialize products");
        self.create_file(relative_path, &json)
    }

    /// Config pointing storage at this fixture.
    ///
    /// # Panics
    /// When the file cannot be written.
    #[must_use]
    pub fn create_config(&self, backend: &str, extra: &str) -> PathBuf {
        let store = self.data_path.join(match backend {
            "json" => "cart.json",
            _ => "cart.db",
        });
        let content = format!(
            "[storage]\nbackend = \"{backend}\"\npath = {:?}\n{extra}",
            store.display().to_string()
        );
        self.create_file("config.toml", &content)
    }
}

/// A product with a price and category.
#[must_use]
pub fn product(id: &str, price: f64, category: &str) -> Product {
    Product::new(id, id.replace('-', " "), price).with_category(category)
}

#[must_use]
pub fn gaming_laptop() -> Product {
    Product::new("laptop-rog", "ROG Strix G15", 1299.0)
        .with_brand("ASUS")
        .with_category("laptops")
        .with_rating(4.6)
        .with_description("15.6 inch FHD 144Hz i7-12700H 16GB DDR4 RAM 512GB SSD RTX 4060")
}

#[must_use]
pub fn ultrabook() -> Product {
    Product::new("laptop-yoga", "Yoga Slim 7", 1099.0)
        .with_brand("Lenovo")
        .with_category("laptops")
        .with_rating(4.4)
        .with_description("14 inch 2.8K OLED 16GB RAM 1TB SSD Intel Core Ultra 7 155H Wi-Fi 6E")
}

/// Three slots priced 150/120/130 with no alternatives.
#[must_use]
pub fn three_slot_bundle() -> Vec<BundleItem> {
    vec![
        BundleItem::new(product("monitor-27", 150.0, "monitors")),
        BundleItem::new(product("keyboard-mx", 120.0, "peripherals")),
        BundleItem::new(product("headset-h7", 130.0, "audio")),
    ]
}

/// Alternatives for the first slot of [`three_slot_bundle`].
#[must_use]
pub fn monitor_alternatives() -> HashMap<String, Vec<Product>> {
    HashMap::from([(
        "suggestion_0".to_string(),
        vec![
            product("monitor-32", 200.0, "monitors"),
            product("monitor-24", 110.0, "monitors"),
        ],
    )])
}
