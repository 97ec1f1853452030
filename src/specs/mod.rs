//! Product specification extraction.
//!
//! Turns free product text into a [`SpecMap`] of display strings keyed by a
//! fixed attribute catalog. Extraction is driven by a declarative rule table
//! ([`rules`]) evaluated by one generic engine ([`engine`]):
//!
//! ```text
//! text → lowercase → groups in priority order → rules in declared order → SpecMap
//! ```
//!
//! # Example
//!
//! ```rust
//! use cartwise::specs::{extract_specs, SpecKey};
//!
//! let specs = extract_specs("Lenovo 14 inch 2.8K OLED 16GB RAM 1TB SSD");
//! assert_eq!(specs.get(SpecKey::ScreenSize), Some("14\""));
//! assert_eq!(specs.get(SpecKey::Storage), Some("1TB SSD"));
//! ```

pub mod cache;
pub mod engine;
pub mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use cache::{compare_specs, SpecCache, SpecComparisonRow};
pub use engine::{extract_specs, extract_with};
pub use rules::{default_rules, SpecRule};

/// Rule groups, in evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecGroup {
    Display,
    Processor,
    Memory,
    Storage,
    Graphics,
    Connectivity,
    Audio,
    Input,
    Camera,
    Battery,
    Weight,
    Os,
    Features,
}

impl SpecGroup {
    pub const ALL: [Self; 13] = [
        Self::Display,
        Self::Processor,
        Self::Memory,
        Self::Storage,
        Self::Graphics,
        Self::Connectivity,
        Self::Audio,
        Self::Input,
        Self::Camera,
        Self::Battery,
        Self::Weight,
        Self::Os,
        Self::Features,
    ];
}

/// Attribute catalog. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecKey {
    ScreenSize,
    Resolution,
    RefreshRate,
    Panel,
    Processor,
    Ram,
    Storage,
    Graphics,
    Wifi,
    Bluetooth,
    Ports,
    Audio,
    Keyboard,
    Touchscreen,
    Camera,
    Battery,
    Weight,
    Os,
    Features,
}

impl SpecKey {
    pub const ALL: [Self; 19] = [
        Self::ScreenSize,
        Self::Resolution,
        Self::RefreshRate,
        Self::Panel,
        Self::Processor,
        Self::Ram,
        Self::Storage,
        Self::Graphics,
        Self::Wifi,
        Self::Bluetooth,
        Self::Ports,
        Self::Audio,
        Self::Keyboard,
        Self::Touchscreen,
        Self::Camera,
        Self::Battery,
        Self::Weight,
        Self::Os,
        Self::Features,
    ];

    /// Wire name (camelCase).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ScreenSize => "screenSize",
            Self::Resolution => "resolution",
            Self::RefreshRate => "refreshRate",
            Self::Panel => "panel",
            Self::Processor => "processor",
            Self::Ram => "ram",
            Self::Storage => "storage",
            Self::Graphics => "graphics",
            Self::Wifi => "wifi",
            Self::Bluetooth => "bluetooth",
            Self::Ports => "ports",
            Self::Audio => "audio",
            Self::Keyboard => "keyboard",
            Self::Touchscreen => "touchscreen",
            Self::Camera => "camera",
            Self::Battery => "battery",
            Self::Weight => "weight",
            Self::Os => "os",
            Self::Features => "features",
        }
    }

    /// Human label for tables.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ScreenSize => "Screen Size",
            Self::Resolution => "Resolution",
            Self::RefreshRate => "Refresh Rate",
            Self::Panel => "Panel",
            Self::Processor => "Processor",
            Self::Ram => "Memory",
            Self::Storage => "Storage",
            Self::Graphics => "Graphics",
            Self::Wifi => "Wi-Fi",
            Self::Bluetooth => "Bluetooth",
            Self::Ports => "Ports",
            Self::Audio => "Audio",
            Self::Keyboard => "Keyboard",
            Self::Touchscreen => "Touchscreen",
            Self::Camera => "Camera",
            Self::Battery => "Battery",
            Self::Weight => "Weight",
            Self::Os => "Operating System",
            Self::Features => "Special Features",
        }
    }

    /// Keys that keep one value per facet and join them.
    #[must_use]
    pub const fn is_multi_valued(&self) -> bool {
        matches!(self, Self::Storage)
    }
}

impl std::fmt::Display for SpecKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered attribute map produced by extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecMap {
    entries: BTreeMap<SpecKey, String>,
}

impl SpecMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: SpecKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (SpecKey, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = SpecKey> + '_ {
        self.entries.keys().copied()
    }

    // Only the engine builds maps.
    pub(crate) fn insert(&mut self, key: SpecKey, value: String) {
        self.entries.insert(key, value);
    }
}
