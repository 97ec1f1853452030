//! Durable cart and budget.
//!
//! The bundle state only talks to [`StateStore`]; the backends here decide
//! where the bytes go.

pub mod json_file;
pub mod memory;
pub mod migrations;
pub mod sqlite;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::CartItem;
use crate::error::{CartwiseError, Result};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Version written into every saved state.
pub const FORMAT_VERSION: u32 = 1;

/// What survives between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    pub cart: Vec<CartItem>,
    pub budget: f64,
    pub saved_at: DateTime<Utc>,
}

impl PersistedState {
    #[must_use]
    pub fn new(cart: Vec<CartItem>, budget: f64) -> Self {
        Self {
            version: FORMAT_VERSION,
            cart,
            budget,
            saved_at: Utc::now(),
        }
    }
}

/// Refuse state written by a newer format; every backend shares this policy.
pub(crate) fn check_format_version(version: u32, origin: &str) -> Result<()> {
    if version > FORMAT_VERSION {
        return Err(CartwiseError::Storage(format!(
            "{origin} was written by a newer version (format {version})"
        )));
    }
    Ok(())
}

/// Storage adapter for [`PersistedState`].
pub trait StateStore {
    fn save(&self, state: &PersistedState) -> Result<()>;

    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PersistedState>>;
}
