//! In-process store for tests and throwaway sessions.

use parking_lot::Mutex;

use super::{PersistedState, StateStore};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<PersistedState>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    /// Number of successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

impl StateStore for MemoryStore {
    fn save(&self, state: &PersistedState) -> Result<()> {
        *self.state.lock() = Some(state.clone());
        *self.saves.lock() += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedState>> {
        Ok(self.state.lock().clone())
    }
}
