//! Transition snapshots and their subscribers.

use serde::Serialize;

use super::optimization::OptimizationResult;
use crate::core::CartItem;

/// Which operation produced a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    ItemAdded { product_id: String },
    ItemRemoved { product_id: String },
    CartCleared,
    BudgetChanged,
    OptimizationReceived { sequence: Option<u64> },
    Swapped { slot_index: usize },
    BundleApplied,
    OptimizationDiscarded,
    Restored,
}

/// State as it stands right after a committed transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub transition: Transition,
    pub cart: Vec<CartItem>,
    pub optimization: Option<OptimizationResult>,
    pub cart_total: f64,
    pub budget: f64,
}

/// Receives a snapshot after every committed transition.
///
/// Observers see copies; they cannot reach back into the state.
pub trait StateObserver {
    fn on_transition(&mut self, snapshot: &StateSnapshot);
}

impl<F> StateObserver for F
where
    F: FnMut(&StateSnapshot),
{
    fn on_transition(&mut self, snapshot: &StateSnapshot) {
        self(snapshot);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn StateObserver>)>,
}

impl Observers {
    pub(crate) fn add(&mut self, observer: Box<dyn StateObserver>) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, snapshot: &StateSnapshot) {
        for (_, observer) in &mut self.entries {
            observer.on_transition(snapshot);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
