//! Cart and optimized-bundle state machine.
//!
//! The optimization moves through three transitions only:
//!
//! ```text
//! Absent  --receive-->        Present
//! Present --swap-->           Present
//! Present --apply|discard-->  Absent
//! ```
//!
//! ```
//! use std::collections::HashMap;
//! use cartwise::bundle::{BundleItem, BundleState};
//! use cartwise::core::Product;
//!
//! let mut state = BundleState::new(500.0)?;
//! state.receive_optimization_result(
//!     vec![BundleItem::new(Product::new("kb", "Keyboard", 80.0))],
//!     HashMap::new(),
//! )?;
//! state.swap(0, Product::new("kb2", "Mechanical Keyboard", 120.0))?;
//! assert_eq!(state.optimization().unwrap().optimized_total(), 120.0);
//! state.apply_optimized_bundle()?;
//! assert_eq!(state.cart().len(), 1);
//! # Ok::<(), cartwise::CartwiseError>(())
//! ```

pub mod events;
pub mod optimization;
pub mod state;

pub use events::{StateObserver, StateSnapshot, SubscriptionId, Transition};
pub use optimization::{
    BundleItem, BundleSlot, OptimizationResult, Slot, SlotOrigin, MAX_ALTERNATIVES,
};
pub use state::{BundleState, DEFAULT_BUDGET};
