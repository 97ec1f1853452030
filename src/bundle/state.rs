//! The bundle state container.

use std::cell::OnceCell;
use std::collections::{HashMap, HashSet};

use super::events::{Observers, StateObserver, StateSnapshot, SubscriptionId, Transition};
use super::optimization::{BundleItem, OptimizationResult};
use crate::core::{cart_total, CartItem, Product};
use crate::error::{CartwiseError, Result};
use crate::optimizer::{OptimizeRequest, OptimizeResponse};
use crate::quality::{budget_status, quality_score, BudgetStatus, QualityScore};
use crate::specs::{SpecCache, SpecMap};
use crate::storage::{PersistedState, StateStore};

/// Budget ceiling used when nothing else is configured.
pub const DEFAULT_BUDGET: f64 = 1000.0;

type AddedHook = Box<dyn FnMut(&Product)>;

/// Sole owner of the cart and the current optimized bundle.
///
/// All mutation goes through the methods below and runs to completion
/// before returning. Every committed change is published to subscribers.
pub struct BundleState {
    cart: Vec<CartItem>,
    budget: f64,
    optimization: Option<OptimizationResult>,
    latest_sequence: u64,
    in_flight: Option<u64>,
    quality: OnceCell<QualityScore>,
    specs: SpecCache,
    observers: Observers,
    on_added: Option<AddedHook>,
}

impl std::fmt::Debug for BundleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleState")
            .field("cart", &self.cart.len())
            .field("budget", &self.budget)
            .field("optimization", &self.optimization.as_ref().map(OptimizationResult::len))
            .field("latest_sequence", &self.latest_sequence)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Default for BundleState {
    fn default() -> Self {
        Self::with_parts(DEFAULT_BUDGET, SpecCache::default())
    }
}

impl BundleState {
    pub fn new(budget: f64) -> Result<Self> {
        check_budget(budget)?;
        Ok(Self::with_parts(budget, SpecCache::default()))
    }

    #[must_use]
    pub fn with_spec_cache(mut self, specs: SpecCache) -> Self {
        self.specs = specs;
        self
    }

    fn with_parts(budget: f64, specs: SpecCache) -> Self {
        Self {
            cart: Vec::new(),
            budget,
            optimization: None,
            latest_sequence: 0,
            in_flight: None,
            quality: OnceCell::new(),
            specs,
            observers: Observers::default(),
            on_added: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    #[must_use]
    pub const fn optimization(&self) -> Option<&OptimizationResult> {
        self.optimization.as_ref()
    }

    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }

    #[must_use]
    pub fn cart_total(&self) -> f64 {
        cart_total(&self.cart)
    }

    /// Number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.cart.iter().any(|item| item.product.id == product_id)
    }

    /// Cached until the cart changes.
    #[must_use]
    pub fn quality_score(&self) -> QualityScore {
        self.quality.get_or_init(|| quality_score(&self.cart)).clone()
    }

    #[must_use]
    pub fn budget_status(&self) -> BudgetStatus {
        budget_status(self.cart_total(), self.budget)
    }

    pub fn specs_for(&self, product: &Product) -> SpecMap {
        self.specs.specs_for(product)
    }

    #[must_use]
    pub const fn latest_sequence(&self) -> u64 {
        self.latest_sequence
    }

    #[must_use]
    pub const fn is_optimizing(&self) -> bool {
        self.in_flight.is_some()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) -> SubscriptionId {
        self.observers.add(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Install the hook fired after a product is added. Replaces any previous hook.
    pub fn on_item_added(&mut self, hook: impl FnMut(&Product) + 'static) {
        self.on_added = Some(Box::new(hook));
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add a product with quantity 1.
    ///
    /// Returns `Ok(false)` without touching anything when the id is already
    /// in the cart.
    pub fn add_to_cart(&mut self, product: Product) -> Result<bool> {
        product.validate()?;
        if self.contains(&product.id) {
            tracing::debug!(product_id = %product.id, "product already in cart");
            return Ok(false);
        }

        let product_id = product.id.clone();
        self.cart.push(CartItem::new(product));
        self.quality.take();

        if let (Some(hook), Some(item)) = (self.on_added.as_mut(), self.cart.last()) {
            hook(&item.product);
        }
        self.publish(Transition::ItemAdded { product_id });
        Ok(true)
    }

    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        let Some(index) = self.cart.iter().position(|item| item.product.id == product_id) else {
            return false;
        };
        self.cart.remove(index);
        self.quality.take();
        self.publish(Transition::ItemRemoved {
            product_id: product_id.to_string(),
        });
        true
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.quality.take();
        self.publish(Transition::CartCleared);
    }

    pub fn set_budget(&mut self, budget: f64) -> Result<()> {
        check_budget(budget)?;
        self.budget = budget;
        self.publish(Transition::BudgetChanged);
        Ok(())
    }

    // =========================================================================
    // Optimization lifecycle
    // =========================================================================

    /// Replace the optimization wholesale.
    ///
    /// Nothing changes unless every product in `items` and `alternatives`
    /// is valid and slot ids are unique.
    pub fn receive_optimization_result(
        &mut self,
        items: Vec<BundleItem>,
        alternatives: HashMap<String, Vec<Product>>,
    ) -> Result<()> {
        self.install_optimization(items, alternatives, None)
    }

    /// Put `product` into the slot at `slot_index`.
    ///
    /// The slot keeps its id and origin; the product it held moves to the
    /// front of the slot's alternatives.
    pub fn swap(&mut self, slot_index: usize, product: Product) -> Result<()> {
        let current = self.optimization.as_ref().ok_or(CartwiseError::NoOptimization)?;
        let Some(next) = current.swapped(slot_index, product)? else {
            return Ok(());
        };
        debug_assert!(next.verify().is_ok(), "swap broke bundle invariants");
        self.optimization = Some(next);
        self.publish(Transition::Swapped { slot_index });
        Ok(())
    }

    /// Swap by slot id instead of position.
    pub fn swap_slot(&mut self, slot_id: &str, product: Product) -> Result<()> {
        let index = self
            .optimization
            .as_ref()
            .ok_or(CartwiseError::NoOptimization)?
            .slot_index(slot_id)
            .ok_or_else(|| CartwiseError::NotFound(format!("slot '{slot_id}'")))?;
        self.swap(index, product)
    }

    /// Replace the cart with the bundle's products and drop the bundle.
    pub fn apply_optimized_bundle(&mut self) -> Result<()> {
        let optimization = self.optimization.as_ref().ok_or(CartwiseError::NoOptimization)?;

        let mut cart: Vec<CartItem> = Vec::with_capacity(optimization.len());
        for slot in optimization.slots() {
            slot.product.validate()?;
            if let Some(existing) = cart.iter_mut().find(|item| item.product.id == slot.product.id) {
                existing.quantity += 1;
            } else {
                cart.push(CartItem::new(slot.product.clone()));
            }
        }

        self.cart = cart;
        self.optimization = None;
        self.quality.take();
        self.publish(Transition::BundleApplied);
        Ok(())
    }

    pub fn discard_optimization(&mut self) -> bool {
        if self.optimization.take().is_none() {
            return false;
        }
        self.publish(Transition::OptimizationDiscarded);
        true
    }

    // =========================================================================
    // Request sequencing
    // =========================================================================

    /// Issue a new optimize request, superseding any request in flight.
    pub fn begin_optimize(&mut self, user_id: impl Into<String>) -> OptimizeRequest {
        self.latest_sequence += 1;
        if let Some(previous) = self.in_flight.replace(self.latest_sequence) {
            tracing::debug!(previous, latest = self.latest_sequence, "superseding optimize request");
        }
        OptimizeRequest {
            sequence: self.latest_sequence,
            cart: self.cart.iter().map(|item| item.product.clone()).collect(),
            budget: self.budget,
            user_id: user_id.into(),
        }
    }

    /// Feed the outcome of request `sequence` back into the state.
    ///
    /// Superseded or already completed requests yield
    /// [`CartwiseError::StaleResponse`] and change nothing. A failed latest
    /// request yields [`CartwiseError::ExternalFetch`] and changes nothing
    /// either.
    pub fn complete_optimize(
        &mut self,
        sequence: u64,
        outcome: Result<OptimizeResponse>,
    ) -> Result<()> {
        if self.in_flight != Some(sequence) {
            tracing::debug!(sequence, latest = self.latest_sequence, "discarding stale optimize response");
            return Err(CartwiseError::StaleResponse {
                sequence,
                latest: self.latest_sequence,
            });
        }
        self.in_flight = None;

        let response = outcome.map_err(|err| match err {
            CartwiseError::ExternalFetch(_) => err,
            other => CartwiseError::ExternalFetch(other.to_string()),
        })?;

        let reported = response.optimized_total;
        let (items, alternatives) = response.into_parts();
        self.install_optimization(items, alternatives, Some(sequence))?;

        if let (Some(reported), Some(optimization)) = (reported, self.optimization.as_ref()) {
            let local = optimization.optimized_total();
            if (reported - local).abs() > 0.005 {
                tracing::warn!(reported, local, "optimizer total disagrees with slot prices; using local sum");
            }
        }
        Ok(())
    }

    fn install_optimization(
        &mut self,
        items: Vec<BundleItem>,
        alternatives: HashMap<String, Vec<Product>>,
        sequence: Option<u64>,
    ) -> Result<()> {
        let cart = &self.cart;
        let result = OptimizationResult::build(items, alternatives, |id| {
            cart.iter().any(|item| item.product.id == id)
        })?;
        debug_assert!(result.verify().is_ok(), "fresh bundle broke invariants");
        tracing::debug!(slots = result.len(), total = result.optimized_total(), "optimization received");
        self.optimization = Some(result);
        self.publish(Transition::OptimizationReceived { sequence });
        Ok(())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save cart and budget. The optimization is not persisted.
    pub fn persist(&self, store: &dyn StateStore) -> Result<()> {
        store.save(&PersistedState::new(self.cart.clone(), self.budget))
    }

    /// Load cart and budget from `store`.
    ///
    /// Returns `Ok(false)` when the store is empty. Restored items are
    /// validated; on any failure the current state is kept.
    pub fn restore(&mut self, store: &dyn StateStore) -> Result<bool> {
        let Some(saved) = store.load()? else {
            return Ok(false);
        };
        check_budget(saved.budget)?;
        validate_saved_cart(&saved.cart)?;

        self.cart = saved.cart;
        self.budget = saved.budget;
        self.optimization = None;
        self.in_flight = None;
        self.quality.take();
        self.publish(Transition::Restored);
        Ok(true)
    }

    fn publish(&mut self, transition: Transition) {
        tracing::debug!(?transition, cart_items = self.cart.len(), "state transition");
        if self.observers.is_empty() {
            return;
        }
        let snapshot = StateSnapshot {
            transition,
            cart: self.cart.clone(),
            optimization: self.optimization.clone(),
            cart_total: self.cart_total(),
            budget: self.budget,
        };
        self.observers.notify(&snapshot);
    }
}

fn check_budget(budget: f64) -> Result<()> {
    if budget.is_finite() {
        Ok(())
    } else {
        Err(CartwiseError::Validation(format!(
            "budget must be a finite number, got {budget}"
        )))
    }
}

fn validate_saved_cart(cart: &[CartItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(cart.len());
    for item in cart {
        item.validate()?;
        if !seen.insert(item.product.id.as_str()) {
            return Err(CartwiseError::Validation(format!(
                "saved cart lists '{}' twice",
                item.product.id
            )));
        }
    }
    Ok(())
}
