//! Boundary to the external optimize service.
//!
//! The bundle state never performs I/O. Callers issue a request with
//! [`BundleState::begin_optimize`], hand it to an [`OptimizerService`] and
//! feed the outcome back through [`BundleState::complete_optimize`].
//! [`run_optimize`] does all three.

pub mod http;
pub mod wire;

use crate::bundle::BundleState;
use crate::error::Result;

pub use http::HttpOptimizer;
pub use wire::{OptimizeRequest, OptimizeResponse, WireBundleProduct};

/// Something that turns a cart and budget into a proposed bundle.
pub trait OptimizerService {
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse>;
}

/// Service that always answers with the same response.
///
/// Used for recorded responses and offline runs.
#[derive(Debug, Clone, Default)]
pub struct CannedOptimizer {
    response: OptimizeResponse,
}

impl CannedOptimizer {
    #[must_use]
    pub const fn new(response: OptimizeResponse) -> Self {
        Self { response }
    }
}

impl OptimizerService for CannedOptimizer {
    fn optimize(&self, _request: &OptimizeRequest) -> Result<OptimizeResponse> {
        Ok(self.response.clone())
    }
}

/// Issue one request and apply its outcome.
///
/// On failure the state is left exactly as it was.
pub fn run_optimize(
    state: &mut BundleState,
    service: &dyn OptimizerService,
    user_id: &str,
) -> Result<()> {
    let request = state.begin_optimize(user_id);
    tracing::info!(sequence = request.sequence, items = request.cart.len(), budget = request.budget, "optimizing cart");
    let outcome = service.optimize(&request);
    if let Err(err) = &outcome {
        tracing::warn!(sequence = request.sequence, "optimize failed: {err}");
    }
    state.complete_optimize(request.sequence, outcome)
}
