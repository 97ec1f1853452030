pub mod app;
pub mod bundle;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod optimizer;
pub mod quality;
pub mod specs;
pub mod storage;
pub mod test_utils;

pub use error::{CartwiseError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
