//! Composition root shared by every command.

use std::path::PathBuf;

use crate::bundle::BundleState;
use crate::cli::Cli;
use crate::config::{Config, StorageBackend, StorageConfig};
use crate::error::Result;
use crate::specs::SpecCache;
use crate::storage::{JsonFileStore, SqliteStore, StateStore};

pub struct AppContext {
    pub config: Config,
    pub store: Box<dyn StateStore>,
    pub store_path: PathBuf,
    pub robot_mode: bool,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("store_path", &self.store_path)
            .field("robot_mode", &self.robot_mode)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        let (store, store_path) = open_store(&config.storage)?;
        Ok(Self {
            config,
            store,
            store_path,
            robot_mode: cli.robot,
        })
    }

    #[must_use]
    pub fn new(config: Config, store: Box<dyn StateStore>, robot_mode: bool) -> Self {
        Self {
            config,
            store,
            store_path: PathBuf::new(),
            robot_mode,
        }
    }

    /// Fresh state seeded from config, then restored from the store.
    pub fn load_state(&self) -> Result<BundleState> {
        let mut state = BundleState::new(self.config.budget.default_ceiling)?
            .with_spec_cache(SpecCache::new(self.config.specs.cache_capacity));
        if !state.restore(self.store.as_ref())? {
            tracing::debug!("no saved cart, starting empty");
        }
        Ok(state)
    }

    pub fn save_state(&self, state: &BundleState) -> Result<()> {
        state.persist(self.store.as_ref())
    }
}

/// Open the configured backend.
pub fn open_store(storage: &StorageConfig) -> Result<(Box<dyn StateStore>, PathBuf)> {
    let path = storage.resolved_path()?;
    tracing::debug!(backend = ?storage.backend, path = %path.display(), "opening state store");
    let store: Box<dyn StateStore> = match storage.backend {
        StorageBackend::Sqlite => Box::new(SqliteStore::open(&path)?),
        StorageBackend::Json => Box::new(JsonFileStore::new(path.clone())),
    };
    Ok((store, path))
}
