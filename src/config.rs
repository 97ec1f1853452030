use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CartwiseError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub budget: BudgetConfig,
    #[serde(default)]
    pub specs: SpecsConfig,
    #[serde(default)]
    pub optimizer: OptimizerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Resolve configuration.
    ///
    /// An explicit path (argument or `CARTWISE_CONFIG`) replaces the global
    /// and project files. Otherwise the global file is read first and the
    /// project file in `project_root` layered on top. Environment variables
    /// win over both.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("CARTWISE_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CartwiseError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a TOML document on top of the defaults, without env overrides.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch = toml::from_str(raw)
            .map_err(|err| CartwiseError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        config.validate()?;
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            tracing::debug!("no config directory on this platform");
            return Ok(None);
        };
        Self::load_patch(&dir.join("cartwise/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join("config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| CartwiseError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| CartwiseError::Config(format!("parse config {}: {err}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.budget {
            self.budget.merge(patch);
        }
        if let Some(patch) = patch.specs {
            self.specs.merge(patch);
        }
        if let Some(patch) = patch.optimizer {
            self.optimizer.merge(patch);
        }
        if let Some(patch) = patch.storage {
            self.storage.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(&|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, env: &dyn Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = env_f64(env, "CARTWISE_BUDGET")? {
            self.budget.default_ceiling = value;
        }
        if let Some(value) = env_usize(env, "CARTWISE_SPEC_CACHE_CAPACITY")? {
            self.specs.cache_capacity = value;
        }
        if let Some(value) = env_string(env, "CARTWISE_OPTIMIZER_ENDPOINT") {
            self.optimizer.endpoint = Some(value);
        }
        if let Some(value) = env_u64(env, "CARTWISE_OPTIMIZER_TIMEOUT_SECS")? {
            self.optimizer.timeout_secs = value;
        }
        if let Some(value) = env_string(env, "CARTWISE_USER_ID") {
            self.optimizer.user_id = value;
        }
        if let Some(value) = env_string(env, "CARTWISE_STORAGE_BACKEND") {
            self.storage.backend = value.parse()?;
        }
        if let Some(value) = env_string(env, "CARTWISE_STORAGE_PATH") {
            self.storage.path = Some(PathBuf::from(value));
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.budget.default_ceiling.is_finite() {
            return Err(CartwiseError::Config(format!(
                "budget.default_ceiling must be finite, got {}",
                self.budget.default_ceiling
            )));
        }
        if self.specs.cache_capacity == 0 {
            return Err(CartwiseError::Config(
                "specs.cache_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetConfig {
    #[serde(default = "default_ceiling")]
    pub default_ceiling: f64,
}

const fn default_ceiling() -> f64 {
    crate::bundle::DEFAULT_BUDGET
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            default_ceiling: default_ceiling(),
        }
    }
}

impl BudgetConfig {
    fn merge(&mut self, patch: BudgetPatch) {
        if let Some(value) = patch.default_ceiling {
            self.default_ceiling = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecsConfig {
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

const fn default_cache_capacity() -> usize {
    256
}

impl Default for SpecsConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl SpecsConfig {
    fn merge(&mut self, patch: SpecsPatch) {
        if let Some(value) = patch.cache_capacity {
            self.cache_capacity = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_id() -> String {
    "anonymous".to_string()
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
            user_id: default_user_id(),
        }
    }
}

impl OptimizerConfig {
    fn merge(&mut self, patch: OptimizerPatch) {
        if let Some(value) = patch.endpoint {
            self.endpoint = Some(value);
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
        if let Some(value) = patch.user_id {
            self.user_id = value;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Json,
}

impl StorageBackend {
    #[must_use]
    pub const fn default_file_name(&self) -> &'static str {
        match self {
            Self::Sqlite => "cart.db",
            Self::Json => "cart.json",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = CartwiseError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "sqlite" | "db" => Ok(Self::Sqlite),
            "json" | "file" => Ok(Self::Json),
            other => Err(CartwiseError::Config(format!(
                "invalid storage backend {other} (expected sqlite|json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Defaults to the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    fn merge(&mut self, patch: StoragePatch) {
        if let Some(value) = patch.backend {
            self.backend = value;
        }
        if let Some(value) = patch.path {
            self.path = Some(value);
        }
    }

    /// Path of the store file for the configured backend.
    pub fn resolved_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        let dir = dirs::data_dir()
            .ok_or_else(|| CartwiseError::MissingConfig("storage.path".to_string()))?;
        Ok(dir.join("cartwise").join(self.backend.default_file_name()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub budget: Option<BudgetPatch>,
    pub specs: Option<SpecsPatch>,
    pub optimizer: Option<OptimizerPatch>,
    pub storage: Option<StoragePatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BudgetPatch {
    pub default_ceiling: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SpecsPatch {
    pub cache_capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OptimizerPatch {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StoragePatch {
    pub backend: Option<StorageBackend>,
    pub path: Option<PathBuf>,
}

fn env_string(env: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    env(key).filter(|value| !value.trim().is_empty())
}

fn env_u64(env: &dyn Fn(&str) -> Option<String>, key: &str) -> Result<Option<u64>> {
    match env(key) {
        Some(value) => value.trim().parse::<u64>().map(Some).map_err(|err| {
            CartwiseError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        None => Ok(None),
    }
}

fn env_usize(env: &dyn Fn(&str) -> Option<String>, key: &str) -> Result<Option<usize>> {
    match env(key) {
        Some(value) => value.trim().parse::<usize>().map(Some).map_err(|err| {
            CartwiseError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        None => Ok(None),
    }
}

fn env_f64(env: &dyn Fn(&str) -> Option<String>, key: &str) -> Result<Option<f64>> {
    match env(key) {
        Some(value) => value.trim().parse::<f64>().map(Some).map_err(|err| {
            CartwiseError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        None => Ok(None),
    }
}
