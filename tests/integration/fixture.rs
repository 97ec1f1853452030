use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::Value;

use cartwise::core::Product;
use cartwise::test_utils::fixtures::UnitTestFixture;
use cartwise::test_utils::logging::TestLogger;

/// A temp workspace with a config file and a `cartwise` runner.
pub struct CliFixture {
    pub dir: UnitTestFixture,
    pub config_path: PathBuf,
    pub log: TestLogger,
}

impl CliFixture {
    pub fn new(test_name: &str) -> Self {
        Self::with_config(test_name, "sqlite", "")
    }

    pub fn with_config(test_name: &str, backend: &str, extra: &str) -> Self {
        let log = TestLogger::new(test_name);
        let dir = UnitTestFixture::new();
        let config_path = dir.create_config(backend, extra);
        Self {
            dir,
            config_path,
            log,
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cartwise").unwrap();
        cmd.current_dir(&self.dir.data_path)
            .env_remove("CARTWISE_CONFIG")
            .env_remove("CARTWISE_ROBOT")
            .env_remove("CARTWISE_BUDGET")
            .env_remove("CARTWISE_STORAGE_BACKEND")
            .env_remove("CARTWISE_STORAGE_PATH")
            .env_remove("CARTWISE_OPTIMIZER_ENDPOINT")
            .env("NO_COLOR", "1")
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }

    /// Run with `--robot` and parse stdout, asserting success.
    pub fn robot(&self, args: &[&str]) -> Value {
        self.log.step(&format!("cartwise --robot {}", args.join(" ")));
        let output = self.command().arg("--robot").args(args).output().unwrap();
        assert!(
            output.status.success(),
            "cartwise {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }

    /// Run with `--robot` expecting failure; returns the error payload.
    pub fn robot_error(&self, args: &[&str]) -> Value {
        self.log.step(&format!("cartwise --robot {} (expect failure)", args.join(" ")));
        let output = self.command().arg("--robot").args(args).output().unwrap();
        assert!(!output.status.success(), "cartwise {args:?} unexpectedly succeeded");
        let json: Value = serde_json::from_slice(&output.stdout).unwrap();
        json["status"]["error"].clone()
    }

    pub fn add_products(&self, products: &[Product]) {
        let path = self.dir.create_products_file("products.json", products);
        self.robot(&["cart", "add", "--file", path.to_str().unwrap()]);
    }

    pub fn write_response(&self, response: &Value) -> PathBuf {
        self.dir
            .create_file("response.json", &serde_json::to_string_pretty(response).unwrap())
    }
}
