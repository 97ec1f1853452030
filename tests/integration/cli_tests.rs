use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

use cartwise::test_utils::fixtures::{gaming_laptop, product, ultrabook};

use super::fixture::CliFixture;

#[test]
fn help_lists_commands() {
    let fixture = CliFixture::new("help_lists_commands");
    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("optimize"))
        .stdout(predicate::str::contains("budget"));
}

#[test]
fn cart_add_list_remove() {
    let fixture = CliFixture::new("cart_add_list_remove");

    let added = fixture.robot(&[
        "cart", "add", "--id", "mouse-1", "--name", "Mouse", "--price", "25.50",
        "--category", "peripherals",
    ]);
    assert_eq!(added["status"], "ok");
    assert_eq!(added["data"]["added"], json!(["mouse-1"]));

    let again = fixture.robot(&["cart", "add", "--id", "mouse-1", "--name", "Mouse", "--price", "25.50"]);
    assert_eq!(again["data"]["already_present"], json!(["mouse-1"]));

    let listed = fixture.robot(&["cart", "list"]);
    assert_eq!(listed["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"]["total"], 25.5);

    let removed = fixture.robot(&["cart", "remove", "mouse-1"]);
    assert_eq!(removed["data"]["removed"], true);
    let listed = fixture.robot(&["cart", "list"]);
    assert!(listed["data"]["items"].as_array().unwrap().is_empty());
    fixture.log.pass();
}

#[test]
fn invalid_product_file_adds_nothing() {
    let fixture = CliFixture::new("invalid_product_file_adds_nothing");
    let path = fixture.dir.create_file(
        "bad.json",
        r#"[{"id": "ok-1", "name": "Fine", "price": 10.0},
            {"id": "bad-1", "name": "Negative", "price": -3.0}]"#,
    );

    let error = fixture.robot_error(&["cart", "add", "--file", path.to_str().unwrap()]);
    assert_eq!(error["code"], "INVALID_PRODUCT");
    assert_eq!(error["context"]["product_id"], "bad-1");

    let listed = fixture.robot(&["cart", "list"]);
    assert!(listed["data"]["items"].as_array().unwrap().is_empty());
}

#[test]
fn budget_set_and_status_tiers() {
    let fixture = CliFixture::with_config("budget_set_and_status_tiers", "json", "");
    fixture.add_products(&[product("desk", 300.0, "furniture")]);

    let status = fixture.robot(&["budget", "set", "500"]);
    assert_eq!(status["data"]["tier"], "comfortable");
    assert_eq!(status["data"]["percentage"], 60.0);

    fixture.add_products(&[product("chair", 125.0, "furniture")]);
    let status = fixture.robot(&["status"]);
    assert_eq!(status["data"]["budget"]["tier"], "tight");
    assert_eq!(status["data"]["cart_total"], 425.0);
    assert_eq!(status["data"]["line_count"], 2);

    let status = fixture.robot(&["budget", "set", "0"]);
    assert_eq!(status["data"]["tier"], "over");
    assert_eq!(status["data"]["invalid_budget"], true);
    assert!(fixture.dir.data_path.join("cart.json").exists());
}

#[test]
fn configured_ceiling_seeds_empty_cart() {
    let fixture = CliFixture::with_config(
        "configured_ceiling_seeds_empty_cart",
        "sqlite",
        "[budget]\ndefault_ceiling = 750.0\n",
    );
    let status = fixture.robot(&["budget", "show"]);
    assert_eq!(status["data"]["budget"], 750.0);
    assert_eq!(status["data"]["total"], 0.0);
}

#[test]
fn specs_from_text_human_and_robot() {
    let fixture = CliFixture::new("specs_from_text_human_and_robot");
    fixture
        .command()
        .args(["specs", "Dell XPS 13.4 inch 16GB RAM 512GB SSD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16GB RAM"))
        .stdout(predicate::str::contains("512GB SSD"));

    let specs = fixture.robot(&["specs", "27 inch QHD monitor 165Hz"]);
    assert_eq!(specs["data"]["screenSize"], "27\"");
    assert_eq!(specs["data"]["resolution"], "QHD 1440p");
    assert_eq!(specs["data"]["refreshRate"], "165Hz");
}

#[test]
fn specs_compare_cart_products() {
    let fixture = CliFixture::new("specs_compare_cart_products");
    fixture.add_products(&[gaming_laptop(), ultrabook()]);

    let compared = fixture.robot(&["specs", "--compare", "laptop-rog", "laptop-yoga"]);
    assert_eq!(compared["data"]["left"], "laptop-rog");
    let rows = compared["data"]["rows"].as_array().unwrap();
    assert!(!rows.is_empty());

    let error = fixture.robot_error(&["specs", "--product", "missing"]);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[test]
fn optimize_swap_and_apply_from_recorded_response() {
    let fixture = CliFixture::new("optimize_swap_and_apply_from_recorded_response");
    fixture.add_products(&[product("monitor-27", 150.0, "monitors"), product("old-mouse", 20.0, "peripherals")]);
    let response = fixture.write_response(&json!({
        "optimized_products": [
            {"id": "monitor-27", "name": "Monitor 27", "price": 150.0},
            {"id": "keyboard-mx", "name": "Keyboard MX", "price": 120.0},
            {"id": "headset-h7", "name": "Headset H7", "price": 130.0}
        ],
        "alternatives": {
            "suggestion_0": [
                {"id": "monitor-32", "name": "Monitor 32", "price": 200.0},
                {"id": "monitor-24", "name": "Monitor 24", "price": 110.0}
            ]
        }
    }));
    let response = response.to_str().unwrap();

    let preview = fixture.robot(&["optimize", "--response", response, "--swap", "0=monitor-32"]);
    let bundle = &preview["data"]["bundle"];
    assert_eq!(bundle["optimized_total"], 450.0);
    assert_eq!(bundle["slots"][0]["product"]["id"], "monitor-32");
    assert_eq!(bundle["slots"][0]["origin"], "from_cart");
    assert_eq!(bundle["alternatives"]["suggestion_0"][0]["id"], "monitor-27");
    assert_eq!(preview["data"]["applied"], false);

    // preview does not touch the saved cart
    let listed = fixture.robot(&["cart", "list"]);
    assert_eq!(listed["data"]["total"], 170.0);

    let applied = fixture.robot(&[
        "optimize", "--response", response, "--swap", "suggestion_0=monitor-24", "--apply",
    ]);
    assert_eq!(applied["data"]["applied"], true);

    let listed = fixture.robot(&["cart", "list"]);
    let ids: Vec<_> = listed["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["product"]["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["monitor-24", "keyboard-mx", "headset-h7"]);
    assert_eq!(listed["data"]["total"], 360.0);
    fixture.log.pass();
}

#[test]
fn swap_to_unknown_alternative_fails() {
    let fixture = CliFixture::new("swap_to_unknown_alternative_fails");
    let response = fixture.write_response(&json!({
        "optimized_products": [{"id": "a", "name": "A", "price": 10.0}]
    }));
    let error = fixture.robot_error(&[
        "optimize", "--response", response.to_str().unwrap(), "--swap", "0=nope",
    ]);
    assert_eq!(error["code"], "NOT_FOUND");

    let error = fixture.robot_error(&[
        "optimize", "--response", response.to_str().unwrap(), "--swap", "7=nope",
    ]);
    assert_eq!(error["code"], "SLOT_OUT_OF_RANGE");
}

#[test]
fn optimize_against_http_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/optimize").body_includes("\"user_id\":\"cli-user\"");
        then.status(200).json_body(json!({
            "optimized_products": [{"id": "tablet", "name": "Tablet", "price": 299.0}]
        }));
    });
    let extra = format!(
        "[optimizer]\nendpoint = \"{}\"\nuser_id = \"cli-user\"\ntimeout_secs = 5\n",
        server.url("/optimize")
    );
    let fixture = CliFixture::with_config("optimize_against_http_endpoint", "sqlite", &extra);

    let report = fixture.robot(&["optimize"]);
    mock.assert();
    assert_eq!(report["data"]["bundle"]["optimized_total"], 299.0);
    assert_eq!(report["data"]["bundle"]["slots"][0]["origin"], "suggestion");
}

#[test]
fn optimize_without_endpoint_reports_missing_config() {
    let fixture = CliFixture::new("optimize_without_endpoint_reports_missing_config");
    fixture
        .command()
        .arg("optimize")
        .assert()
        .failure()
        .stderr(predicate::str::contains("optimizer.endpoint"));
}

#[test]
fn missing_config_file_is_an_error() {
    let fixture = CliFixture::new("missing_config_file_is_an_error");
    assert_cmd::Command::cargo_bin("cartwise")
        .unwrap()
        .current_dir(&fixture.dir.data_path)
        .env_remove("CARTWISE_CONFIG")
        .args(["--config", "/nonexistent/cartwise.toml", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn completions_need_no_config() {
    assert_cmd::Command::cargo_bin("cartwise")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cartwise"));
}

#[test]
fn over_budget_bundle_carries_robot_warning() {
    let fixture = CliFixture::with_config(
        "over_budget_bundle_carries_robot_warning",
        "sqlite",
        "[budget]\ndefault_ceiling = 100.0\n",
    );
    let response = fixture.write_response(&json!({
        "optimized_products": [
            {"id": "chair", "name": "Chair", "price": 180.0},
            {"id": "lamp", "name": "Lamp", "price": 40.0}
        ]
    }));

    let report = fixture.robot(&["optimize", "--response", response.to_str().unwrap()]);
    assert_eq!(report["data"]["budget"]["over_budget"], true);
    let warnings = report["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("$220.00"));

    let within = CliFixture::new("over_budget_bundle_carries_robot_warning_within");
    let response = within.write_response(&json!({
        "optimized_products": [{"id": "lamp", "name": "Lamp", "price": 40.0}]
    }));
    let report = within.robot(&["optimize", "--response", response.to_str().unwrap()]);
    assert!(report.get("warnings").is_none());
}
