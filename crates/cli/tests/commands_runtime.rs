use std::fs;
use std::path::PathBuf;

use proposta_cli::commands::{catalog, propose, quote};
use proposta_core::config::{AppConfig, LoadOptions};
use proposta_core::{BillingCycle, Plan};
use serde_json::Value;
use tempfile::TempDir;

fn write_request(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("request.toml");
    fs::write(&path, body).expect("write request file");
    path
}

const DISCOUNTED_REQUEST: &str = r#"
company_name = "Acme Ltda"
employee_count = 50
discount_percent = 10
plan = "business"
billing_cycle = "yearly"
modules = ["controle-ponto"]
"#;

#[test]
fn quote_prints_breakdown_for_valid_request() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_request(&dir, DISCOUNTED_REQUEST);

    let result = quote::run(&path, false);
    assert_eq!(result.exit_code, 0, "expected successful quote: {}", result.output);

    assert!(result.output.contains("Acme Ltda"));
    assert!(result.output.contains("602.50"), "subtotal line: {}", result.output);
    assert!(result.output.contains("542.25"), "discounted total line: {}", result.output);
}

#[test]
fn quote_json_output_is_machine_readable() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_request(&dir, DISCOUNTED_REQUEST);

    let result = quote::run(&path, true);
    assert_eq!(result.exit_code, 0);

    let payload: Value = serde_json::from_str(&result.output).expect("valid json");
    assert_eq!(payload["line_items"].as_array().map(|items| items.len()), Some(2));
    assert_eq!(payload["subtotal"], "602.50");
    assert_eq!(payload["yearly_savings"], Value::Null, "yearly cycle reports no savings");
}

#[test]
fn quote_reports_every_validation_failure_at_once() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_request(
        &dir,
        r#"
company_name = "   "
employee_count = 0
discount_percent = 150
"#,
    );

    let result = quote::run(&path, false);
    assert_eq!(result.exit_code, 1, "expected validation failure exit code");

    assert!(result.output.contains("company name"));
    assert!(result.output.contains("employee count"));
    assert!(result.output.contains("discount"));
}

#[test]
fn quote_fails_cleanly_on_missing_request_file() {
    let result = quote::run(std::path::Path::new("/definitely/not/here.toml"), false);
    assert_eq!(result.exit_code, 2);

    let payload: Value = serde_json::from_str(&result.output).expect("error envelope is json");
    assert_eq!(payload["command"], "quote");
    assert_eq!(payload["error_class"], "request");
}

#[test]
fn catalog_marks_modules_unavailable_under_enterprise() {
    let result = catalog::run(Plan::Enterprise, BillingCycle::Yearly);
    assert_eq!(result.exit_code, 0);

    assert!(result.output.contains("Recrutamento"));
    assert!(result.output.contains("indisponível"), "office modules: {}", result.output);
}

#[test]
fn propose_writes_named_artifact() {
    let dir = TempDir::new().expect("tempdir");
    let out = TempDir::new().expect("out dir");
    let path = write_request(&dir, DISCOUNTED_REQUEST);
    let config = AppConfig::load(LoadOptions::default()).expect("default config");

    let result = propose::run(&config, &path, Some(out.path()), None);
    assert_eq!(result.exit_code, 0, "expected written proposal: {}", result.output);

    let artifacts: Vec<_> = fs::read_dir(out.path())
        .expect("read out dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(artifacts.len(), 1);
    assert!(artifacts[0].starts_with("BlackFriday_Factorial_Acme_Ltda_"));
    assert!(artifacts[0].ends_with(".html"));

    let html = fs::read_to_string(out.path().join(&artifacts[0])).expect("read artifact");
    assert!(html.contains("Acme Ltda"));
    assert!(html.contains("Controle de Ponto"));
}

#[test]
fn propose_rejects_incomplete_requests_before_rendering() {
    let dir = TempDir::new().expect("tempdir");
    let out = TempDir::new().expect("out dir");
    let path = write_request(&dir, "company_name = \"\"\nemployee_count = 0\n");
    let config = AppConfig::load(LoadOptions::default()).expect("default config");

    let result = propose::run(&config, &path, Some(out.path()), None);
    assert_eq!(result.exit_code, 1);
    assert_eq!(fs::read_dir(out.path()).expect("read out dir").count(), 0, "nothing rendered");
}
