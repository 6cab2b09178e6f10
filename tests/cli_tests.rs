use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn preview_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("invoice-preview"))
}

fn init_config(config_path: &Path) {
    preview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();
}

fn new_draft(config_path: &Path, draft: &Path) {
    preview_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "new",
            draft.to_str().unwrap(),
        ])
        .assert()
        .success();
}

/// Run 'item add' and return the printed item id
fn add_item(draft: &Path, args: &[&str]) -> String {
    let output = preview_cmd()
        .args(["item", "add", draft.to_str().unwrap()])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Added item ")
        .expect("item id in output")
        .to_string()
}

#[test]
fn test_help() {
    preview_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice totals and multi-template previews"));
}

#[test]
fn test_version() {
    preview_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("invoice-preview"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");

    preview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized invoice-preview config"));

    assert!(config_path.join("config.toml").exists());
    assert!(config_path.join("clients.toml").exists());
    assert!(config_path.join("invoices.toml").exists());
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");

    init_config(&config_path);

    preview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_status_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    preview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_status_summarizes_invoices() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    init_config(&config_path);

    preview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice Dashboard"))
        .stdout(predicate::str::contains("Total invoices:   5"))
        .stdout(predicate::str::contains("$5,700.00"))
        .stdout(predicate::str::contains("2 / 1 / 1 / 1"));
}

#[test]
fn test_clients_search() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    init_config(&config_path);

    preview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "clients"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Corporation"))
        .stdout(predicate::str::contains("Marketing Solutions Co"));

    preview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "clients", "--search", "ACME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Corporation"))
        .stdout(predicate::str::contains("Tech Solutions").not());
}

#[test]
fn test_invoices_filter_by_status() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    init_config(&config_path);

    preview_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "invoices",
            "--status",
            "paid",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("INV-001"))
        .stdout(predicate::str::contains("INV-003"))
        .stdout(predicate::str::contains("INV-002").not())
        .stdout(predicate::str::contains("2 of 5 invoices"));
}

#[test]
fn test_invoices_unknown_status() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    init_config(&config_path);

    preview_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "invoices",
            "--status",
            "late",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown invoice status 'late'"));
}

#[test]
fn test_templates_list_and_category() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");

    preview_cmd()
        .args(["-C", config_path.to_str().unwrap(), "templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimal Clean"))
        .stdout(predicate::str::contains("Tech Startup"));

    preview_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "templates",
            "--category",
            "Corporate",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Corporate Bold"))
        .stdout(predicate::str::contains("Minimal Clean").not());
}

#[test]
fn test_new_draft_with_client() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    init_config(&config_path);

    preview_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "new",
            draft.to_str().unwrap(),
            "--client",
            "acme",
            "--template",
            "modern",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template: modern"))
        .stdout(predicate::str::contains("Client:   Acme Corporation"));

    let content = fs::read_to_string(&draft).unwrap();
    assert!(content.contains("template = \"modern\""));
    assert!(content.contains("Acme Corporation"));
}

#[test]
fn test_new_draft_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    new_draft(&config_path, &draft);

    preview_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "new",
            draft.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_new_draft_unknown_client() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    init_config(&config_path);

    preview_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "new",
            draft.to_str().unwrap(),
            "--client",
            "nonexistent",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Client 'nonexistent' not found"));
}

#[test]
fn test_new_draft_unknown_template() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");

    preview_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "new",
            draft.to_str().unwrap(),
            "--template",
            "fancy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown template 'fancy'"));
}

#[test]
fn test_totals_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    new_draft(&config_path, &draft);

    add_item(&draft, &["-d", "Design", "-q", "2", "-r", "100", "-t", "10"]);
    add_item(&draft, &["-d", "Hosting", "-q", "1", "-r", "50"]);

    preview_cmd()
        .args(["discount", draft.to_str().unwrap(), "10"])
        .assert()
        .success();

    preview_cmd()
        .args(["totals", draft.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtotal:  $250.00"))
        .stdout(predicate::str::contains("Tax:       $20.00"))
        .stdout(predicate::str::contains("Discount:  -$25.00 (10%)"))
        .stdout(predicate::str::contains("Total:     $245.00"));
}

#[test]
fn test_totals_empty_draft() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    new_draft(&config_path, &draft);

    preview_cmd()
        .args(["discount", draft.to_str().unwrap(), "20"])
        .assert()
        .success();

    preview_cmd()
        .args(["totals", draft.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items added yet"))
        .stdout(predicate::str::contains("Total:     $0.00"));
}

#[test]
fn test_preview_empty_draft_has_no_negative_zero() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    new_draft(&config_path, &draft);

    preview_cmd()
        .args(["discount", draft.to_str().unwrap(), "20"])
        .assert()
        .success();

    preview_cmd()
        .args(["preview", draft.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtotal: $0.00"))
        .stdout(predicate::str::contains("Discount (20%): -$0.00"))
        .stdout(predicate::str::contains("-0.00").not());
}

#[test]
fn test_preview_and_totals_share_money_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    new_draft(&config_path, &draft);
    add_item(&draft, &["-d", "Platform build", "-q", "1", "-r", "45230"]);

    preview_cmd()
        .args(["totals", draft.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtotal:  $45,230.00"));

    preview_cmd()
        .args(["preview", draft.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtotal: $45,230.00"));
}

#[test]
fn test_company_tax_id_flows_into_preview() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    init_config(&config_path);
    new_draft(&config_path, &draft);

    let content = fs::read_to_string(&draft).unwrap();
    assert!(content.contains("company_tax_id = \"12-3456789\""));

    preview_cmd()
        .args(["preview", draft.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tax ID: 12-3456789"));
}

#[test]
fn test_item_set_and_remove() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    new_draft(&config_path, &draft);

    let id = add_item(&draft, &["-q", "1", "-r", "10"]);

    preview_cmd()
        .args(["item", "set", draft.to_str().unwrap(), id.as_str(), "-q", "3", "-t", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total $36.00"));

    preview_cmd()
        .args(["item", "remove", draft.to_str().unwrap(), id.as_str()])
        .assert()
        .success();

    preview_cmd()
        .args(["item", "remove", draft.to_str().unwrap(), id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in draft"));
}

#[test]
fn test_item_rejects_non_numeric_entry() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    new_draft(&config_path, &draft);

    preview_cmd()
        .args(["item", "add", draft.to_str().unwrap(), "-q", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid quantity 'NaN'"));

    preview_cmd()
        .args(["item", "add", draft.to_str().unwrap(), "-r", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rate 'abc'"));
}

#[test]
fn test_preview_html_placeholders() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    new_draft(&config_path, &draft);

    preview_cmd()
        .args(["preview", draft.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<article"))
        .stdout(predicate::str::contains("Client Name"))
        .stdout(predicate::str::contains("No items added yet"))
        .stdout(predicate::str::contains("Terms &amp; Conditions:"))
        .stdout(predicate::str::contains("Discount").not());
}

#[test]
fn test_preview_template_override_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    let out = temp_dir.path().join("preview.html");
    new_draft(&config_path, &draft);
    add_item(&draft, &["-d", "Design", "-q", "2", "-r", "100", "-t", "10"]);

    preview_cmd()
        .args([
            "preview",
            draft.to_str().unwrap(),
            "--template",
            "corporate",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved corporate preview"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("border-gray-800"));
    assert!(html.contains("$220.00"));
}

#[test]
fn test_preview_text_and_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preview-config");
    let draft = temp_dir.path().join("draft.toml");
    new_draft(&config_path, &draft);
    add_item(&draft, &["-d", "Design", "-q", "2", "-r", "100", "-t", "10"]);

    preview_cmd()
        .args(["preview", draft.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Design | 2 | $100.00 | 10% | $220.00"));

    preview_cmd()
        .args(["preview", draft.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Element\""));

    preview_cmd()
        .args(["preview", draft.to_str().unwrap(), "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format 'pdf'"));
}

#[test]
fn test_preview_missing_draft() {
    let temp_dir = TempDir::new().unwrap();
    let draft = temp_dir.path().join("missing.toml");

    preview_cmd()
        .args(["preview", draft.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Draft file not found"));
}
