use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn signup(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("signup").unwrap();
    cmd.env("SIGNUP_CLI_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn plans_lists_catalog() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .arg("plans")
        .assert()
        .success()
        .stdout(predicate::str::contains("Arcade"))
        .stdout(predicate::str::contains("$12/mo"))
        .stdout(predicate::str::contains("Access to multiplayer games"));
}

#[test]
fn plans_yearly_shows_bonus() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args(["plans", "--yearly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$150/yr"))
        .stdout(predicate::str::contains("2 months free"));
}

#[test]
fn quote_prints_total() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args(["quote", "--plan", "arcade", "--yearly", "--add-on", "service", "--add-on", "storage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total (per year)"))
        .stdout(predicate::str::contains("$120/yr"));
}

#[test]
fn quote_unknown_plan_fails() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args(["quote", "--plan", "gold"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan not found: gold"));
}

#[test]
fn submit_prints_json() {
    let dir = TempDir::new().unwrap();
    let output = signup(&dir)
        .args([
            "submit",
            "--name",
            "Yasin Walum",
            "--email",
            "meekmill@gmail.com",
            "--phone",
            "+256 785 451 455",
            "--add-on",
            "service",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["values"]["name"], "Yasin Walum");
    assert_eq!(parsed["summary"]["total"], 1000);
}

#[test]
fn submit_yaml_format() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args([
            "submit",
            "--name",
            "Yasin Walum",
            "--email",
            "meekmill@gmail.com",
            "--phone",
            "+256 785 451 455",
            "--plan",
            "pro",
            "--format",
            "yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("plan: pro"));
}

#[test]
fn submit_invalid_email_fails() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args([
            "submit",
            "--name",
            "Yasin Walum",
            "--email",
            "not-an-email",
            "--phone",
            "+256 785 451 455",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid email"));
}

#[test]
fn init_then_config() {
    let dir = TempDir::new().unwrap();
    signup(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    signup(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      Yes"))
        .stdout(predicate::str::contains("Default billing:   Monthly"));
}

#[test]
fn monthly_flag_overrides_yearly_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"default_billing": "yearly"}"#,
    )
    .unwrap();

    signup(&dir)
        .args(["quote", "--plan", "pro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$150/yr"));

    signup(&dir)
        .args(["quote", "--plan", "pro", "--monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$15/mo"));

    signup(&dir)
        .args(["plans", "--yearly", "--monthly"])
        .assert()
        .failure();
}
