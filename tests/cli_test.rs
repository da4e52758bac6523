//! Integration tests for the escompat binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DATA: &str = r#"{
    "browsers": { "chrome": {}, "firefox": {}, "safari": {}, "nodejs": {} },
    "javascript": {
        "builtins": { "Array": { "includes": { "__compat": { "support": {
            "chrome": { "version_added": "47" },
            "firefox": { "version_added": "43" },
            "safari": { "version_added": "9" },
            "nodejs": { "version_added": "6.0.0" }
        } } } } },
        "operators": { "exponentiation": { "__compat": { "support": {
            "chrome": { "version_added": "52" },
            "firefox": { "version_added": "52" },
            "safari": { "version_added": "10.1" },
            "nodejs": { "version_added": "7.0.0" }
        } } } }
    }
}"#;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".escompat.yml"), config).unwrap();
    fs::write(temp.path().join("compat.json"), DATA).unwrap();
    temp
}

const SIMPLE_CONFIG: &str = r#"
database: compat.json
targets: chrome 60, firefox 60
editions: [es2016]
environments:
  legacy: [chrome 50, safari 9]
"#;

fn escompat(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("escompat"));
    cmd.current_dir(temp.path())
        .env_remove("ESCOMPAT_ENV")
        .arg("--no-color");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("escompat"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ECMAScript"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("escompat"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_runs_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    escompat(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("are supported by 2 target(s)"));
    Ok(())
}

#[test]
fn check_reports_unsupported_features() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    escompat(&temp)
        .args(["check", "--env", "legacy"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error[no-exponential-operators]"))
        .stdout(predicate::str::contains("unsupported by chrome 50, safari 9"));
    Ok(())
}

#[test]
fn check_reads_env_from_environment_variable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    escompat(&temp)
        .arg("check")
        .env("ESCOMPAT_ENV", "legacy")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("safari 9"));
    Ok(())
}

#[test]
fn check_respects_polyfill_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    escompat(&temp)
        .args([
            "check",
            "--targets",
            "chrome 45",
            "--polyfill",
            "Array.prototype.includes",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 unsupported feature(s)"))
        .stdout(predicate::str::contains("includes").not());
    Ok(())
}

#[test]
fn check_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    let output = escompat(&temp)
        .args(["check", "--targets", "node 6", "--format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["summary"]["total"], 1);
    assert_eq!(parsed["diagnostics"][0]["rule_id"], "no-exponential-operators");
    Ok(())
}

#[test]
fn check_without_config_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    escompat(&temp)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn check_without_database_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("targets: chrome 80\ndatabase: missing.json");
    escompat(&temp)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("database not found"));
    Ok(())
}

#[test]
fn check_rejects_invalid_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("database: compat.json\ntargets: chrome 80\npolyfills: [bogus]");
    escompat(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bogus"));
    Ok(())
}

#[test]
fn check_uses_config_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    fs::write(
        temp.path().join("ci.yml"),
        "database: compat.json\ntargets: safari 9\neditions: [es2016]",
    )?;
    escompat(&temp)
        .args(["check", "--config", "ci.yml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("safari 9"));
    Ok(())
}

#[test]
fn local_config_overrides_project_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    fs::write(temp.path().join(".escompat.local.yml"), "targets: safari 9")?;
    escompat(&temp)
        .arg("targets")
        .assert()
        .success()
        .stdout("safari 9\n");
    Ok(())
}

#[test]
fn project_flag_sets_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    let elsewhere = TempDir::new()?;
    Command::new(cargo_bin("escompat"))
        .current_dir(elsewhere.path())
        .env_remove("ESCOMPAT_ENV")
        .arg("targets")
        .arg("--project")
        .arg(temp.path())
        .assert()
        .success()
        .stdout("chrome 60\nfirefox 60\n");
    Ok(())
}

#[test]
fn targets_resolves_aliases_and_drops_unknown() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    escompat(&temp)
        .args(["targets", "--targets", "node 14, ie 11, node 12, chrome 80"])
        .assert()
        .success()
        .stdout("nodejs 12\nchrome 80\n");
    Ok(())
}

#[test]
fn targets_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    let output = escompat(&temp).args(["targets", "--json"]).output()?;

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed[0]["family"], "chrome");
    assert_eq!(parsed[0]["version"], "60");
    Ok(())
}

#[test]
fn targets_rejects_malformed_query() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    escompat(&temp)
        .args(["targets", "--targets", "last 2 versions"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid target query"));
    Ok(())
}

#[test]
fn features_lists_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    escompat(&temp)
        .args(["features", "--edition", "es2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ES2020"))
        .stdout(predicate::str::contains("globalThis"));
    Ok(())
}

#[test]
fn schema_prints_json_schema() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = escompat(&temp).arg("schema").output()?;

    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(schema["properties"]["polyfills"].is_object());
    Ok(())
}

#[test]
fn completions_generates_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    escompat(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("escompat"));
    Ok(())
}
