// Config loading and validation tests

use netreport::config::AppConfig;
use netreport::export::{ReportContent, SinkKind};
use netreport::models::{NetworkComponent, default_inventory};
use std::env::VarError;
use std::ffi::OsString;
use std::io::Write;
use std::sync::Mutex;

// Tests that touch CONFIG_FILE hold this so they never overlap.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VALID_CONFIG: &str = r#"
[inventory]
components = [
    { kind = "controller", id = "ctl-east" },
    { kind = "switch", id = "tor-1" },
    { kind = "function", id = "lb-nf" },
]

[export]
jobs = [
    { report = "sales", sink = "xml" },
    { report = "customer", sink = "pdf" },
]
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(
        config.inventory.components(),
        vec![
            NetworkComponent::controller("ctl-east"),
            NetworkComponent::switch("tor-1"),
            NetworkComponent::function("lb-nf"),
        ]
    );
    assert_eq!(config.export.jobs.len(), 2);
    assert_eq!(config.export.jobs[0].report, ReportContent::Sales);
    assert_eq!(config.export.jobs[0].sink, SinkKind::Xml);
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = AppConfig::load_from_str("").expect("empty config");
    assert_eq!(config.inventory.components(), default_inventory());
    let pairs: Vec<_> = config
        .export
        .jobs
        .iter()
        .map(|j| (j.report, j.sink))
        .collect();
    assert_eq!(
        pairs,
        [
            (ReportContent::Financial, SinkKind::Pdf),
            (ReportContent::Sales, SinkKind::Csv),
            (ReportContent::Customer, SinkKind::Xml),
        ]
    );
}

#[test]
fn test_config_validation_rejects_empty_inventory() {
    let err = AppConfig::load_from_str("[inventory]\ncomponents = []\n").unwrap_err();
    assert!(err.to_string().contains("inventory.components"));
}

#[test]
fn test_config_validation_rejects_empty_id() {
    let bad = VALID_CONFIG.replace("id = \"tor-1\"", "id = \"  \"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("id must be non-empty"));
}

#[test]
fn test_config_validation_rejects_duplicate_id() {
    let bad = VALID_CONFIG.replace("id = \"lb-nf\"", "id = \"tor-1\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("duplicated"));
}

#[test]
fn test_config_validation_rejects_empty_jobs() {
    let err = AppConfig::load_from_str("[export]\njobs = []\n").unwrap_err();
    assert!(err.to_string().contains("export.jobs"));
}

#[test]
fn test_config_rejects_unknown_kind() {
    let bad = VALID_CONFIG.replace("kind = \"switch\"", "kind = \"router\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_rejects_unknown_sink() {
    let bad = VALID_CONFIG.replace("sink = \"xml\"", "sink = \"docx\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID_CONFIG.as_bytes()).unwrap();
    let config = AppConfig::load_from_path(file.path()).expect("load_from_path");
    assert_eq!(config.inventory.components.len(), 3);
}

#[test]
fn test_config_missing_file_is_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = AppConfig::load_from_path(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_resolve_named_file_must_exist() {
    let dir = tempfile::TempDir::new().unwrap();
    let named = dir.path().join("netreport.toml");
    let err = AppConfig::resolve(
        Ok(named.to_str().unwrap().to_string()),
        &dir.path().join("default.toml"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("netreport.toml"));
    let io = err.root_cause().downcast_ref::<std::io::Error>();
    assert_eq!(io.map(|e| e.kind()), Some(std::io::ErrorKind::NotFound));
}

#[test]
fn test_resolve_without_default_file_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config =
        AppConfig::resolve(Err(VarError::NotPresent), &dir.path().join("netreport.toml"))
            .expect("defaults");
    assert_eq!(config.inventory.components(), default_inventory());
    assert_eq!(config.export.jobs.len(), 3);
}

#[test]
fn test_resolve_reads_default_file_when_present() {
    let dir = tempfile::TempDir::new().unwrap();
    let default_path = dir.path().join("netreport.toml");
    std::fs::write(&default_path, VALID_CONFIG).unwrap();
    let config = AppConfig::resolve(Err(VarError::NotPresent), &default_path).expect("default file");
    assert_eq!(config.inventory.components.len(), 3);
}

#[test]
fn test_resolve_invalid_default_file_is_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let default_path = dir.path().join("netreport.toml");
    std::fs::write(&default_path, "[export]\njobs = []\n").unwrap();
    let err = AppConfig::resolve(Err(VarError::NotPresent), &default_path).unwrap_err();
    assert!(format!("{err:#}").contains("export.jobs"));
}

#[test]
fn test_resolve_rejects_non_unicode_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let default_path = dir.path().join("netreport.toml");
    std::fs::write(&default_path, VALID_CONFIG).unwrap();
    let err = AppConfig::resolve(
        Err(VarError::NotUnicode(OsString::from("bad"))),
        &default_path,
    )
    .unwrap_err();
    assert!(err.to_string().contains("CONFIG_FILE"));
}

#[test]
fn test_config_load_via_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::TempDir::new().unwrap();

    let missing = dir.path().join("missing.toml");
    unsafe { std::env::set_var("CONFIG_FILE", missing.to_str().unwrap()) };
    let missing_result = AppConfig::load();

    let invalid = dir.path().join("invalid.toml");
    std::fs::write(&invalid, "[inventory]\ncomponents = []\n").unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", invalid.to_str().unwrap()) };
    let invalid_result = AppConfig::load();

    let valid = dir.path().join("valid.toml");
    std::fs::write(&valid, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", valid.to_str().unwrap()) };
    let valid_result = AppConfig::load();

    unsafe { std::env::remove_var("CONFIG_FILE") };

    assert!(missing_result.unwrap_err().to_string().contains("missing.toml"));
    assert!(format!("{:#}", invalid_result.unwrap_err()).contains("inventory.components"));
    assert_eq!(valid_result.expect("valid").inventory.components.len(), 3);
}
