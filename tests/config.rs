use std::time::Duration;

use assert_matches::assert_matches;
use camino::Utf8PathBuf;

use kira_variant_merge::config::{ConfigLoader, Inputs};
use kira_variant_merge::cosmic::DEFAULT_COUNTS_ENDPOINT;
use kira_variant_merge::error::KiraError;

#[test]
fn resolve_config_file() {
    let temp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    let path = root.join("kira-vm.json");
    std::fs::write(
        &path,
        r#"{
            "called": "data/called.json",
            "uncalled": "data/uncalled.json.gz",
            "enrichment": { "timeout_secs": 5 }
        }"#,
    )
    .unwrap();

    let resolved = ConfigLoader::resolve(Some(path.as_str())).unwrap();
    assert_eq!(resolved.schema_version, 1);
    assert_eq!(resolved.inputs.called, Some(root.join("data/called.json")));
    assert_eq!(
        resolved.inputs.uncalled,
        Some(root.join("data/uncalled.json.gz"))
    );
    assert_eq!(resolved.inputs.studies, None);
    assert_eq!(resolved.enrichment.endpoint, DEFAULT_COUNTS_ENDPOINT);
    assert_eq!(resolved.enrichment.timeout, Duration::from_secs(5));
}

#[test]
fn explicit_missing_file_is_read_error() {
    let err = ConfigLoader::resolve(Some("/nonexistent/kira-vm.json")).unwrap_err();
    assert_matches!(err, KiraError::ConfigRead(_));
}

#[test]
fn unsupported_schema_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("kira-vm.json");
    std::fs::write(&path, r#"{ "schema_version": 2 }"#).unwrap();

    let err = ConfigLoader::resolve(path.to_str()).unwrap_err();
    assert_matches!(err, KiraError::ConfigParse(_));
}

#[test]
fn cli_inputs_override_config() {
    let from_config = Inputs {
        called: Some(Utf8PathBuf::from("config/called.json")),
        uncalled: Some(Utf8PathBuf::from("config/uncalled.json")),
        studies: None,
    };
    let from_cli = Inputs {
        called: Some(Utf8PathBuf::from("cli/called.json")),
        ..Inputs::default()
    };

    let merged = from_cli.overlay(from_config);
    assert_eq!(merged.called, Some(Utf8PathBuf::from("cli/called.json")));
    assert_eq!(
        merged.uncalled,
        Some(Utf8PathBuf::from("config/uncalled.json"))
    );
}
