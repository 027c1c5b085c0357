//! End-to-end tests for the CLI command handlers.

#![cfg(feature = "cli")]

use std::fs;

use fluentgen::cli::commands::check::handle_check;
use fluentgen::cli::commands::generate::handle_generate;
use fluentgen::cli::CliError;
use tempfile::TempDir;

fn write_user_definition(dir: &std::path::Path) {
    fs::write(
        dir.join("user.json"),
        r#"{
            "entityName": "User",
            "namespace": "App",
            "properties": [
                {"name": "Age", "type": "number",
                 "rules": [{"validatorKind": "inclusive-range",
                            "parameters": {"min": 18, "max": 120}}]}
            ]
        }"#,
    )
    .unwrap();
}

#[test]
fn generate_writes_both_conventions() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_user_definition(input.path());

    let summary = handle_generate(input.path(), output.path(), None).unwrap();
    assert_eq!(summary.entities, vec!["User"]);
    assert_eq!(summary.files, vec!["UserValidator.cs", "UserValidator.ts"]);

    let cs = fs::read_to_string(output.path().join("UserValidator.cs")).unwrap();
    assert!(cs.contains("namespace App"));
    let ts = fs::read_to_string(output.path().join("UserValidator.ts")).unwrap();
    assert!(ts.contains("this.ruleFor('age')"));
}

#[test]
fn namespace_override_applies_to_every_definition() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_user_definition(input.path());

    handle_generate(input.path(), output.path(), Some("Overridden")).unwrap();

    let cs = fs::read_to_string(output.path().join("UserValidator.cs")).unwrap();
    assert!(cs.contains("namespace Overridden"));
    assert!(!cs.contains("namespace App"));
}

#[test]
fn invalid_definition_aborts_with_aggregated_violations() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(
        input.path().join("broken.json"),
        r#"{"entityName": "", "namespace": "", "properties": []}"#,
    )
    .unwrap();

    let err = handle_generate(input.path(), output.path(), None).unwrap_err();
    match err {
        CliError::SchemaValidation { violations, .. } => assert_eq!(violations.len(), 3),
        other => panic!("expected schema validation failure, got {:?}", other),
    }

    // Nothing was written for the failing definition
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn failing_definition_keeps_earlier_outputs() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    // Sorted discovery processes a_user.json before z_broken.json
    fs::write(
        input.path().join("a_user.json"),
        r#"{
            "entityName": "User",
            "namespace": "App",
            "properties": [
                {"name": "Name", "type": "string",
                 "rules": [{"validatorKind": "not-empty"}]}
            ]
        }"#,
    )
    .unwrap();
    fs::write(
        input.path().join("z_broken.json"),
        r#"{
            "entityName": "Ghost",
            "namespace": "App",
            "properties": [
                {"name": "Thing", "type": "string",
                 "rules": [{"validatorKind": "frobnicate"}]}
            ]
        }"#,
    )
    .unwrap();

    let err = handle_generate(input.path(), output.path(), None).unwrap_err();
    assert!(matches!(err, CliError::Codegen { .. }));

    // Earlier entity's outputs are not retracted, failing entity wrote nothing
    assert!(output.path().join("UserValidator.cs").exists());
    assert!(output.path().join("UserValidator.ts").exists());
    assert!(!output.path().join("GhostValidator.cs").exists());
    assert!(!output.path().join("GhostValidator.ts").exists());
}

#[test]
fn check_accepts_file_or_directory_and_writes_nothing() {
    let input = TempDir::new().unwrap();
    write_user_definition(input.path());

    assert_eq!(handle_check(input.path()).unwrap(), 1);
    assert_eq!(handle_check(&input.path().join("user.json")).unwrap(), 1);
}

#[test]
fn empty_input_directory_is_an_error() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let err = handle_generate(input.path(), output.path(), None).unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument(_)));
}
