//! Integration tests for structural validation of definitions.

use fluentgen::models::ValidationDefinition;
use fluentgen::validation::{validate_definition, SchemaViolation};

#[test]
fn malformed_definition_reports_every_violation_in_one_pass() {
    let json = r#"{
        "entityName": "",
        "namespace": "",
        "properties": [
            {"name": "Name", "type": "string", "rules": []},
            {"name": "", "type": "", "rules": [{"validatorKind": ""}]}
        ]
    }"#;
    let definition: ValidationDefinition = serde_json::from_str(json).unwrap();

    let violations = validate_definition(&definition);
    let messages: Vec<String> = violations.iter().map(|v| v.to_string()).collect();

    assert_eq!(
        messages,
        vec![
            "entity name required",
            "namespace required",
            "property 0 (Name): at least one rule required",
            "property 1: property name required",
            "property 1: property type required",
            "property 1, rule 0: validator kind required",
        ]
    );
}

#[test]
fn valid_parsed_definition_passes() {
    let yaml = r#"
entityName: Order
namespace: Shop
properties:
  - name: Total
    type: number
    rules:
      - validatorKind: greater-than
        parameters:
          value: 0
"#;
    let definition: ValidationDefinition = serde_yaml::from_str(yaml).unwrap();
    assert!(validate_definition(&definition).is_empty());
}

#[test]
fn unknown_validator_kind_is_not_a_schema_violation() {
    // Vocabulary membership is checked by the mapping tables during
    // rendering, not by the schema validator
    let json = r#"{
        "entityName": "User",
        "namespace": "App",
        "properties": [
            {"name": "Name", "type": "string",
             "rules": [{"validatorKind": "frobnicate"}]}
        ]
    }"#;
    let definition: ValidationDefinition = serde_json::from_str(json).unwrap();
    assert!(validate_definition(&definition).is_empty());
}

#[test]
fn rule_violation_is_tagged_with_property_and_rule_index() {
    let json = r#"{
        "entityName": "User",
        "namespace": "App",
        "properties": [
            {"name": "Name", "type": "string",
             "rules": [{"validatorKind": "not-empty"}, {"validatorKind": ""}]}
        ]
    }"#;
    let definition: ValidationDefinition = serde_json::from_str(json).unwrap();

    let violations = validate_definition(&definition);
    assert_eq!(
        violations,
        vec![SchemaViolation::Rule {
            property_index: 0,
            property_name: Some("Name".to_string()),
            rule_index: 1,
            message: "validator kind required".to_string(),
        }]
    );
}
