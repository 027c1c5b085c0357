//! Structural validation of rule definitions.
//!
//! [`validate_definition`] checks a parsed definition against the schema
//! invariants and returns every violation found; it never stops at the first
//! problem and performs no I/O. Turning a non-empty violation list into a
//! run-level failure (naming the source file) is the caller's job.

use thiserror::Error;

use crate::models::ValidationDefinition;

/// A structural defect in a definition, caught before rendering begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    /// Entity-level required field missing
    #[error("{message}")]
    Entity { message: String },

    /// Property-level required field missing; carries the property index and,
    /// when available, the property name
    #[error("property {index}{}: {message}", .name.as_deref().map(|n| format!(" ({})", n)).unwrap_or_default())]
    Property {
        index: usize,
        name: Option<String>,
        message: String,
    },

    /// Rule-level required field missing; carries both indices
    #[error("property {property_index}{}, rule {rule_index}: {message}", .property_name.as_deref().map(|n| format!(" ({})", n)).unwrap_or_default())]
    Rule {
        property_index: usize,
        property_name: Option<String>,
        rule_index: usize,
        message: String,
    },
}

/// Validate a definition against the structural invariants.
///
/// Checks, none short-circuiting the others:
/// 1. `entityName` non-empty
/// 2. `namespace` non-empty
/// 3. at least one property
/// 4. per property: name, type and rules all present
/// 5. per rule: `validatorKind` non-empty
///
/// Whether a `validatorKind` value is actually in the supported vocabulary is
/// a rendering concern, checked later by the mapping tables.
///
/// # Example
///
/// ```rust
/// use fluentgen::models::ValidationDefinition;
/// use fluentgen::validation::validate_definition;
///
/// let def = ValidationDefinition::new("", "App", vec![]);
/// let violations = validate_definition(&def);
/// assert_eq!(violations.len(), 2);
/// ```
pub fn validate_definition(definition: &ValidationDefinition) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();

    if definition.entity_name.is_empty() {
        violations.push(SchemaViolation::Entity {
            message: "entity name required".to_string(),
        });
    }

    if definition.namespace.is_empty() {
        violations.push(SchemaViolation::Entity {
            message: "namespace required".to_string(),
        });
    }

    if definition.properties.is_empty() {
        violations.push(SchemaViolation::Entity {
            message: "at least one property required".to_string(),
        });
    }

    for (index, property) in definition.properties.iter().enumerate() {
        let name = if property.name.is_empty() {
            None
        } else {
            Some(property.name.clone())
        };

        if property.name.is_empty() {
            violations.push(SchemaViolation::Property {
                index,
                name: name.clone(),
                message: "property name required".to_string(),
            });
        }

        if property.data_type.is_empty() {
            violations.push(SchemaViolation::Property {
                index,
                name: name.clone(),
                message: "property type required".to_string(),
            });
        }

        if property.rules.is_empty() {
            violations.push(SchemaViolation::Property {
                index,
                name: name.clone(),
                message: "at least one rule required".to_string(),
            });
        }

        for (rule_index, rule) in property.rules.iter().enumerate() {
            if rule.validator_kind.is_empty() {
                violations.push(SchemaViolation::Rule {
                    property_index: index,
                    property_name: name.clone(),
                    rule_index,
                    message: "validator kind required".to_string(),
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PropertyDefinition, RuleDefinition};

    #[test]
    fn test_valid_definition_has_no_violations() {
        let def = ValidationDefinition::new(
            "User",
            "App",
            vec![PropertyDefinition::new(
                "Name",
                "string",
                vec![RuleDefinition::new("not-empty")],
            )],
        );
        assert!(validate_definition(&def).is_empty());
    }

    #[test]
    fn test_all_entity_level_violations_reported_together() {
        let def = ValidationDefinition::new("", "", vec![]);
        let violations = validate_definition(&def);
        assert_eq!(violations.len(), 3);
        assert!(matches!(&violations[0], SchemaViolation::Entity { message } if message == "entity name required"));
        assert!(matches!(&violations[1], SchemaViolation::Entity { message } if message == "namespace required"));
        assert!(matches!(&violations[2], SchemaViolation::Entity { message } if message == "at least one property required"));
    }

    #[test]
    fn test_property_violations_carry_index_and_name() {
        let def = ValidationDefinition::new(
            "User",
            "App",
            vec![
                PropertyDefinition::new("Name", "string", vec![RuleDefinition::new("not-empty")]),
                PropertyDefinition::new("Email", "", vec![]),
            ],
        );
        let violations = validate_definition(&def);
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0],
            SchemaViolation::Property {
                index: 1,
                name: Some("Email".to_string()),
                message: "property type required".to_string(),
            }
        );
        assert_eq!(
            violations[1],
            SchemaViolation::Property {
                index: 1,
                name: Some("Email".to_string()),
                message: "at least one rule required".to_string(),
            }
        );
    }

    #[test]
    fn test_rule_violation_carries_both_indices() {
        let def = ValidationDefinition::new(
            "User",
            "App",
            vec![PropertyDefinition::new(
                "Name",
                "string",
                vec![RuleDefinition::new("not-empty"), RuleDefinition::new("")],
            )],
        );
        let violations = validate_definition(&def);
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

    #[test]
    fn test_unnamed_property_reported_by_index_only() {
        let def = ValidationDefinition::new(
            "User",
            "App",
            vec![PropertyDefinition::new("", "string", vec![])],
        );
        let violations = validate_definition(&def);
        assert_eq!(violations.len(), 2);
        assert!(
            matches!(&violations[0], SchemaViolation::Property { index: 0, name: None, .. })
        );
        // Display form stays readable without a name
        assert_eq!(violations[0].to_string(), "property 0: property name required");
    }
}
