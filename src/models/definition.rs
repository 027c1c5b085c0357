//! In-memory representation of a parsed rule definition.
//!
//! One [`ValidationDefinition`] per entity. Definitions are constructed once
//! by deserializing an input file, checked by the schema validator, then read
//! only for the rest of a generation run. Property and rule order is
//! significant: it determines emission order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::ParamValue;

/// The root record describing all validated properties of one entity.
///
/// # Example
///
/// ```rust
/// use fluentgen::models::ValidationDefinition;
///
/// let def: ValidationDefinition = serde_json::from_str(
///     r#"{"entityName": "User", "namespace": "App", "properties": []}"#,
/// ).unwrap();
/// assert_eq!(def.entity_name, "User");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDefinition {
    /// Entity name; also the base name of the generated validator class
    #[serde(alias = "entity")]
    pub entity_name: String,
    /// Target namespace; meaning is convention-specific
    pub namespace: String,
    /// Validated properties, in declaration order
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

/// One validated field of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    /// Property name in the definition's declared casing (typically PascalCase)
    pub name: String,
    /// Source type: one of "string", "number", "boolean", "date".
    /// Unrecognized types fall back to the target's "any"-like type at emission.
    #[serde(rename = "type")]
    pub data_type: String,
    /// Validation rules, in declaration order. A property with no rules still
    /// appears in the generated shape declaration but gets no rule chain.
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// One validation check applied to a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDefinition {
    /// Wire tag identifying the check (e.g. "inclusive-range")
    pub validator_kind: String,
    /// Named scalar parameters; BTreeMap keeps keys unique and iteration
    /// deterministic
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, ParamValue>,
    /// Optional human-readable message override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Reserved for conditional rules. Accepted but ignored by rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<serde_json::Value>,
}

impl ValidationDefinition {
    /// Create a new definition for an entity.
    pub fn new(
        entity_name: impl Into<String>,
        namespace: impl Into<String>,
        properties: Vec<PropertyDefinition>,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            namespace: namespace.into(),
            properties,
        }
    }
}

impl PropertyDefinition {
    /// Create a new property with the given name and source type.
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        rules: Vec<RuleDefinition>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            rules,
        }
    }
}

impl RuleDefinition {
    /// Create a parameterless rule for the given wire tag.
    pub fn new(validator_kind: impl Into<String>) -> Self {
        Self {
            validator_kind: validator_kind.into(),
            parameters: BTreeMap::new(),
            message: None,
            when: None,
        }
    }

    /// Attach a named parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Attach a message override.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
