//! C# / FluentValidation generator (Convention A).
//!
//! Emits a POCO shape class plus an `AbstractValidator<T>` subclass wiring up
//! one `RuleFor` chain per property. Identifiers keep their source casing;
//! string literals use double quotes; patterns are embedded in a
//! `new Regex("...")` constructor argument.

use crate::codegen::literal::{escape_pattern, pattern_text, quote_string, render_value};
use crate::codegen::{parse_kind, require_param, CodegenError, GeneratedValidator};
use crate::models::{PropertyDefinition, RuleDefinition, ValidationDefinition, ValidatorKind};

const QUOTE: char = '"';

/// Generator for the C# convention.
pub struct CSharpGenerator;

impl CSharpGenerator {
    /// Generate the complete validator source for one definition.
    ///
    /// Deterministic: identical input yields byte-identical output. Fails
    /// fast on the first unsupported kind or missing parameter; no partial
    /// text is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentgen::codegen::CSharpGenerator;
    /// use fluentgen::models::{PropertyDefinition, RuleDefinition, ValidationDefinition};
    ///
    /// let def = ValidationDefinition::new(
    ///     "User",
    ///     "App",
    ///     vec![PropertyDefinition::new(
    ///         "Name",
    ///         "string",
    ///         vec![RuleDefinition::new("not-empty")],
    ///     )],
    /// );
    ///
    /// let generated = CSharpGenerator::generate(&def).unwrap();
    /// assert_eq!(generated.file_name, "UserValidator.cs");
    /// assert!(generated.content.contains("RuleFor(x => x.Name)"));
    /// ```
    pub fn generate(
        definition: &ValidationDefinition,
    ) -> Result<GeneratedValidator, CodegenError> {
        let mut out = String::new();

        out.push_str("using FluentValidation;\n");
        out.push_str("using System.Text.RegularExpressions;\n");
        out.push('\n');
        out.push_str(&format!("namespace {}\n{{\n", definition.namespace));

        // Shape class: every property is listed, rules or not
        out.push_str(&format!(
            "    public class {}\n    {{\n",
            definition.entity_name
        ));
        for property in &definition.properties {
            out.push_str(&format!(
                "        public {} {} {{ get; set; }}\n",
                Self::map_type(&property.data_type),
                property.name
            ));
        }
        out.push_str("    }\n");
        out.push('\n');

        // Validator class with one rule chain per property that has rules
        out.push_str(&format!(
            "    public class {entity}Validator : AbstractValidator<{entity}>\n    {{\n",
            entity = definition.entity_name
        ));
        out.push_str(&format!(
            "        public {}Validator()\n        {{\n",
            definition.entity_name
        ));

        let mut first_chain = true;
        for property in &definition.properties {
            if property.rules.is_empty() {
                continue;
            }
            if !first_chain {
                out.push('\n');
            }
            first_chain = false;
            out.push_str(&Self::emit_chain(property)?);
        }

        out.push_str("        }\n");
        out.push_str("    }\n");
        out.push_str("}\n");

        Ok(GeneratedValidator {
            file_name: format!("{}Validator.cs", definition.entity_name),
            content: out,
        })
    }

    /// Map a source type to the C# property type.
    fn map_type(source_type: &str) -> &'static str {
        match source_type.to_lowercase().as_str() {
            "string" => "string",
            "number" => "double",
            "boolean" => "bool",
            "date" => "DateTime",
            _ => "object",
        }
    }

    /// Emit one `RuleFor` chain, terminated with `;`.
    fn emit_chain(property: &PropertyDefinition) -> Result<String, CodegenError> {
        let mut chain = String::new();
        chain.push_str(&format!(
            "            RuleFor(x => x.{})",
            property.name
        ));

        for rule in &property.rules {
            chain.push_str("\n                ");
            chain.push_str(&Self::render_rule(rule)?);

            if let Some(message) = &rule.message {
                chain.push_str("\n                ");
                chain.push_str(&format!(
                    ".WithMessage({})",
                    quote_string(message, QUOTE)
                ));
            }
        }

        chain.push_str(";\n");
        Ok(chain)
    }

    /// The Convention-A mapping table: render one rule-call fragment.
    ///
    /// Total over the supported kind set, fails closed otherwise.
    pub fn render_rule(rule: &RuleDefinition) -> Result<String, CodegenError> {
        let kind = parse_kind(&rule.validator_kind)?;
        let params = &rule.parameters;

        let fragment = match kind {
            ValidatorKind::NotNull => ".NotNull()".to_string(),
            ValidatorKind::NotEmpty => ".NotEmpty()".to_string(),
            ValidatorKind::Empty => ".Empty()".to_string(),
            ValidatorKind::Null => ".Null()".to_string(),
            ValidatorKind::EmailFormat => ".EmailAddress()".to_string(),
            ValidatorKind::CreditCardLike => ".CreditCard()".to_string(),
            ValidatorKind::EnumMembership => ".IsInEnum()".to_string(),

            ValidatorKind::Equal => {
                let value = require_param(kind, params, "value")?;
                format!(".Equal({})", render_value(value, QUOTE))
            }
            ValidatorKind::NotEqual => {
                let value = require_param(kind, params, "value")?;
                format!(".NotEqual({})", render_value(value, QUOTE))
            }
            ValidatorKind::LessThan => {
                let value = require_param(kind, params, "value")?;
                format!(".LessThan({})", render_value(value, QUOTE))
            }
            ValidatorKind::LessOrEqual => {
                let value = require_param(kind, params, "value")?;
                format!(".LessThanOrEqualTo({})", render_value(value, QUOTE))
            }
            ValidatorKind::GreaterThan => {
                let value = require_param(kind, params, "value")?;
                format!(".GreaterThan({})", render_value(value, QUOTE))
            }
            ValidatorKind::GreaterOrEqual => {
                let value = require_param(kind, params, "value")?;
                format!(".GreaterThanOrEqualTo({})", render_value(value, QUOTE))
            }

            ValidatorKind::MinLength => {
                let length = require_param(kind, params, "length")?;
                format!(".MinimumLength({})", render_value(length, QUOTE))
            }
            ValidatorKind::MaxLength => {
                let length = require_param(kind, params, "length")?;
                format!(".MaximumLength({})", render_value(length, QUOTE))
            }

            ValidatorKind::Length => {
                let min = require_param(kind, params, "min")?;
                let max = require_param(kind, params, "max")?;
                format!(
                    ".Length({}, {})",
                    render_value(min, QUOTE),
                    render_value(max, QUOTE)
                )
            }
            ValidatorKind::InclusiveRange => {
                let min = require_param(kind, params, "min")?;
                let max = require_param(kind, params, "max")?;
                format!(
                    ".InclusiveBetween({}, {})",
                    render_value(min, QUOTE),
                    render_value(max, QUOTE)
                )
            }
            ValidatorKind::ExclusiveRange => {
                let min = require_param(kind, params, "min")?;
                let max = require_param(kind, params, "max")?;
                format!(
                    ".ExclusiveBetween({}, {})",
                    render_value(min, QUOTE),
                    render_value(max, QUOTE)
                )
            }

            ValidatorKind::PatternMatch => {
                let pattern = require_param(kind, params, "pattern")?;
                format!(
                    ".Matches(new Regex(\"{}\"))",
                    escape_pattern(&pattern_text(pattern), QUOTE)
                )
            }
        };

        Ok(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleDefinition;

    #[test]
    fn test_parameterless_fragments() {
        let fragment = CSharpGenerator::render_rule(&RuleDefinition::new("not-null")).unwrap();
        assert_eq!(fragment, ".NotNull()");

        let fragment =
            CSharpGenerator::render_rule(&RuleDefinition::new("email-format")).unwrap();
        assert_eq!(fragment, ".EmailAddress()");
    }

    #[test]
    fn test_single_value_fragments() {
        let rule = RuleDefinition::new("greater-than").with_param("value", 0i64);
        assert_eq!(
            CSharpGenerator::render_rule(&rule).unwrap(),
            ".GreaterThan(0)"
        );

        let rule = RuleDefinition::new("equal").with_param("value", "admin");
        assert_eq!(
            CSharpGenerator::render_rule(&rule).unwrap(),
            ".Equal(\"admin\")"
        );

        let rule = RuleDefinition::new("not-equal").with_param("value", true);
        assert_eq!(
            CSharpGenerator::render_rule(&rule).unwrap(),
            ".NotEqual(true)"
        );
    }

    #[test]
    fn test_missing_value_parameter() {
        let err = CSharpGenerator::render_rule(&RuleDefinition::new("equal")).unwrap_err();
        assert_eq!(
            err,
            CodegenError::MissingParameter {
                kind: ValidatorKind::Equal,
                parameter: "value",
            }
        );
    }

    #[test]
    fn test_length_requires_min_first() {
        let rule = RuleDefinition::new("length").with_param("max", 10i64);
        let err = CSharpGenerator::render_rule(&rule).unwrap_err();
        assert_eq!(
            err,
            CodegenError::MissingParameter {
                kind: ValidatorKind::Length,
                parameter: "min",
            }
        );
    }

    #[test]
    fn test_pattern_fragment_uses_regex_constructor() {
        let rule =
            RuleDefinition::new("pattern-match").with_param("pattern", "^[A-Z]{3}-\\d{4}$");
        assert_eq!(
            CSharpGenerator::render_rule(&rule).unwrap(),
            ".Matches(new Regex(\"^[A-Z]{3}-\\\\d{4}$\"))"
        );
    }

    #[test]
    fn test_unknown_kind_fails_closed() {
        let err = CSharpGenerator::render_rule(&RuleDefinition::new("frobnicate")).unwrap_err();
        assert_eq!(
            err,
            CodegenError::UnsupportedValidator {
                kind: "frobnicate".to_string(),
            }
        );
    }
}
