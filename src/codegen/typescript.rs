//! TypeScript / fluentvalidation-ts generator (Convention B).
//!
//! Emits an interface shape plus a `Validator<T>` subclass. Property
//! identifiers get their leading character lowercased (see
//! [`crate::codegen::naming::lower_first`]); string literals use single
//! quotes; patterns are embedded in a `new RegExp('...')` constructor
//! argument. The definition's namespace has no meaning in this convention and
//! is not rendered.

use crate::codegen::literal::{escape_pattern, pattern_text, quote_string, render_value};
use crate::codegen::naming::lower_first;
use crate::codegen::{parse_kind, require_param, CodegenError, GeneratedValidator};
use crate::models::{PropertyDefinition, RuleDefinition, ValidationDefinition, ValidatorKind};

const QUOTE: char = '\'';

/// Generator for the TypeScript convention.
pub struct TypeScriptGenerator;

impl TypeScriptGenerator {
    /// Generate the complete validator source for one definition.
    ///
    /// Deterministic and fail-fast, mirroring the C# generator. The two
    /// generators share no state and may run in any order with identical
    /// results.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentgen::codegen::TypeScriptGenerator;
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
    /// let generated = TypeScriptGenerator::generate(&def).unwrap();
    /// assert_eq!(generated.file_name, "UserValidator.ts");
    /// assert!(generated.content.contains("this.ruleFor('name')"));
    /// ```
    pub fn generate(
        definition: &ValidationDefinition,
    ) -> Result<GeneratedValidator, CodegenError> {
        let mut out = String::new();

        out.push_str("import { Validator } from 'fluentvalidation-ts';\n");
        out.push('\n');

        // Interface shape: every property is listed, rules or not
        out.push_str(&format!(
            "export interface {} {{\n",
            definition.entity_name
        ));
        for property in &definition.properties {
            out.push_str(&format!(
                "  {}: {};\n",
                lower_first(&property.name),
                Self::map_type(&property.data_type)
            ));
        }
        out.push_str("}\n");
        out.push('\n');

        // Validator class
        out.push_str(&format!(
            "export class {entity}Validator extends Validator<{entity}> {{\n",
            entity = definition.entity_name
        ));
        out.push_str("  constructor() {\n");
        out.push_str("    super();\n");

        for property in &definition.properties {
            if property.rules.is_empty() {
                continue;
            }
            out.push('\n');
            out.push_str(&Self::emit_chain(property)?);
        }

        out.push_str("  }\n");
        out.push_str("}\n");

        Ok(GeneratedValidator {
            file_name: format!("{}Validator.ts", definition.entity_name),
            content: out,
        })
    }

    /// Map a source type to the TypeScript property type.
    fn map_type(source_type: &str) -> &'static str {
        match source_type.to_lowercase().as_str() {
            "string" => "string",
            "number" => "number",
            "boolean" => "boolean",
            "date" => "Date",
            _ => "any",
        }
    }

    /// Emit one `ruleFor` chain, terminated with `;`.
    fn emit_chain(property: &PropertyDefinition) -> Result<String, CodegenError> {
        let mut chain = String::new();
        chain.push_str(&format!(
            "    this.ruleFor('{}')",
            lower_first(&property.name)
        ));

        for rule in &property.rules {
            chain.push_str("\n      ");
            chain.push_str(&Self::render_rule(rule)?);

            if let Some(message) = &rule.message {
                chain.push_str("\n      ");
                chain.push_str(&format!(
                    ".withMessage({})",
                    quote_string(message, QUOTE)
                ));
            }
        }

        chain.push_str(";\n");
        Ok(chain)
    }

    /// The Convention-B mapping table: render one rule-call fragment.
    ///
    /// Covers exactly the kind set the C# table covers; the shared
    /// [`ValidatorKind`] enum keeps the two in lockstep.
    pub fn render_rule(rule: &RuleDefinition) -> Result<String, CodegenError> {
        let kind = parse_kind(&rule.validator_kind)?;
        let params = &rule.parameters;

        let fragment = match kind {
            ValidatorKind::NotNull => ".notNull()".to_string(),
            ValidatorKind::NotEmpty => ".notEmpty()".to_string(),
            ValidatorKind::Empty => ".empty()".to_string(),
            ValidatorKind::Null => ".null()".to_string(),
            ValidatorKind::EmailFormat => ".emailAddress()".to_string(),
            ValidatorKind::CreditCardLike => ".creditCard()".to_string(),
            ValidatorKind::EnumMembership => ".isInEnum()".to_string(),

            ValidatorKind::Equal => {
                let value = require_param(kind, params, "value")?;
                format!(".equal({})", render_value(value, QUOTE))
            }
            ValidatorKind::NotEqual => {
                let value = require_param(kind, params, "value")?;
                format!(".notEqual({})", render_value(value, QUOTE))
            }
            ValidatorKind::LessThan => {
                let value = require_param(kind, params, "value")?;
                format!(".lessThan({})", render_value(value, QUOTE))
            }
            ValidatorKind::LessOrEqual => {
                let value = require_param(kind, params, "value")?;
                format!(".lessThanOrEqualTo({})", render_value(value, QUOTE))
            }
            ValidatorKind::GreaterThan => {
                let value = require_param(kind, params, "value")?;
                format!(".greaterThan({})", render_value(value, QUOTE))
            }
            ValidatorKind::GreaterOrEqual => {
                let value = require_param(kind, params, "value")?;
                format!(".greaterThanOrEqualTo({})", render_value(value, QUOTE))
            }

            ValidatorKind::MinLength => {
                let length = require_param(kind, params, "length")?;
                format!(".minLength({})", render_value(length, QUOTE))
            }
            ValidatorKind::MaxLength => {
                let length = require_param(kind, params, "length")?;
                format!(".maxLength({})", render_value(length, QUOTE))
            }

            ValidatorKind::Length => {
                let min = require_param(kind, params, "min")?;
                let max = require_param(kind, params, "max")?;
                format!(
                    ".length({}, {})",
                    render_value(min, QUOTE),
                    render_value(max, QUOTE)
                )
            }
            ValidatorKind::InclusiveRange => {
                let min = require_param(kind, params, "min")?;
                let max = require_param(kind, params, "max")?;
                format!(
                    ".inclusiveBetween({}, {})",
                    render_value(min, QUOTE),
                    render_value(max, QUOTE)
                )
            }
            ValidatorKind::ExclusiveRange => {
                let min = require_param(kind, params, "min")?;
                let max = require_param(kind, params, "max")?;
                format!(
                    ".exclusiveBetween({}, {})",
                    render_value(min, QUOTE),
                    render_value(max, QUOTE)
                )
            }

            ValidatorKind::PatternMatch => {
                let pattern = require_param(kind, params, "pattern")?;
                format!(
                    ".matches(new RegExp('{}'))",
                    escape_pattern(&pattern_text(pattern), QUOTE)
                )
            }
        };

        Ok(fragment)
    }
}
