//! Code generation
//!
//! Turns a validated [`ValidationDefinition`] into validator-class source
//! text, once per target convention:
//!
//! - C# / FluentValidation (`csharp`)
//! - TypeScript / fluentvalidation-ts (`typescript`)
//!
//! Both generators are pure and deterministic: identical input yields
//! byte-identical output. They share no state and may run in any order.

pub mod csharp;
pub mod literal;
pub mod naming;
pub mod typescript;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{ParamValue, ValidationDefinition, ValidatorKind};

/// Error during rendering. Unlike schema violations these are fail-fast: the
/// first error aborts emission for the whole definition and no output is kept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodegenError {
    /// Validator kind not in the supported vocabulary
    #[error("unsupported validator kind: {kind}")]
    UnsupportedValidator { kind: String },

    /// A recognized kind is missing one of its required parameters
    #[error("validator '{kind}' is missing required parameter '{parameter}'")]
    MissingParameter {
        kind: ValidatorKind,
        parameter: &'static str,
    },
}

/// One generated source file, ready for the file writer.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedValidator {
    /// Base file name, `<entityName>Validator` plus the target extension
    pub file_name: String,
    /// Complete source text
    pub content: String,
}

/// Generate both convention outputs for one definition.
///
/// Emission is atomic per entity: if either convention fails, the error is
/// returned and no partial output is surfaced for the other.
pub fn generate_pair(
    definition: &ValidationDefinition,
) -> Result<Vec<GeneratedValidator>, CodegenError> {
    let csharp = csharp::CSharpGenerator::generate(definition)?;
    let typescript = typescript::TypeScriptGenerator::generate(definition)?;
    Ok(vec![csharp, typescript])
}

/// Parse a wire tag into a [`ValidatorKind`], failing closed on unknown tags.
pub(crate) fn parse_kind(tag: &str) -> Result<ValidatorKind, CodegenError> {
    tag.parse()
        .map_err(|_| CodegenError::UnsupportedValidator {
            kind: tag.to_string(),
        })
}

/// Look up a required parameter for a kind.
pub(crate) fn require_param<'a>(
    kind: ValidatorKind,
    parameters: &'a BTreeMap<String, ParamValue>,
    name: &'static str,
) -> Result<&'a ParamValue, CodegenError> {
    parameters
        .get(name)
        .ok_or(CodegenError::MissingParameter {
            kind,
            parameter: name,
        })
}

pub use csharp::CSharpGenerator;
pub use typescript::TypeScriptGenerator;
