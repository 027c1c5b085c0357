//! fluentgen - Validator code generation from declarative rule definitions
//!
//! Takes per-entity validation rule definitions (JSON or YAML) and emits
//! source text for two fluent validator ecosystems with identical semantics:
//! - C# / FluentValidation (`AbstractValidator<T>` classes)
//! - TypeScript / fluentvalidation-ts (`Validator<T>` classes)
//!
//! The pipeline is one-way and synchronous: raw text → schema model →
//! structural validation (gate) → code emitters → source text. The core never
//! executes validation rules itself and performs no I/O of its own.

pub mod codegen;
pub mod loader;
pub mod models;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use codegen::{
    generate_pair, CSharpGenerator, CodegenError, GeneratedValidator, TypeScriptGenerator,
};
pub use loader::{discover_definitions, load_definition, LoadError};
pub use models::{
    ParamValue, PropertyDefinition, RuleDefinition, ValidationDefinition, ValidatorKind,
};
pub use validation::{validate_definition, SchemaViolation};
