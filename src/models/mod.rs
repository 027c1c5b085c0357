//! Schema model for rule definitions.

pub mod definition;
pub mod kind;
pub mod params;

pub use definition::{PropertyDefinition, RuleDefinition, ValidationDefinition};
pub use kind::{UnknownKind, ValidatorKind, ALL_KINDS};
pub use params::ParamValue;
