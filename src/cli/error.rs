//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::codegen::CodegenError;
use crate::loader::LoadError;
use crate::validation::SchemaViolation;

/// Error surfaced by a CLI command. A failing definition aborts the run; any
/// files already written for earlier definitions are kept.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command-line input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Definition file could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A definition failed structural validation; carries every violation
    /// found so the user can fix the file in one pass
    #[error("invalid definition {}:{}", .path.display(), crate::cli::output::format_violation_list(.violations))]
    SchemaValidation {
        path: PathBuf,
        violations: Vec<SchemaViolation>,
    },

    /// Rendering failed for a definition; no output was written for it
    #[error("code generation failed for {}: {source}", .path.display())]
    Codegen {
        path: PathBuf,
        #[source]
        source: CodegenError,
    },

    /// Generated output could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
