//! Generate command implementation
//!
//! Per definition file: load → optional namespace override → structural
//! validation → emit both conventions → write both outputs. Emission is
//! atomic per entity (both files or neither); the run is not transactional
//! across entities, so a late failure does not retract earlier outputs.

use std::path::Path;

use tracing::info;

use crate::cli::error::CliError;
use crate::codegen::generate_pair;
use crate::loader::{discover_definitions, load_definition};
use crate::validation::validate_definition;

/// What a generation run produced.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Entity names, in the order they were processed
    pub entities: Vec<String>,
    /// File names written to the output directory
    pub files: Vec<String>,
}

/// Handle the generate command.
pub fn handle_generate(
    input_dir: &Path,
    output_dir: &Path,
    namespace_override: Option<&str>,
) -> Result<GenerateSummary, CliError> {
    let paths = discover_definitions(input_dir)?;
    if paths.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "no definition files found in {}",
            input_dir.display()
        )));
    }

    std::fs::create_dir_all(output_dir).map_err(|source| CliError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut summary = GenerateSummary {
        entities: Vec::new(),
        files: Vec::new(),
    };

    for path in &paths {
        let mut definition = load_definition(path)?;

        if let Some(namespace) = namespace_override {
            definition.namespace = namespace.to_string();
        }

        let violations = validate_definition(&definition);
        if !violations.is_empty() {
            return Err(CliError::SchemaValidation {
                path: path.clone(),
                violations,
            });
        }

        // Both conventions or neither: generate_pair fails before anything
        // is written for this entity
        let generated = generate_pair(&definition).map_err(|source| CliError::Codegen {
            path: path.clone(),
            source,
        })?;

        for validator in &generated {
            let target = output_dir.join(&validator.file_name);
            std::fs::write(&target, &validator.content).map_err(|source| CliError::Write {
                path: target.clone(),
                source,
            })?;
            summary.files.push(validator.file_name.clone());
        }

        info!(
            "Generated {} output(s) for entity {}",
            generated.len(),
            definition.entity_name
        );
        summary.entities.push(definition.entity_name);
    }

    Ok(summary)
}
