//! Check command implementation
//!
//! Loads and structurally validates definitions without writing any output.

use std::path::Path;

use tracing::info;

use crate::cli::error::CliError;
use crate::loader::{discover_definitions, load_definition};
use crate::validation::validate_definition;

/// Handle the check command. Accepts a single file or a directory.
///
/// Returns the number of definitions checked; fails on the first invalid
/// definition, reporting every violation it carries.
pub fn handle_check(input: &Path) -> Result<usize, CliError> {
    let paths = if input.is_dir() {
        discover_definitions(input)?
    } else {
        vec![input.to_path_buf()]
    };

    if paths.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "no definition files found in {}",
            input.display()
        )));
    }

    for path in &paths {
        let definition = load_definition(path)?;
        let violations = validate_definition(&definition);
        if !violations.is_empty() {
            return Err(CliError::SchemaValidation {
                path: path.clone(),
                violations,
            });
        }
        info!("Definition {} is valid", path.display());
    }

    Ok(paths.len())
}
