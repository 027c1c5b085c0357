//! Definition loading
//!
//! Reads rule definitions from JSON or YAML files and discovers definition
//! files in an input directory. Discovery order is sorted by file name so a
//! generation run always processes definitions in the same order.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::ValidationDefinition;

/// Error while loading a definition file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File or directory could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content was not a valid definition
    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Extension is not one of .json, .yaml, .yml
    #[error("unsupported file extension: {}", .path.display())]
    UnsupportedExtension { path: PathBuf },
}

/// Load one definition from a JSON or YAML file, dispatched on extension.
pub fn load_definition(path: &Path) -> Result<ValidationDefinition, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let definition = match extension.as_str() {
        "json" => serde_json::from_str(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        _ => {
            return Err(LoadError::UnsupportedExtension {
                path: path.to_path_buf(),
            });
        }
    };

    debug!("Loaded definition from {}", path.display());
    Ok(definition)
}

/// List recognized definition files in a directory, sorted by file name.
pub fn discover_definitions(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|source| LoadError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if matches!(extension.as_str(), "json" | "yaml" | "yml") {
            paths.push(path);
        }
    }

    paths.sort();
    info!(
        "Discovered {} definition file(s) in {}",
        paths.len(),
        dir.display()
    );
    Ok(paths)
}
