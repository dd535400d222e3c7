//! Locating `.feature` files from command-line paths.

use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Expand `paths` into feature files.
///
/// Files are taken as given whatever their extension; directories are
/// searched recursively for `*.feature` in sorted order.
pub(crate) fn feature_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut features = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_feature_files_recursive(path, &mut features)?;
        } else if path.is_file() {
            features.push(path.clone());
        } else {
            return Err(CliError::MissingPath(path.clone()));
        }
    }
    Ok(features)
}

fn collect_feature_files_recursive(dir: &Path, features: &mut Vec<PathBuf>) -> Result<(), CliError> {
    let entries = std::fs::read_dir(dir).map_err(|source| CliError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect();
    paths.sort();
    for path in paths {
        if path.is_dir() {
            collect_feature_files_recursive(&path, features)?;
        } else if path.extension().is_some_and(|ext| ext == "feature") {
            features.push(path);
        }
    }
    Ok(())
}
