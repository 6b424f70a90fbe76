mod circular_detection;
mod merging;

use std::{
    fs,
    path::{Path, PathBuf},
};

use circular_detection::CircularDetector;
use merging::merge_package_tables;
use toml::{Table, Value};
use tracing::debug;

use crate::{DocError, Result};

const IMPORTS_KEY: &str = "imports";

/// Loads a package file, resolving its imports.
///
/// Imports are listed in a top-level `imports` array, each entry naming a
/// file relative to the importing one (`@` prefix optional, `.toml`
/// implied). Imported tables are merged underneath the importing file, which
/// wins on conflicts. The `imports` key is removed from the result.
///
/// # Errors
///
/// Returns an error if:
/// - The package file or any import cannot be read
/// - Any file is not valid TOML
/// - Circular imports are detected
pub(crate) fn load_with_imports(path: &Path) -> Result<Table> {
    let canonical_path = path
        .canonicalize()
        .map_err(|e| DocError::import(format!("failed to resolve path: {e}"), path))?;

    let mut detector = CircularDetector::new();
    load_with_tracking(&canonical_path, &mut detector)
}

fn load_with_tracking(path: &Path, detector: &mut CircularDetector) -> Result<Table> {
    detector.detect_circular_import(path)?;
    detector.push_to_chain(path);

    let result = load_file(path, detector);
    detector.pop_from_chain();
    result
}

fn load_file(path: &Path, detector: &mut CircularDetector) -> Result<Table> {
    debug!(path = %path.display(), "loading package file");

    let content = fs::read_to_string(path).map_err(|e| DocError::import(e, path))?;
    let mut table: Table =
        toml::from_str(&content).map_err(|e| DocError::toml_parse(e, Some(path)))?;

    let import_paths = extract_import_paths(path, table.remove(IMPORTS_KEY))?;
    let imported = import_paths
        .iter()
        .map(|import_path| {
            let resolved = resolve_import_path(path, import_path)?;
            let canonical = resolved
                .canonicalize()
                .map_err(|e| DocError::import(e, &resolved))?;
            load_with_tracking(&canonical, detector)
        })
        .collect::<Result<Vec<Table>>>()?;

    Ok(merge_package_tables(imported, table))
}

fn extract_import_paths(path: &Path, imports: Option<Value>) -> Result<Vec<String>> {
    let Some(imports) = imports else {
        return Ok(Vec::new());
    };

    let Value::Array(entries) = imports else {
        return Err(DocError::import("`imports` must be an array of strings", path));
    };

    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(|s| s.strip_prefix('@').unwrap_or(s).to_owned())
                .ok_or_else(|| DocError::import("`imports` entries must be strings", path))
        })
        .collect()
}

fn resolve_import_path(base_path: &Path, import_path: &str) -> Result<PathBuf> {
    let parent_dir = base_path.parent().ok_or_else(|| DocError::ImportError {
        path: base_path.to_path_buf(),
        details: "Invalid base path - no parent directory".to_string(),
    })?;

    let mut import_path_buf = PathBuf::from(import_path);
    if import_path_buf.extension().is_none() {
        import_path_buf.set_extension("toml");
    }

    Ok(parent_dir.join(import_path_buf))
}
