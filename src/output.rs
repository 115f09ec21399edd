use crate::error::GenerateError;
use crate::routine::RoutineDocument;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Writes `document` to `path` as indented JSON, replacing any existing file.
pub fn write_document(document: &RoutineDocument, path: impl AsRef<Path>) -> Result<(), GenerateError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, &json).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        steps = document.len(),
        bytes = json.len(),
        "wrote routine document"
    );
    Ok(())
}

/// Loads a routine document previously written by [`write_document`].
pub fn read_document(path: impl AsRef<Path>) -> Result<RoutineDocument, GenerateError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: RoutineDocument = serde_json::from_str(&content)?;

    debug!(path = %path.display(), steps = document.len(), "read routine document");
    Ok(document)
}
