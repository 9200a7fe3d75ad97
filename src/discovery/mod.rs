//! Label file discovery.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{LabelError, Result};

/// Every file under `root` with the given extension, sorted by path.
pub fn find_label_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(LabelError::MissingFile {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "label directory not found"),
        });
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some(extension))
        .map(|entry| entry.into_path())
        .collect();
    paths.sort();

    debug!("Found {} label files under {:?}", paths.len(), root);
    Ok(paths)
}
