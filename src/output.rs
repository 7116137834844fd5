#![deny(missing_docs)]

//! # Output Placement
//!
//! Destination naming and the final document write. The generator renders
//! each document fully into memory first; the destination file is only
//! touched after traversal succeeds, so a failed generation never leaves a
//! half-written document behind.

use crate::error::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Computes the destination file for one input: `<out_dir>/<source-stem>.adoc`.
pub fn destination_path(out_dir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    out_dir.join(format!("{}.adoc", stem))
}

/// Writes a fully rendered document to its destination, creating the output
/// directory when needed.
pub fn write_document(path: &Path, document: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, document)?;
    Ok(())
}
