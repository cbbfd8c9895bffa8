//! # Output
//!
//! Writes rendered sections into the output directory.

use crate::error::{AppError, AppResult};
use crate::render::RenderedSection;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates `dir` (if needed) and writes every section into it.
///
/// Stops at the first failure. Returns the paths written, in order.
pub fn write_sections(dir: &Path, sections: &[RenderedSection]) -> AppResult<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| AppError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(sections.len());
    for section in sections {
        let target = dir.join(section.file_name);
        fs::write(&target, &section.content).map_err(|source| AppError::Write {
            path: target.clone(),
            source,
        })?;
        tracing::debug!(path = %target.display(), bytes = section.content.len(), "wrote section");
        written.push(target);
    }

    Ok(written)
}
