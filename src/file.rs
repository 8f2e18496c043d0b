// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{CatalogError, Result};

/// Write a rendered page, creating parent directories as needed.
/// Returns the path written to.
pub fn write_output(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    logf!("File: wrote {} ({} bytes)", path.display(), contents.len());
    Ok(path.to_path_buf())
}

pub fn read_input(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    logf!("File: read {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(CatalogError::usage(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
