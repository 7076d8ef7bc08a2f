//! Raw document collection from the filesystem.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered list of `.txt` files under `root`. When `root` is itself a file
/// it is returned as the only entry regardless of extension.
pub fn list_txt_files(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }
    let mut txt_files = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            txt_files.push(path.to_path_buf());
        }
    }
    txt_files.sort();
    txt_files
}

/// Read one document, falling back to lossy UTF-8 for odd encodings.
pub fn read_document(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(_) => Ok(String::from_utf8_lossy(&fs::read(path)?).to_string()),
    }
}
