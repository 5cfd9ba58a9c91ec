use std::fs;

use anyhow::{Context, Result};

/// Reads the whole saved page into memory. The file must be valid UTF-8.
pub fn read_html_file(file_path: &str) -> Result<String> {
    fs::read_to_string(file_path).with_context(|| format!("Failed to read HTML file: {}", file_path))
}
