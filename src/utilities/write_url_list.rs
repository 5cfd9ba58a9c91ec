use std::fs;

use anyhow::{Context, Result};

/// Writes one URL per line, each terminated by `\n`. Existing files are truncated.
pub fn write_url_list(file_path: &str, urls: &[String]) -> Result<()> {
    let mut content = String::new();
    for url in urls {
        content.push_str(url);
        content.push('\n');
    }

    fs::write(file_path, content).with_context(|| format!("Failed to write URL list: {}", file_path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::write_url_list;

    #[test]
    fn every_line_is_terminated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let urls = vec!["a.jpg".to_string(), String::new(), "b.jpg".to_string()];

        write_url_list(path.to_str().unwrap(), &urls).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a.jpg\n\nb.jpg\n");
    }

    #[test]
    fn empty_list_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale.jpg\n").unwrap();

        write_url_list(path.to_str().unwrap(), &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        assert!(write_url_list(path.to_str().unwrap(), &["a.jpg".to_string()]).is_err());
    }
}
