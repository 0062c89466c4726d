use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use crate::error::{DocScopeError, Result};

/// Reads only the first line of `path`, without its line terminator.
pub fn read_first_line(path: &Path) -> Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Lists `(file_name, first_line)` for every visible file directly inside
/// `dir`, sorted by file name.
///
/// The sort makes the later-file-wins collision rule of
/// [`super::title_file_mapping`] deterministic. Unreadable files are skipped
/// with a warning.
pub fn read_page_first_lines(dir: &Path) -> Result<Vec<(String, String)>> {
    if !dir.is_dir() {
        return Err(DocScopeError::NotFound(format!(
            "page directory {}",
            dir.display()
        )));
    }

    let mut pages = Vec::new();
    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .follow_links(false);
    for entry in entries {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().to_string();
        if file_name.starts_with('.') {
            continue;
        }
        match read_first_line(entry.path()) {
            Ok(first_line) => pages.push((file_name, first_line)),
            Err(err) => warn!(file = %entry.path().display(), error = %err, "skipping unreadable page"),
        }
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn first_line_excludes_terminator_and_rest_of_file() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("page.md");
        fs::write(&path, "## Routing\r\nbody text\nmore\n").expect("write");
        assert_eq!(read_first_line(&path).expect("read"), "## Routing");

        let empty = temp.path().join("empty.md");
        fs::write(&empty, "").expect("write");
        assert_eq!(read_first_line(&empty).expect("read"), "");
    }

    #[test]
    fn page_scan_is_sorted_and_skips_hidden_and_nested_files() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("b.md"), "## Beta\nx").expect("write");
        fs::write(temp.path().join("a.md"), "## Alpha\nx").expect("write");
        fs::write(temp.path().join(".hidden.md"), "## Hidden").expect("write");
        fs::create_dir(temp.path().join("nested")).expect("mkdir");
        fs::write(temp.path().join("nested").join("c.md"), "## Gamma").expect("write");

        let pages = read_page_first_lines(temp.path()).expect("scan");
        assert_eq!(
            pages,
            vec![
                ("a.md".to_string(), "## Alpha".to_string()),
                ("b.md".to_string(), "## Beta".to_string()),
            ]
        );
    }

    #[test]
    fn missing_page_directory_is_not_found() {
        let temp = tempdir().expect("tempdir");
        let err = read_page_first_lines(&temp.path().join("absent")).expect_err("missing");
        assert_eq!(err.code(), "NOT_FOUND");
    }
}
