use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Search folder does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("Invalid file filter: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Finds every file below `root` (at any depth) whose name matches `filter`.
/// An empty filter matches everything. Matching ignores case.
pub fn scan(root: &Path, filter: &str) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let filter = match filter.trim() {
        "" => "*",
        trimmed => trimmed,
    };
    // Catch filter syntax errors before the root is prefixed to them.
    Pattern::new(filter)?;

    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let pattern = Path::new(&escaped_root).join("**").join(filter);
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut found: Vec<PathBuf> = glob::glob_with(&pattern.to_string_lossy(), options)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("⚠ Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    found.sort();
    found.dedup();

    log::debug!(
        "🔍 Found {} file(s) for {} below {}",
        found.len(),
        filter,
        root.display()
    );
    Ok(found)
}
