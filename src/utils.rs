/*!
 * Utility functions for projpack
 */

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::ignore::IgnoreMatcher;

/// Count retained files under a directory, for progress tracking
pub fn count_files(dir: &Path, matcher: &IgnoreMatcher) -> io::Result<u64> {
    let root = fs::canonicalize(dir)?;
    let mut count = 0;

    let walker = WalkDir::new(&root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            let rel = relative_to(&root, entry.path());
            !matcher.should_ignore(&rel, entry.file_type().is_dir())
        });

    for entry in walker.filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            count += 1;
        }
    }

    Ok(count)
}

/// Forward-slash relative path of `path` under `root` (empty for root itself)
pub fn relative_to(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().to_string(),
    }
}

/// Keep the trailing characters of `text` so the result fits `max_chars`,
/// prefixing "..." when anything was dropped. Never splits a character.
pub fn truncate_left(text: &str, max_chars: usize) -> String {
    let total = text.chars().count();
    if total <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let tail: String = text.chars().skip(total - keep).collect();
    format!("...{}", tail)
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
