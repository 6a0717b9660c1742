/*!
 * Ignore pattern matching for the exporter
 *
 * Combines a fixed default pattern set with patterns read from a .gitignore
 * file at the project root. Matching is pure: the same path and flags always
 * produce the same verdict.
 */

use std::fs;
use std::path::Path;

use glob_match::glob_match;
use once_cell::sync::Lazy;

/// Default patterns to ignore, applied regardless of any .gitignore.
///
/// This exact literal set is part of the document format's compatibility
/// contract; do not extend it casually.
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".git/",
        "__pycache__/",
        "*.pyc",
        ".pytest_cache/",
        "node_modules/",
        ".vscode/",
        ".idea/",
        "*.log",
        ".env",
        ".DS_Store",
        "Thumbs.db",
        "*.tmp",
    ]
});

/// One parsed ignore pattern
#[derive(Debug, Clone)]
struct Pattern {
    /// Glob text with the anchoring `/` and trailing `/` stripped
    text: String,
    /// Pattern ended in `/`: matches directories only
    dir_only: bool,
    /// Pattern began with `/`: matches relative to the project root only
    anchored: bool,
}

impl Pattern {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (text, dir_only) = match line.strip_suffix('/') {
            Some(rest) => (rest, true),
            None => (line, false),
        };
        let (text, anchored) = match text.strip_prefix('/') {
            Some(rest) => (rest, true),
            None => (text, false),
        };
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            dir_only,
            anchored,
        })
    }

    fn matches(&self, relative_path: &str, components: &[&str], is_dir: bool) -> bool {
        if self.anchored {
            return glob_match(&self.text, relative_path) && (!self.dir_only || is_dir);
        }
        if self.dir_only {
            // Matches the named directory itself, or anything beneath one
            let last = components.len() - 1;
            return components
                .iter()
                .enumerate()
                .any(|(i, &part)| glob_match(&self.text, part) && (i < last || is_dir));
        }
        if self.text.contains('/') {
            // Path patterns match as a suffix at any depth
            return glob_match(&self.text, relative_path)
                || glob_match(&format!("**/{}", self.text), relative_path);
        }
        // Bare names match the base name at any depth
        let name = components.last().copied().unwrap_or_default();
        glob_match(&self.text, name)
    }
}

/// Decides which relative paths are excluded from an export
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    patterns: Vec<Pattern>,
    include_hidden: bool,
}

impl IgnoreMatcher {
    /// Build a matcher for a project root.
    ///
    /// Reads `.gitignore` at the root if present; an unreadable or malformed
    /// file never aborts the export, the defaults still apply.
    pub fn for_project(root: &Path, include_hidden: bool, use_default_ignores: bool) -> Self {
        let mut patterns = Vec::new();

        if use_default_ignores {
            patterns.extend(DEFAULT_IGNORE.iter().copied().filter_map(Pattern::parse));
        }

        if let Ok(contents) = fs::read_to_string(root.join(".gitignore")) {
            patterns.extend(contents.lines().filter_map(Pattern::parse));
        }

        Self {
            patterns,
            include_hidden,
        }
    }

    /// Build a matcher from explicit pattern lines (primarily for tests)
    pub fn from_patterns<'a, I>(lines: I, include_hidden: bool) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            patterns: lines.into_iter().filter_map(Pattern::parse).collect(),
            include_hidden,
        }
    }

    /// Check whether a path relative to the project root should be skipped
    pub fn should_ignore(&self, relative_path: &str, is_dir: bool) -> bool {
        if relative_path.is_empty() {
            // The project root itself is never ignored
            return false;
        }

        let components: Vec<&str> = relative_path.split('/').collect();

        if !self.include_hidden && components.iter().any(|part| part.starts_with('.')) {
            return true;
        }

        self.patterns
            .iter()
            .any(|pattern| pattern.matches(relative_path, &components, is_dir))
    }
}
