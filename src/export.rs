/*!
 * Directory export functionality
 *
 * Walks a project tree depth-first, classifies each retained file as text or
 * binary, and assembles the transport document. The walk is single-threaded
 * and deterministic: children of every directory are visited in lexicographic
 * name order.
 */

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use indicatif::ProgressBar;

use crate::document::{ContentKind, Document, DocumentMetadata, Encoding, Entry, EntryKind, FileRecord};
use crate::error::{PackError, Result};
use crate::ignore::IgnoreMatcher;
use crate::report::FileReportInfo;
use crate::utils::truncate_left;

/// Exporter statistics, collected for the report layer
#[derive(Debug, Clone, Default)]
pub struct ExportStatistics {
    /// Number of files recorded in the document
    pub files_processed: usize,
    /// Files stored as UTF-8 text
    pub text_files: usize,
    /// Files stored as base64
    pub binary_files: usize,
    /// Files that could not be read
    pub error_files: usize,
    /// Sum of recorded file sizes in bytes
    pub total_bytes: u64,
    /// Details for each file
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Exporter for a single project directory
pub struct Exporter {
    /// Canonicalized project root
    root: PathBuf,
    /// Whether dotfiles are retained
    include_hidden: bool,
    /// Whether the built-in default patterns were applied
    use_default_ignores: bool,
    /// Ignore verdicts for this run
    matcher: IgnoreMatcher,
    /// Progress bar (hidden in library use)
    progress: ProgressBar,
    /// Statistics collected during the walk
    statistics: ExportStatistics,
}

impl Exporter {
    /// Create an exporter for `project_path`.
    ///
    /// Fails fast if the path does not exist or is not a directory.
    pub fn new(
        project_path: &Path,
        include_hidden: bool,
        use_default_ignores: bool,
        progress: ProgressBar,
    ) -> Result<Self> {
        if !project_path.exists() {
            return Err(PackError::PathNotFound(format!(
                "project path does not exist: {}",
                project_path.display()
            )));
        }
        if !project_path.is_dir() {
            return Err(PackError::InvalidInput(format!(
                "project path is not a directory: {}",
                project_path.display()
            )));
        }

        let root = fs::canonicalize(project_path)?;
        let matcher = IgnoreMatcher::for_project(&root, include_hidden, use_default_ignores);

        Ok(Self {
            root,
            include_hidden,
            use_default_ignores,
            matcher,
            progress,
            statistics: ExportStatistics::default(),
        })
    }

    /// Get exporter statistics
    pub fn statistics(&self) -> &ExportStatistics {
        &self.statistics
    }

    /// Walk the project tree and build the document
    pub fn export(&mut self) -> Result<Document> {
        let metadata = DocumentMetadata {
            export_timestamp: epoch_seconds(SystemTime::now()),
            project_name: self
                .root
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            project_path: self.root.display().to_string(),
            include_hidden: self.include_hidden,
            use_default_ignores: self.use_default_ignores,
            has_gitignore: self.root.join(".gitignore").is_file(),
        };

        let mut structure = Vec::new();
        let mut files = BTreeMap::new();
        let root = self.root.clone();
        self.scan_directory(&root, "", &mut structure, &mut files)?;

        Ok(Document {
            metadata,
            structure,
            files,
        })
    }

    /// Scan one directory level, appending entries in sorted order
    fn scan_directory(
        &mut self,
        abs_path: &Path,
        rel_path: &str,
        structure: &mut Vec<Entry>,
        files: &mut BTreeMap<String, FileRecord>,
    ) -> Result<()> {
        let mut entries: Vec<fs::DirEntry> = fs::read_dir(abs_path)?.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let name = entry.file_name().to_string_lossy().to_string();
            let entry_rel = if rel_path.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", rel_path, name)
            };
            let entry_path = entry.path();
            let is_dir = entry_path.is_dir();

            // Symlinked directories are skipped to avoid traversal cycles;
            // symlinked files are read through as ordinary files.
            if is_dir && entry_path.symlink_metadata().map_or(false, |m| m.file_type().is_symlink()) {
                continue;
            }

            if self.matcher.should_ignore(&entry_rel, is_dir) {
                continue;
            }

            let (size, modified) = match fs::metadata(&entry_path) {
                Ok(meta) => (
                    if is_dir { 0 } else { meta.len() },
                    meta.modified().map(epoch_seconds).unwrap_or_default(),
                ),
                // Broken symlink or vanished entry; a file still gets an
                // error record below when the read fails.
                Err(_) => (0, 0.0),
            };

            if is_dir {
                structure.push(Entry {
                    name,
                    path: entry_rel.clone(),
                    kind: EntryKind::Directory,
                    size: 0,
                    modified,
                });
                if let Err(e) = self.scan_directory(&entry_path, &entry_rel, structure, files) {
                    eprintln!("Error processing directory {}: {}", entry_path.display(), e);
                }
            } else {
                structure.push(Entry {
                    name: name.clone(),
                    path: entry_rel.clone(),
                    kind: EntryKind::File,
                    size,
                    modified,
                });
                let record = self.read_file_record(&entry_path, name, &entry_rel, size, modified);
                files.insert(entry_rel, record);
            }
        }

        Ok(())
    }

    /// Read and classify a single file
    fn read_file_record(
        &mut self,
        abs_path: &Path,
        name: String,
        rel_path: &str,
        size: u64,
        modified: f64,
    ) -> FileRecord {
        self.progress.inc(1);
        self.progress
            .set_message(format!("Current file: {}", truncate_left(&name, 40)));

        let (kind, encoding, content) = match fs::read(abs_path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => (ContentKind::Text, Some(Encoding::Utf8), text),
                Err(err) => (
                    ContentKind::Binary,
                    Some(Encoding::Base64),
                    BASE64.encode(err.into_bytes()),
                ),
            },
            Err(err) => (
                ContentKind::Error,
                None,
                format!("failed to read file: {}", err),
            ),
        };

        self.statistics.files_processed += 1;
        self.statistics.total_bytes += size;
        match kind {
            ContentKind::Text => self.statistics.text_files += 1,
            ContentKind::Binary => self.statistics.binary_files += 1,
            ContentKind::Error => self.statistics.error_files += 1,
        }
        self.statistics.file_details.insert(
            rel_path.to_string(),
            FileReportInfo {
                size,
                kind: kind_label(kind).to_string(),
            },
        );

        FileRecord {
            name,
            path: rel_path.to_string(),
            size,
            modified,
            kind,
            encoding,
            content,
        }
    }
}

fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Text => "text",
        ContentKind::Binary => "binary",
        ContentKind::Error => "error",
    }
}

/// Convert a system time to seconds since the Unix epoch
pub(crate) fn epoch_seconds(time: SystemTime) -> f64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

/// Export a project directory to a document with default settings.
///
/// This is the caller-facing entry point used by the CLI and by embedders.
pub fn export_project(project_path: impl AsRef<Path>, include_hidden: bool) -> Result<Document> {
    Exporter::new(
        project_path.as_ref(),
        include_hidden,
        true,
        ProgressBar::hidden(),
    )?
    .export()
}
