/*!
 * Directory reconstruction from an exported document
 *
 * Structural failures (malformed JSON) abort before anything is written.
 * Per-file failures are collected into the summary and never stop the run.
 */

use std::fs;
use std::path::{Component, Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;

use crate::document::{ContentKind, Document, EntryKind, FileRecord};
use crate::error::Result;

/// Outcome of an import run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportSummary {
    /// Directories created under the target (pre-existing ones not counted)
    pub created_directories: usize,
    /// Files written
    pub created_files: usize,
    /// Files left untouched because they existed and overwrite was off
    pub skipped_files: usize,
    /// Per-file failures, one message each
    pub errors: Vec<String>,
}

/// Importer for a single target directory
pub struct Importer {
    target: PathBuf,
    overwrite: bool,
}

impl Importer {
    /// Create an importer writing under `target_path`
    pub fn new(target_path: impl AsRef<Path>, overwrite: bool) -> Self {
        Self {
            target: target_path.as_ref().to_path_buf(),
            overwrite,
        }
    }

    /// Recreate the document's tree under the target directory
    pub fn import(&self, document: &Document) -> Result<ImportSummary> {
        fs::create_dir_all(&self.target)?;

        let mut summary = ImportSummary::default();

        for entry in &document.structure {
            let Some(dest) = self.resolve(&entry.path) else {
                summary
                    .errors
                    .push(format!("Unsafe path in document: {}", entry.path));
                continue;
            };

            match entry.kind {
                EntryKind::Directory => {
                    if dest.is_dir() {
                        continue;
                    }
                    match fs::create_dir_all(&dest) {
                        Ok(()) => summary.created_directories += 1,
                        Err(e) => summary
                            .errors
                            .push(format!("Error creating directory {}: {}", entry.path, e)),
                    }
                }
                EntryKind::File => match document.files.get(&entry.path) {
                    Some(record) => self.write_file(record, &dest, &mut summary),
                    None => summary
                        .errors
                        .push(format!("Missing file record for {}", entry.path)),
                },
            }
        }

        Ok(summary)
    }

    /// Write one file record, honoring the overwrite policy
    fn write_file(&self, record: &FileRecord, dest: &Path, summary: &mut ImportSummary) {
        if dest.exists() && !self.overwrite {
            summary.skipped_files += 1;
            return;
        }

        if let ContentKind::Error = record.kind {
            // Nothing to restore; surface the original read failure
            summary
                .errors
                .push(format!("Skipped {}: {}", record.path, record.content));
            return;
        }

        if let Some(parent) = dest.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                summary
                    .errors
                    .push(format!("Error creating {}: {}", record.path, e));
                return;
            }
        }

        let written = match record.kind {
            ContentKind::Text => fs::write(dest, record.content.as_bytes()),
            ContentKind::Binary => match BASE64.decode(record.content.as_bytes()) {
                Ok(bytes) => fs::write(dest, bytes),
                Err(e) => {
                    summary
                        .errors
                        .push(format!("Error decoding {}: {}", record.path, e));
                    return;
                }
            },
            ContentKind::Error => unreachable!("handled above"),
        };

        match written {
            Ok(()) => summary.created_files += 1,
            Err(e) => summary
                .errors
                .push(format!("Error creating {}: {}", record.path, e)),
        }
    }

    /// Join a document path onto the target, rejecting anything that would
    /// escape it (absolute paths, `..` components)
    fn resolve(&self, relative_path: &str) -> Option<PathBuf> {
        let path = Path::new(relative_path);
        if path.is_absolute()
            || path
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(self.target.join(path))
    }
}

/// Parse a JSON document and recreate its tree under `target_path`.
///
/// Fails before touching the filesystem when the JSON is malformed or does
/// not match the document schema.
pub fn import_project(
    json_data: &str,
    target_path: impl AsRef<Path>,
    overwrite: bool,
) -> Result<ImportSummary> {
    let document: Document = serde_json::from_str(json_data)?;
    Importer::new(target_path, overwrite).import(&document)
}
