/*!
 * Document schema shared by the exporter and importer
 *
 * The JSON field names and nesting here are the wire format; they must stay
 * compatible with previously exported documents.
 */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A complete exported project: metadata, structure and file contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Information about the export itself
    pub metadata: DocumentMetadata,
    /// Every retained filesystem object, in depth-first traversal order
    pub structure: Vec<Entry>,
    /// File contents keyed by relative path (directories do not appear here)
    pub files: BTreeMap<String, FileRecord>,
}

/// Metadata recorded at export time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Export time in seconds since the Unix epoch
    pub export_timestamp: f64,
    /// Base name of the exported directory
    pub project_name: String,
    /// Path the project was exported from
    pub project_path: String,
    /// Whether hidden files were included
    pub include_hidden: bool,
    /// Whether the built-in default ignore patterns were applied
    #[serde(default)]
    pub use_default_ignores: bool,
    /// Whether the project root contained a .gitignore file
    #[serde(default)]
    pub has_gitignore: bool,
}

/// Structural record for one filesystem object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Base name
    pub name: String,
    /// Path relative to the project root, forward-slash separated
    pub path: String,
    /// Whether this is a file or a directory
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes (0 for directories)
    pub size: u64,
    /// Last modification time in seconds since the Unix epoch
    pub modified: f64,
}

/// Kind of filesystem object an [`Entry`] describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file (or a symlink read through as one)
    File,
    /// Directory
    Directory,
}

/// An [`Entry`] for a file plus its encoded content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Base name
    pub name: String,
    /// Path relative to the project root, forward-slash separated
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// Last modification time in seconds since the Unix epoch
    pub modified: f64,
    /// How the content was classified
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Content encoding; absent for error records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    /// Decoded text, base64 payload, or error message depending on `kind`
    pub content: String,
}

/// Classification of a file's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Valid UTF-8, stored verbatim
    Text,
    /// Arbitrary bytes, stored base64-encoded
    Binary,
    /// The file could not be read; `content` holds the error message
    Error,
}

/// Encoding applied to a [`FileRecord`]'s content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// UTF-8 text, stored as-is
    #[serde(rename = "utf-8")]
    Utf8,
    /// Raw bytes encoded as base64
    #[serde(rename = "base64")]
    Base64,
}

impl Document {
    /// Number of retained files (of any content kind)
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of retained directories
    pub fn directory_count(&self) -> usize {
        self.structure
            .iter()
            .filter(|e| e.kind == EntryKind::Directory)
            .count()
    }
}
