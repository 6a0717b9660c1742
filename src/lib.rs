/*!
 * ProjPack - Package project directory trees as portable JSON documents
 *
 * This library exports a directory tree into a single self-contained JSON
 * document (respecting ignore rules) and reconstructs a directory tree from
 * such a document.
 */

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod ignore;
pub mod import;
pub mod report;
pub mod utils;


// Re-export main components for easier access
pub use config::{Args, Command, Config, DocumentSource, ExportConfig, ImportConfig};
pub use document::{ContentKind, Document, DocumentMetadata, Encoding, Entry, EntryKind, FileRecord};
pub use error::{PackError, Result};
pub use export::{export_project, Exporter};
pub use ignore::IgnoreMatcher;
pub use import::{import_project, Importer, ImportSummary};
pub use report::{ExportReport, FileReportInfo, ImportReport, ReportFormat, Reporter};
pub use utils::{count_files, format_file_size};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
