/*!
 * Reporting functionality for projpack
 *
 * Provides formatted console reports of export and import results using the
 * tabled library for clean, consistent table rendering.
 */

use std::collections::HashMap;
use std::time::{Duration, UNIX_EPOCH};

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::import::ImportSummary;
use crate::utils::{format_file_size, truncate_left};

/// Information about one exported file in the report
#[derive(Debug, Clone, Default)]
pub struct FileReportInfo {
    /// Size in bytes
    pub size: u64,
    /// Content classification ("text", "binary" or "error")
    pub kind: String,
}

/// Statistics for one export run
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Where the document was written ("stdout" when printed)
    pub output_file: String,
    /// Export timestamp in seconds since the Unix epoch
    pub export_timestamp: f64,
    /// Time taken to export
    pub duration: Duration,
    /// Number of files recorded
    pub files_processed: usize,
    /// Files stored as UTF-8 text
    pub text_files: usize,
    /// Files stored as base64
    pub binary_files: usize,
    /// Files that could not be read
    pub error_files: usize,
    /// Sum of recorded file sizes
    pub total_bytes: u64,
    /// Details for each file
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Statistics for one import run
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Target directory written into
    pub target_dir: String,
    /// Time taken to import
    pub duration: Duration,
    /// Counts and errors from the importer
    pub summary: ImportSummary,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for export and import results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Print an export report to stdout
    pub fn print_export_report(&self, report: &ExportReport) {
        match self.format {
            ReportFormat::ConsoleTable => println!("\n{}", self.export_console_report(report)),
        }
    }

    /// Print an import report to stdout
    pub fn print_import_report(&self, report: &ImportReport) {
        match self.format {
            ReportFormat::ConsoleTable => println!("\n{}", self.import_console_report(report)),
        }
    }

    // Truncate a relative path for display, keeping the trailing segments
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.len() <= max_len {
            return path.to_string();
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() <= 2 {
            return truncate_left(path, max_len);
        }

        let mut segments = Vec::new();
        let mut current_len = 3;
        for part in parts.iter().rev() {
            let part_len = part.len() + 1;
            if current_len + part_len <= max_len {
                segments.push(*part);
                current_len += part_len;
            } else {
                break;
            }
        }

        let mut result = String::from("...");
        for part in segments.iter().rev() {
            result.push('/');
            result.push_str(part);
        }
        result
    }

    // Create the export summary table
    fn create_export_summary_table(&self, report: &ExportReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let exported_at = UNIX_EPOCH + Duration::from_secs_f64(report.export_timestamp.max(0.0));
        let exported_at = chrono::DateTime::<chrono::Local>::from(exported_at).to_rfc3339();

        let mut rows = vec![
            SummaryRow {
                key: "📂 Output".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "🕒 Exported At".to_string(),
                value: exported_at,
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Packaged".to_string(),
                value: format!(
                    "{} ({} text / {} binary)",
                    report.files_processed, report.text_files, report.binary_files
                ),
            },
            SummaryRow {
                key: "📦 Total Size".to_string(),
                value: format_file_size(report.total_bytes),
            },
        ];

        if report.error_files > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Unreadable Files".to_string(),
                value: report.error_files.to_string(),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create the exported-files table
    fn create_files_table(&self, report: &ExportReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Size")]
            size: String,

            #[tabled(rename = "Type")]
            kind: String,
        }

        // Sort files by size, largest first
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.size.cmp(&a.size));

        let files_to_show = if report.file_details.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                size: format_file_size(info.size),
                kind: info.kind.clone(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate the export console report
    fn export_console_report(&self, report: &ExportReport) -> String {
        let summary_title = "✅  EXPORT COMPLETE";
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES"
        } else {
            "📋  PACKAGED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title,
            self.create_files_table(report),
            summary_title,
            self.create_export_summary_table(report)
        )
    }

    // Generate the import console report
    fn import_console_report(&self, report: &ImportReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let summary = &report.summary;
        let rows = vec![
            SummaryRow {
                key: "📂 Target".to_string(),
                value: report.target_dir.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Created".to_string(),
                value: summary.created_files.to_string(),
            },
            SummaryRow {
                key: "📁 Directories Created".to_string(),
                value: summary.created_directories.to_string(),
            },
            SummaryRow {
                key: "⏭️ Files Skipped".to_string(),
                value: summary.skipped_files.to_string(),
            },
            SummaryRow {
                key: "⚠️ Errors".to_string(),
                value: summary.errors.len().to_string(),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        let mut output = format!("✅  IMPORT COMPLETE\n{}", table);
        if !summary.errors.is_empty() {
            output.push_str("\n\nErrors:");
            for error in &summary.errors {
                output.push_str(&format!("\n  * {}", error));
            }
        }
        output
    }
}
