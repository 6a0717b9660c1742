/*!
 * Command-line interface for projpack
 */

use std::fs;
use std::io;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use projpack::config::{Args, Config, DocumentSource, ExportConfig, ImportConfig};
use projpack::error::{PackError, Result};
use projpack::export::Exporter;
use projpack::ignore::IgnoreMatcher;
use projpack::import::import_project;
use projpack::report::{ExportReport, ImportReport, ReportFormat, Reporter};
use projpack::utils::count_files;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "projpack", &mut io::stdout());
        return Ok(());
    }

    let command = args.command.ok_or_else(|| {
        PackError::InvalidInput("no command given; see --help for usage".to_string())
    })?;

    // Create and validate configuration
    let config = Config::from_command(command)?;
    config.validate()?;

    match config {
        Config::Export(config) => run_export(config),
        Config::Import(config) => run_import(config),
    }
}

fn run_export(config: ExportConfig) -> Result<()> {
    // Create progress bar with the same styling for every run
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📦 Export");
    progress.set_message(format!("Scanning directory: {}", config.project_dir.display()));

    // Count files for progress tracking
    let matcher = IgnoreMatcher::for_project(
        &config.project_dir,
        config.include_hidden,
        config.use_default_ignores,
    );
    let total_files = match count_files(&config.project_dir, &matcher) {
        Ok(count) => count,
        Err(e) => {
            progress.set_message(format!("Warning: failed to count files: {}", e));
            0
        }
    };
    progress.set_length(total_files);

    let start_time = Instant::now();

    let mut exporter = Exporter::new(
        &config.project_dir,
        config.include_hidden,
        config.use_default_ignores,
        progress.clone(),
    )?;
    let document = exporter.export()?;

    let json = serde_json::to_string_pretty(&document)?;
    let output_name = match &config.output_file {
        Some(path) => {
            fs::write(path, &json)?;
            path.display().to_string()
        }
        None => {
            println!("{}", json);
            "stdout".to_string()
        }
    };

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    let statistics = exporter.statistics();
    let report = ExportReport {
        output_file: output_name,
        export_timestamp: document.metadata.export_timestamp,
        duration,
        files_processed: statistics.files_processed,
        text_files: statistics.text_files,
        binary_files: statistics.binary_files,
        error_files: statistics.error_files,
        total_bytes: statistics.total_bytes,
        file_details: statistics.file_details.clone(),
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_export_report(&report);

    Ok(())
}

fn run_import(config: ImportConfig) -> Result<()> {
    let json = match &config.source {
        DocumentSource::File(path) => fs::read_to_string(path)?,
        DocumentSource::Inline(data) => data.clone(),
    };

    let start_time = Instant::now();
    let summary = import_project(&json, &config.target_dir, config.overwrite)?;
    let duration = start_time.elapsed();

    let report = ImportReport {
        target_dir: config.target_dir.display().to_string(),
        duration,
        summary,
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_import_report(&report);

    Ok(())
}
