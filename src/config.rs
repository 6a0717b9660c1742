/*!
 * Configuration handling for projpack
 */

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::error::{PackError, Result};

/// Command-line arguments for projpack
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "projpack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Package project directory trees as portable JSON documents",
    long_about = "Exports a project directory (respecting ignore rules) into a single JSON document, and reconstructs a directory tree from such a document."
)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum, global = true)]
    pub generate: Option<Shell>,
}

/// Available operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Export a project directory to a JSON document
    Export {
        /// Project directory to export
        #[clap(default_value = ".")]
        project_path: String,

        /// Output file path (stdout if omitted)
        #[clap(short, long)]
        output: Option<String>,

        /// Include hidden files and directories
        #[clap(long)]
        include_hidden: bool,

        /// Disable the built-in default ignore patterns
        #[clap(long)]
        no_default_ignores: bool,
    },
    /// Recreate a project directory from a JSON document
    Import {
        /// Target directory for the import
        target_path: String,

        /// JSON document file to import from
        #[clap(short = 'f', long)]
        json_file: Option<String>,

        /// Inline JSON document string
        #[clap(short = 'd', long, conflicts_with = "json_file")]
        json_data: Option<String>,

        /// Overwrite existing files
        #[clap(long)]
        overwrite: bool,
    },
}

/// Where the import reads its document from
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Read from a JSON file
    File(PathBuf),
    /// Use an inline JSON string
    Inline(String),
}

/// Validated export configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Project directory to export
    pub project_dir: PathBuf,
    /// Output file, if any
    pub output_file: Option<PathBuf>,
    /// Whether to include hidden files and directories
    pub include_hidden: bool,
    /// Whether the built-in default ignore patterns apply
    pub use_default_ignores: bool,
}

impl ExportConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.project_dir.exists() || !self.project_dir.is_dir() {
            return Err(PackError::PathNotFound(format!(
                "project directory not found: {}",
                self.project_dir.display()
            )));
        }

        if let Some(output) = &self.output_file {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(PackError::PathNotFound(format!(
                        "output directory not found: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Validated import configuration
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Target directory to write into
    pub target_dir: PathBuf,
    /// Document source
    pub source: DocumentSource,
    /// Whether to overwrite existing files
    pub overwrite: bool,
}

impl ImportConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let DocumentSource::File(path) = &self.source {
            if !path.is_file() {
                return Err(PackError::PathNotFound(format!(
                    "document file not found: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

/// Resolved configuration for one invocation
#[derive(Debug, Clone)]
pub enum Config {
    /// Export operation
    Export(ExportConfig),
    /// Import operation
    Import(ImportConfig),
}

impl Config {
    /// Create configuration from a parsed command
    pub fn from_command(command: Command) -> Result<Self> {
        match command {
            Command::Export {
                project_path,
                output,
                include_hidden,
                no_default_ignores,
            } => Ok(Config::Export(ExportConfig {
                project_dir: PathBuf::from(project_path),
                output_file: output.map(PathBuf::from),
                include_hidden,
                use_default_ignores: !no_default_ignores,
            })),
            Command::Import {
                target_path,
                json_file,
                json_data,
                overwrite,
            } => {
                let source = match (json_file, json_data) {
                    (Some(file), None) => DocumentSource::File(PathBuf::from(file)),
                    (None, Some(data)) => DocumentSource::Inline(data),
                    _ => {
                        return Err(PackError::InvalidInput(
                            "import requires exactly one of --json-file or --json-data".to_string(),
                        ))
                    }
                };
                Ok(Config::Import(ImportConfig {
                    target_dir: PathBuf::from(target_path),
                    source,
                    overwrite,
                }))
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self {
            Config::Export(config) => config.validate(),
            Config::Import(config) => config.validate(),
        }
    }
}
