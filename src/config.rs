/*!
 * Configuration handling for CodeDump
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{DumpError, Result};

/// Command-line arguments for CodeDump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "codedump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate C++ source files into a single annotated text dump",
    long_about = "Walks a directory tree, selects .cpp and .h files (skipping any \
                  directory named 'base'), and writes each file's path and content \
                  as a fenced record to one output text file."
)]
pub struct Args {
    /// Target directory to process
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output file name
    #[clap(default_value = "all_project_code.txt")]
    pub output_file: String,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to process
    pub target_dir: PathBuf,

    /// Output file path
    pub output_file: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output_file),
        }
    }

    /// Validate the configuration
    ///
    /// Runs before the output file is opened, so a missing target directory
    /// never creates or truncates the output file.
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() || !self.target_dir.is_dir() {
            return Err(DumpError::PathNotFound(format!(
                "Target directory not found: {}",
                self.target_dir.display()
            )));
        }

        // Check if output file directory exists and is writable
        if let Some(parent) = self.output_file.parent() {
            if !parent.exists() && parent != PathBuf::from("") {
                return Err(DumpError::PathNotFound(format!(
                    "Output directory not found: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}
