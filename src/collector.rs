/*!
 * Directory traversal and candidate file collection
 */

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::report::FileReportInfo;
use crate::types::{Record, EXCLUDED_DIR};
use crate::utils::{display_path, is_candidate, truncate_left};
use crate::writer::DumpWriter;

/// Collector statistics
#[derive(Debug, Clone, Default)]
pub struct CollectorStatistics {
    /// Number of files written to the output
    pub files_processed: usize,
    /// Number of candidate files skipped due to read errors
    pub files_skipped: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each file
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Collector for candidate source files
///
/// Walks the target directory depth-first, emitting one record per readable
/// `.cpp`/`.h` file. Siblings are visited in file-name order, files before
/// subdirectories, so repeated runs over an unchanged tree produce
/// byte-identical output.
pub struct Collector {
    /// Collector configuration
    config: Config,
    /// Progress bar
    pub progress: ProgressBar,
    /// Collector statistics
    statistics: CollectorStatistics,
}

impl Collector {
    /// Create a new collector
    pub fn new(config: Config, progress: ProgressBar) -> Self {
        Self {
            config,
            progress,
            statistics: CollectorStatistics::default(),
        }
    }

    /// Get collector statistics
    pub fn statistics(&self) -> &CollectorStatistics {
        &self.statistics
    }

    /// Collect candidate files under the target directory, streaming each
    /// record to the writer as it is discovered
    pub fn collect(&mut self, writer: &mut DumpWriter) -> io::Result<()> {
        let root = self.config.target_dir.clone();
        self.collect_directory(&root, &PathBuf::new(), writer)
    }

    /// Process one directory level: candidate files first, then recurse into
    /// subdirectories that are not excluded
    fn collect_directory(
        &mut self,
        abs_path: &Path,
        rel_path: &Path,
        writer: &mut DumpWriter,
    ) -> io::Result<()> {
        let entries: Vec<DirEntry> = WalkDir::new(abs_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    eprintln!("Error listing {}: {}", abs_path.display(), e);
                    None
                }
            })
            .collect();

        let (dirs, files): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|e| e.file_type().is_dir());

        for entry in files {
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !entry.file_type().is_file() || !is_candidate(&file_name) {
                continue;
            }

            let new_rel_path = rel_path.join(&file_name);
            self.process_file(entry.path(), &new_rel_path, writer)?;
        }

        for entry in dirs {
            // Excluded subtrees are never descended into
            if entry.file_name() == EXCLUDED_DIR {
                continue;
            }

            let entry_name = entry.file_name().to_string_lossy().to_string();
            let new_rel_path = rel_path.join(&entry_name);
            self.collect_directory(entry.path(), &new_rel_path, writer)?;
        }

        Ok(())
    }

    /// Read one candidate file and append its record to the output
    ///
    /// Read failures (permissions, invalid UTF-8, I/O) are reported and
    /// counted as skipped; they never abort the run. Write failures on the
    /// output stream propagate.
    fn process_file(
        &mut self,
        abs_path: &Path,
        rel_path: &Path,
        writer: &mut DumpWriter,
    ) -> io::Result<()> {
        self.progress.inc(1);

        let display = display_path(rel_path);

        // Truncate long names to avoid display issues
        self.progress
            .set_message(format!("Current file: {}", truncate_left(&display, 40)));

        let content = match fs::read_to_string(abs_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", display, e);
                self.statistics.files_skipped += 1;
                return Ok(());
            }
        };

        let record = Record::new(display.clone(), content);
        writer.write_record(&record)?;

        let lines = record.content.lines().count();
        let chars = record.content.chars().count();
        self.statistics.files_processed += 1;
        self.statistics.total_lines += lines;
        self.statistics.total_chars += chars;
        self.statistics
            .file_details
            .insert(display, FileReportInfo { lines, chars });

        Ok(())
    }
}
