/*!
 * CodeDump - Concatenate C++ source files into a single annotated text dump
 *
 * This library walks a directory tree, selects `.cpp` and `.h` files, and
 * writes each file's path and content as a fenced record to one output file,
 * suitable for pasting into an LLM context window.
 */

pub mod collector;
pub mod config;
pub mod error;
pub mod report;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use collector::{Collector, CollectorStatistics};
pub use config::Config;
pub use error::{DumpError, Result};
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use types::Record;
pub use utils::{count_candidates, display_path, is_candidate, truncate_left};
pub use writer::DumpWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
