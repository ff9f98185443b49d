/*!
 * Core types for the CodeDump application
 */

/// Directory name excluded from traversal at any depth
pub const EXCLUDED_DIR: &str = "base";

/// File name suffixes that mark a file as a candidate (case-sensitive)
pub const CANDIDATE_SUFFIXES: [&str; 2] = [".cpp", ".h"];

/// One (path, content) entry destined for the output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Path relative to the traversal root, separators normalized to `/`
    pub display_path: String,
    /// File content, verbatim
    pub content: String,
}

impl Record {
    /// Create a record from a display path and file content
    pub fn new(display_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            display_path: display_path.into(),
            content: content.into(),
        }
    }
}
