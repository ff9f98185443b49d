/*!
 * Utility functions for CodeDump
 */

use std::path::{Path, MAIN_SEPARATOR};

use walkdir::WalkDir;

use crate::types::{CANDIDATE_SUFFIXES, EXCLUDED_DIR};

/// Check if a file name marks a candidate file (case-sensitive suffix match)
pub fn is_candidate(file_name: &str) -> bool {
    CANDIDATE_SUFFIXES.iter().any(|s| file_name.ends_with(s))
}

/// Convert a path relative to the traversal root into its display form,
/// with the host path separator normalized to `/`
pub fn display_path(rel_path: &Path) -> String {
    rel_path
        .to_string_lossy()
        .replace(MAIN_SEPARATOR, "/")
}

/// Truncate a string to at most `max_chars` characters, keeping the tail and
/// prefixing `...` when truncation occurs
///
/// Operates on character boundaries, so multibyte file names never split
/// mid-character.
pub fn truncate_left(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let keep = max_chars.saturating_sub(3);
    let start = s
        .char_indices()
        .rev()
        .take(keep)
        .last()
        .map_or(s.len(), |(i, _)| i);

    format!("...{}", &s[start..])
}

/// Count candidate files for progress tracking, honoring the excluded
/// directory name at any depth
pub fn count_candidates(dir: &Path) -> u64 {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !(e.file_type().is_dir() && e.file_name() == EXCLUDED_DIR)
        })
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_candidate(&e.file_name().to_string_lossy()))
        .count() as u64
}
