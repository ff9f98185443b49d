/*!
 * Output writer implementation for CodeDump
 *
 * Writes one record per collected file: the display path followed by a
 * colon, the file content wrapped in triple-backtick fences, then a blank
 * separator line. The fences are literal data in the output file, not
 * markdown interpreted by the tool itself.
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::config::Config;
use crate::error::{DumpError, Result};
use crate::types::Record;

const FENCE: &str = "```";

/// Writer for the single output dump file
pub struct DumpWriter {
    inner: BufWriter<File>,
}

impl DumpWriter {
    /// Create the output file, truncating any existing content
    ///
    /// Failure here is fatal for the whole run.
    pub fn create(config: &Config) -> Result<Self> {
        let file = File::create(&config.output_file).map_err(|e| {
            DumpError::Output(format!(
                "Failed to create {}: {}",
                config.output_file.display(),
                e
            ))
        })?;
        Ok(Self {
            inner: BufWriter::new(file),
        })
    }

    /// Append one record in the literal fenced format
    ///
    /// Content goes out verbatim; a newline is added only when the content
    /// does not already end with one, so the closing fence always starts a
    /// fresh line.
    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        writeln!(self.inner, "{}:", record.display_path)?;
        writeln!(self.inner, "{}", FENCE)?;
        self.inner.write_all(record.content.as_bytes())?;
        if !record.content.ends_with('\n') {
            writeln!(self.inner)?;
        }
        writeln!(self.inner, "{}\n", FENCE)?;
        Ok(())
    }

    /// Flush buffered output to disk
    pub fn finish(mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
