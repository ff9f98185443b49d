/*!
 * Command-line interface for CodeDump
 */

use std::io;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use codedump::config::{Args, Config};
use codedump::report::{ReportFormat, Reporter, ScanReport};
use codedump::utils::count_candidates;
use codedump::writer::DumpWriter;
use codedump::{Collector, Result};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration (a missing target directory aborts here,
    // before the output file is created or truncated)
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // Count candidate files for progress tracking
    let total_files = count_candidates(&config.target_dir);
    progress.set_length(total_files);
    progress.set_prefix("📊 Processing");
    progress.set_message(format!("🔎 Found {} files to process", total_files));

    // Create writer and collector
    let mut writer = DumpWriter::create(&config)?;
    let mut collector = Collector::new(config.clone(), progress.clone());

    // Start timing both collection and write operations
    let start_time = Instant::now();

    // Collect files, streaming records to the output file
    collector.collect(&mut writer)?;
    writer.finish()?;

    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Prepare and print the final report
    let stats = collector.statistics();
    let scan_report = ScanReport {
        output_file: config.output_file.display().to_string(),
        duration: total_duration,
        files_processed: stats.files_processed,
        files_skipped: stats.files_skipped,
        total_lines: stats.total_lines,
        total_chars: stats.total_chars,
        file_details: stats.file_details.clone(),
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&scan_report);

    Ok(())
}
