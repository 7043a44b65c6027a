//! Batch processing command for multiple resume files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use cvparse_core::{BatchItem, BatchProcessor, ResumeRecord};

use super::{build_parser, load_config};
use super::process::{format_record, output_path_for, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,
}

/// Result of processing a single file.
struct FileResult {
    source_name: String,
    record: Option<ResumeRecord>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    // Expand glob pattern. No extension filtering here: unsupported
    // files become reported per-file failures instead of silently
    // disappearing from the run.
    let files: Vec<PathBuf> = glob(&args.input)?.filter_map(|r| r.ok()).collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let processor =
        BatchProcessor::new(build_parser(&config)).with_decode_config(config.decode.clone());

    let mut results = Vec::with_capacity(files.len());
    for path in &files {
        let source_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("resume")
            .to_string();

        let result = match fs::read(path) {
            Ok(bytes) => {
                let item = BatchItem::new(source_name.clone(), bytes);
                match processor.process_one(&item) {
                    Ok(record) => FileResult {
                        source_name,
                        record: Some(record),
                        error: None,
                    },
                    Err(failure) => FileResult {
                        source_name,
                        record: None,
                        error: Some(failure.reason),
                    },
                }
            }
            Err(e) => FileResult {
                source_name,
                record: None,
                error: Some(e.to_string()),
            },
        };

        results.push(result);
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.record.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    // Write per-file outputs
    if let Some(ref output_dir) = args.output_dir {
        for result in &successful {
            if let Some(record) = &result.record {
                let output_path = output_path_for(output_dir, &result.source_name, args.format);
                let content = format_record(record, args.format)?;
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !successful.is_empty() {
        let with_email = successful
            .iter()
            .filter(|r| r.record.as_ref().is_some_and(|rec| rec.email.is_some()))
            .count();
        let total_skills: usize = successful
            .iter()
            .filter_map(|r| r.record.as_ref())
            .map(|rec| rec.skills.len())
            .sum();
        let avg_skills = total_skills as f64 / successful.len() as f64;

        println!(
            "   {} resumes with an email address, {:.1} skills per resume on average",
            with_email, avg_skills
        );
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.source_name,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "candidate_name",
        "email",
        "phone",
        "skills",
        "education",
        "total_experience_years",
        "error",
    ])?;

    for result in results {
        if let Some(record) = &result.record {
            wtr.write_record([
                &result.source_name,
                "success",
                record.display_name(),
                record.display_email(),
                record.display_phone(),
                &record.display_skills().join("; "),
                &record.display_education().join("; "),
                &record.display_experience_years(),
                "",
            ])?;
        } else {
            wtr.write_record([
                &result.source_name,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
