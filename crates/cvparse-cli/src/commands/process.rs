//! Process command - extract data from a single resume file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cvparse_core::{decode_document, MediaType, ResumeParser, ResumeRecord};

use super::{build_parser, load_config};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or DOCX)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output preserving the full record shape
    Json,
    /// CSV output (one flattened row)
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Decoding document...");
    pb.set_position(20);

    let media_type = MediaType::from_path(&args.input)?;
    let data = fs::read(&args.input)?;
    let text = decode_document(&data, media_type, config.decode.min_text_length)?;

    debug!("decoded {} characters of text", text.len());

    pb.set_message("Extracting fields...");
    pb.set_position(60);

    let parser = build_parser(&config);
    let source_name = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    let outcome = parser.parse(&text, source_name)?;

    pb.set_position(100);
    pb.finish_with_message("Done");

    if args.show_warnings && !outcome.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &outcome.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_record(&outcome.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// File extension for an output format.
pub fn format_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    }
}

/// Render a record in the requested format. Display sentinels are
/// substituted here, at the presentation boundary.
pub fn format_record(record: &ResumeRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &ResumeRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "source_name",
        "candidate_name",
        "email",
        "phone",
        "skills",
        "education",
        "experience_entries",
        "total_experience_years",
        "parsed_at",
    ])?;

    wtr.write_record([
        &record.source_name,
        record.display_name(),
        record.display_email(),
        record.display_phone(),
        &record.display_skills().join("; "),
        &record.display_education().join("; "),
        &record.display_experience().join("; "),
        &record.display_experience_years(),
        &record.parsed_at.to_rfc3339(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ResumeRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Resume: {}\n", record.source_name));
    output.push_str(&format!("Name:   {}\n", record.display_name()));
    output.push_str(&format!("Email:  {}\n", record.display_email()));
    output.push_str(&format!("Phone:  {}\n", record.display_phone()));
    output.push('\n');

    output.push_str("Skills:\n");
    for skill in record.display_skills() {
        output.push_str(&format!("  - {}\n", skill));
    }
    output.push('\n');

    output.push_str("Education:\n");
    for degree in record.display_education() {
        output.push_str(&format!("  - {}\n", degree));
    }
    output.push('\n');

    output.push_str("Experience:\n");
    for entry in record.display_experience() {
        output.push_str(&format!("  - {}\n", entry));
    }
    output.push_str(&format!(
        "\nTotal experience (years): {}\n",
        record.display_experience_years()
    ));
    output.push_str(&format!("Parsed at: {}\n", record.parsed_at.to_rfc3339()));

    output
}

/// Resolve an output path inside `dir` for a given input filename.
pub fn output_path_for(dir: &Path, source_name: &str, format: OutputFormat) -> PathBuf {
    let stem = Path::new(source_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    dir.join(format!("{}.{}", stem, format_extension(format)))
}
