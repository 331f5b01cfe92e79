//! Batch processing command for multiple claim documents.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use fnol_core::document::DocumentLoader;
use fnol_core::pipeline::{TriagePipeline, TriageReport};

use super::process::{format_report, load_config, missing_cell, OutputFormat};

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

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    index: usize,
    path: PathBuf,
    report: Option<TriageReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let loader = Arc::new(DocumentLoader::from_config(&config.document));
    let pipeline = Arc::new(TriagePipeline::new().with_triage_config(config.triage.clone()));

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && (loader.is_text_file(p) || is_pdf(p)))
        .collect();

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

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // Documents are independent, so each one runs on its own blocking task
    let workers = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut tasks = JoinSet::new();

    for (index, path) in files.into_iter().enumerate() {
        let workers = Arc::clone(&workers);
        let loader = Arc::clone(&loader);
        let pipeline = Arc::clone(&pipeline);

        tasks.spawn(async move {
            let _permit = workers.acquire_owned().await?;
            let result = tokio::task::spawn_blocking(move || {
                let file_start = Instant::now();
                let outcome = process_single_file(&path, &loader, &pipeline);
                let processing_time_ms = file_start.elapsed().as_millis() as u64;

                match outcome {
                    Ok(report) => ProcessResult {
                        index,
                        path,
                        report: Some(report),
                        error: None,
                        processing_time_ms,
                    },
                    Err(e) => ProcessResult {
                        index,
                        path,
                        report: None,
                        error: Some(e.to_string()),
                        processing_time_ms,
                    },
                }
            })
            .await?;
            anyhow::Ok(result)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());

    while let Some(joined) = tasks.join_next().await {
        let result = joined??;

        if let Some(error_msg) = &result.error {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), error_msg);
            } else {
                error!("Failed to process {}: {}", result.path.display(), error_msg);
                tasks.abort_all();
                overall_pb.abandon();
                anyhow::bail!("Processing failed: {}", error_msg);
            }
        }

        results.push(result);
        overall_pb.inc(1);
    }

    overall_pb.finish_with_message("Complete");

    // Restore input order
    results.sort_by_key(|r| r.index);

    let successful: Vec<_> = results.iter().filter(|r| r.report.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(report) = &result.report {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("claim");

                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));
                fs::write(&output_path, format_report(report, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

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

    let mut routes: BTreeMap<&str, usize> = BTreeMap::new();
    for report in successful.iter().filter_map(|r| r.report.as_ref()) {
        *routes.entry(report.recommended_route.label()).or_default() += 1;
    }
    for (route, count) in &routes {
        println!("   {}: {}", route, count);
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn process_single_file(
    path: &Path,
    loader: &DocumentLoader,
    pipeline: &TriagePipeline,
) -> anyhow::Result<TriageReport> {
    let text = loader.load(path)?;

    if text.trim().is_empty() {
        warn!("No text extracted from {}", path.display());
    }

    Ok(pipeline.process(&text))
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "recommended_route",
        "missing_count",
        "missing_fields",
        "reasoning",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name().and_then(|s| s.to_str()).unwrap_or("");

        if let Some(report) = &result.report {
            wtr.write_record([
                filename,
                "success",
                report.recommended_route.label(),
                &report.missing_fields.len().to_string(),
                &missing_cell(report),
                &report.reasoning,
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
