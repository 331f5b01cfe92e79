//! Process command - triage a single claim document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use fnol_core::document::DocumentLoader;
use fnol_core::models::claim::{format_amount, FieldValue};
use fnol_core::models::config::FnolConfig;
use fnol_core::pipeline::{TriagePipeline, TriageReport};
use fnol_core::Field;

use super::config::default_config_path;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (plain text or PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show which routing rule fired
    #[arg(long)]
    explain: bool,
}

impl ProcessArgs {
    /// Default arguments for a bare `fnol <FILE>` invocation.
    pub fn for_file(input: PathBuf) -> Self {
        Self {
            input,
            output: None,
            format: OutputFormat::Json,
            explain: false,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let loader = DocumentLoader::from_config(&config.document);

    // Other documents degrade to empty text inside the loader
    if loader.is_text_file(&args.input) && !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = loader.load(&args.input)?;

    if text.trim().is_empty() {
        warn!(
            "No text extracted from {}, every mandatory field will be missing",
            args.input.display()
        );
    }

    let pipeline = TriagePipeline::new().with_triage_config(config.triage.clone());
    let (fields, missing, decision) = pipeline.evaluate(&text);
    let report = TriageReport::from_parts(fields, missing, &decision);

    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.explain {
        eprintln!(
            "{} Rule {:?} routed the claim to {}",
            style("ℹ").blue(),
            decision.rule(),
            style(decision.route()).bold()
        );
        for reason in decision.reasoning() {
            eprintln!("  - {}", reason);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load the configuration named on the command line, else the default
/// config file if one exists, else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FnolConfig> {
    let config = if let Some(path) = config_path {
        FnolConfig::from_file(Path::new(path))?
    } else {
        let default_path = default_config_path();
        if default_path.exists() {
            debug!("Using config file {}", default_path.display());
            FnolConfig::from_file(&default_path)?
        } else {
            FnolConfig::default()
        }
    };

    config.validate()?;
    Ok(config)
}

pub fn format_report(report: &TriageReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

/// Render one field as a flat string; lists are `;`-separated.
pub fn field_cell(report: &TriageReport, field: Field) -> String {
    match report.extracted_fields.get(field) {
        FieldValue::Text(text) => text.unwrap_or_default().to_string(),
        FieldValue::Number(number) => number.map(format_amount).unwrap_or_default(),
        FieldValue::Contacts(contacts) => contacts
            .email
            .iter()
            .chain(contacts.phone.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";"),
        FieldValue::Tags(tags) => tags
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(";"),
    }
}

pub fn missing_cell(report: &TriageReport) -> String {
    report
        .missing_fields
        .iter()
        .map(Field::name)
        .collect::<Vec<_>>()
        .join(";")
}

fn format_csv(report: &TriageReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["recommendedRoute", "reasoning", "missingFields"];
    header.extend(Field::ALL.iter().map(Field::name));
    wtr.write_record(&header)?;

    let mut row = vec![
        report.recommended_route.label().to_string(),
        report.reasoning.clone(),
        missing_cell(report),
    ];
    row.extend(Field::ALL.iter().map(|field| field_cell(report, *field)));
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &TriageReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Route: {}\n", report.recommended_route));
    output.push_str(&format!("Reasoning: {}\n", report.reasoning));
    if report.missing_fields.is_empty() {
        output.push_str("Missing fields: none\n");
    } else {
        output.push_str(&format!(
            "Missing fields: {}\n",
            missing_cell(report).replace(';', ", ")
        ));
    }
    output.push('\n');

    output.push_str("Extracted fields:\n");
    for field in Field::ALL {
        let value = field_cell(report, field);
        let value = if value.is_empty() { "-".to_string() } else { value };
        output.push_str(&format!("  {:<18} {}\n", field.name(), value));
    }

    output
}
