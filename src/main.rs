use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use diet_plan_parser::{
    DietPlanSegmenter, SegmenterConfig, format_report, report_to_text, sections_to_text,
};
use tracing::info;

/// Turn generated diet plans and report summaries into structured sections
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file; omit or use "-" to read stdin
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Treat input as summary/comparison markdown instead of a diet plan
    #[arg(long)]
    report: bool,

    /// JSON file with extra heading phrases
    #[arg(long)]
    phrases: Option<PathBuf>,

    /// Keep list lines that share a paragraph with their heading
    #[arg(long)]
    keep_heading_items: bool,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let text = read_input(args.input.as_ref())?;

    let output = if args.report {
        let lines = format_report(&text);
        info!(lines = lines.len(), "formatted report");
        match args.format {
            Format::Json => serde_json::to_string_pretty(&lines)?,
            Format::Text => report_to_text(&lines),
        }
    } else {
        let segmenter = build_segmenter(&args)?;
        let outcome = segmenter.segment_with_stats(&text);
        info!(
            paragraphs = outcome.stats.paragraphs,
            headings = outcome.stats.headings,
            items = outcome.sections.total_items(),
            "segmented diet plan"
        );
        match args.format {
            Format::Json => serde_json::to_string_pretty(&outcome.sections)?,
            Format::Text => sections_to_text(&outcome.sections),
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, &output)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => println!("{}", output.trim_end()),
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            info!(path = %path.display(), "reading input");
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn build_segmenter(args: &Args) -> Result<DietPlanSegmenter> {
    let config = match &args.phrases {
        Some(path) => SegmenterConfig::load(path)
            .with_context(|| format!("Failed to load phrase config: {}", path.display()))?,
        None => SegmenterConfig::default(),
    };

    let segmenter = config.build_segmenter()?;
    Ok(if args.keep_heading_items {
        segmenter.keep_heading_items(true)
    } else {
        segmenter
    })
}
