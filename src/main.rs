use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use walkdir::WalkDir;

use deskcheck::language::Language;
use deskcheck::output::{self, OutputFormat};
use deskcheck::report::Review;

#[derive(Parser)]
#[command(name = "deskcheck", about = "Offline heuristic code review")]
struct Cli {
    /// File or directory to review.
    path: PathBuf,

    /// Language tag; auto picks a tag per file extension.
    #[arg(long, default_value = "auto")]
    language: String,

    /// Output format: pretty, markdown, or json.
    #[arg(long, default_value = "pretty")]
    format: String,
}

fn parse_format(s: &str) -> Result<OutputFormat> {
    match s {
        "pretty" => Ok(OutputFormat::Pretty),
        "markdown" => Ok(OutputFormat::Markdown),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("unknown format: {other} (expected pretty, markdown, or json)"),
    }
}

fn collect_files(path: &PathBuf) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.clone()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let p = entry.path();
        let known = p
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| Language::from_extension(ext).is_some());
        if known {
            files.push(p.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn review_one(path: &Path, declared: Language) -> Result<Review> {
    if declared == Language::Auto {
        deskcheck::review_file(path).with_context(|| format!("failed to review {}", path.display()))
    } else {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(deskcheck::review(&source, declared))
    }
}

fn format_review(review: &Review, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => output::format_json(review),
        OutputFormat::Markdown => output::format_markdown(review),
        OutputFormat::Pretty => output::format_pretty(review),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let language = cli
        .language
        .parse::<Language>()
        .map_err(|e| anyhow::anyhow!(e))?;
    let fmt = parse_format(&cli.format)?;

    let files = collect_files(&cli.path).context("failed to collect files")?;

    if files.is_empty() {
        anyhow::bail!("no reviewable files found in {}", cli.path.display());
    }

    let reviews: Vec<Review> = files
        .iter()
        .map(|f| review_one(f, language))
        .collect::<Result<Vec<_>>>()?;

    if fmt == OutputFormat::Json && reviews.len() > 1 {
        // Emit a JSON array for multiple files
        let json = serde_json::to_string_pretty(&reviews)?;
        println!("{json}");
    } else {
        for review in &reviews {
            println!("{}", format_review(review, fmt));
        }
    }

    Ok(())
}
