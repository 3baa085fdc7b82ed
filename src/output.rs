use crate::report::Review;

/// Output format for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Markdown,
    Json,
}

/// Format a review as JSON.
pub fn format_json(review: &Review) -> String {
    serde_json::to_string_pretty(review).expect("review should be serializable")
}

/// Format a review as raw markdown: the summary block, then the
/// detailed body, exactly as assembled.
pub fn format_markdown(review: &Review) -> String {
    format!("{}\n\n{}", review.summary, review.detailed)
}

/// Format a review with terminal colors: section headings stand out,
/// code fences are dimmed, everything else passes through.
#[cfg(feature = "cli")]
pub fn format_pretty(review: &Review) -> String {
    use colored::Colorize;

    let mut out = String::new();

    for line in review.summary.lines() {
        out.push_str(&format!("{}\n", line.bold()));
    }

    for line in review.detailed.lines() {
        if let Some(title) = line.strip_prefix("### ") {
            out.push_str(&format!("\n{}\n", title.bold().cyan()));
        } else if line.starts_with("```") {
            out.push_str(&format!("{}\n", line.dimmed()));
        } else {
            out.push_str(&format!("{line}\n"));
        }
    }

    out
}
