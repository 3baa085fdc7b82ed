use once_cell::sync::Lazy;
use regex::Regex;

use crate::analyzers::Analyzer;
use crate::language::Language;
use crate::report::{Finding, FindingCategory};

static TODO_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?://|#)\s*TODO").expect("valid todo pattern"));

/// Per-line style and smell checks: overlong lines, leftover debug
/// prints, TODO markers.
pub struct StaticIssueScanner;

impl Analyzer for StaticIssueScanner {
    fn name(&self) -> &str {
        "static"
    }

    fn analyze(&self, source: &str, language: Language) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;

            if line.len() > 120 {
                findings.push(Finding::new(
                    format!("Line {line_no} is longer than 120 characters."),
                    line_no,
                    FindingCategory::Static,
                ));
            }

            if language.is_js_family() && line.contains("console.log") {
                findings.push(Finding::new(
                    format!("Debug statement `console.log` found on line {line_no}."),
                    line_no,
                    FindingCategory::Static,
                ));
            }

            if TODO_MARKER.is_match(line) {
                findings.push(Finding::new(
                    format!("TODO comment found on line {line_no}."),
                    line_no,
                    FindingCategory::Static,
                ));
            }
        }

        findings
    }
}
