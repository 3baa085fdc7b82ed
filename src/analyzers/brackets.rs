use crate::analyzers::Analyzer;
use crate::language::Language;
use crate::report::{Finding, FindingCategory};

/// Balanced-delimiter and quote-parity checks.
///
/// The bracket scan is a plain stack over `(`, `[`, `{` in document
/// order. The quote check is per line: an odd number of `'` or `"` on a
/// line is flagged. No escape handling and no cross-line string
/// tracking, so multi-line strings and escaped quotes can misfire; that
/// trade-off is part of the contract.
pub struct BracketScanner;

fn closing_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => unreachable!("only bracket openers are pushed"),
    }
}

impl Analyzer for BracketScanner {
    fn name(&self) -> &str {
        "syntax"
    }

    fn analyze(&self, source: &str, _language: Language) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut stack: Vec<(char, usize)> = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            for ch in line.chars() {
                match ch {
                    '(' | '[' | '{' => stack.push((ch, line_no)),
                    ')' | ']' | '}' => match stack.pop() {
                        None => findings.push(Finding::new(
                            format!("Unmatched closing bracket `{ch}` on line {line_no}."),
                            line_no,
                            FindingCategory::Syntax,
                        )),
                        Some((open, open_line)) => {
                            if closing_for(open) != ch {
                                findings.push(Finding::new(
                                    format!(
                                        "Mismatched bracket: `{open}` on line {open_line} \
                                         closed by `{ch}` on line {line_no}."
                                    ),
                                    line_no,
                                    FindingCategory::Syntax,
                                ));
                            }
                        }
                    },
                    _ => {}
                }
            }
        }

        // Only the most recently pushed leftover opener is reported.
        if let Some((open, open_line)) = stack.last() {
            findings.push(Finding::new(
                format!("Unclosed opening bracket `{open}` from line {open_line}."),
                *open_line,
                FindingCategory::Syntax,
            ));
        }

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            if line.matches('\'').count() % 2 != 0 {
                findings.push(Finding::new(
                    format!("Potentially unterminated single-quoted string on line {line_no}."),
                    line_no,
                    FindingCategory::Syntax,
                ));
            }
            if line.matches('"').count() % 2 != 0 {
                findings.push(Finding::new(
                    format!("Potentially unterminated double-quoted string on line {line_no}."),
                    line_no,
                    FindingCategory::Syntax,
                ));
            }
        }

        findings
    }
}
