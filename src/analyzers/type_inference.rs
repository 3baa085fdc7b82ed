use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analyzers::Analyzer;
use crate::language::Language;
use crate::report::{Finding, FindingCategory};
use crate::scaffold::JS_DECLARATION;

static VAR_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:let|const|var)\s+(\w+)\s*=\s*(.+)").expect("valid var pattern"));

static CALL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\w+)\s*\(([^)]*)\)").expect("valid call pattern"));

static REASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+)\s*=\s*(.+)").expect("valid assignment pattern"));

static ARROW_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(.*\)\s*=>").expect("valid arrow pattern"));

const CONTROL_KEYWORDS: [&str; 6] = ["if", "for", "while", "switch", "catch", "return"];

/// Flow-insensitive type tracker for the JavaScript family.
///
/// Pass 1 harvests function signatures and variable declarations into a
/// single flat, whole-document namespace; no block or function scoping,
/// by contract. Pass 2 re-walks the lines checking call arity against
/// the harvested signatures and flagging reassignments that change a
/// binding's inferred type. Everything is pattern-shaped; there is no
/// parser behind it, so false positives against real scoping rules are
/// expected and accepted.
pub struct TypeInferenceEngine;

/// Number of arguments/parameters in a raw comma-separated list.
fn comma_count(list: &str) -> usize {
    if list.trim().is_empty() {
        0
    } else {
        list.split(',').count()
    }
}

/// Strip one trailing statement terminator from a raw RHS.
fn normalized_value(raw: &str) -> &str {
    let value = raw.trim();
    value.strip_suffix(';').unwrap_or(value).trim()
}

fn is_quoted(value: &str) -> bool {
    value.len() >= 2
        && ['"', '\'', '`']
            .iter()
            .any(|&q| value.starts_with(q) && value.ends_with(q))
}

/// Classify a right-hand side into one of the fixed type names.
/// Consults the current bindings so that `let b = a;` inherits `a`'s
/// inferred type.
fn infer_type(value: &str, bindings: &HashMap<String, String>) -> String {
    let value = value.trim();
    if let Some(known) = bindings.get(value) {
        return known.clone();
    }
    if is_quoted(value) {
        return "string".into();
    }
    if value.parse::<f64>().map(|n| n.is_finite()).unwrap_or(false) {
        return "number".into();
    }
    if value == "true" || value == "false" {
        return "boolean".into();
    }
    if value == "null" || value == "undefined" {
        return "null".into();
    }
    if (value.starts_with('{') && value.ends_with('}'))
        || (value.starts_with('[') && value.ends_with(']'))
    {
        return "object".into();
    }
    if ARROW_HEAD.is_match(value) || value.starts_with("function") {
        return "function".into();
    }
    "any".into()
}

/// Approximate control-flow exclusion: reject a call match whose name is
/// immediately preceded by a control-flow keyword. Heuristic lookahead,
/// not a parser.
fn preceded_by_control_keyword(line: &str, start: usize) -> bool {
    let prefix = &line[..start];
    CONTROL_KEYWORDS.iter().any(|kw| {
        prefix.ends_with(kw)
            && prefix[..prefix.len() - kw.len()]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric() && c != '_')
    })
}

impl Analyzer for TypeInferenceEngine {
    fn name(&self) -> &str {
        "logic"
    }

    fn analyze(&self, source: &str, language: Language) -> Vec<Finding> {
        if !language.is_js_family() {
            return Vec::new();
        }

        let mut findings = Vec::new();
        let mut signatures: HashMap<String, usize> = HashMap::new();
        let mut bindings: HashMap<String, String> = HashMap::new();
        let lines: Vec<&str> = source.lines().collect();

        // Pass 1: harvest declarations into the flat namespace.
        for line in &lines {
            if let Some(caps) = JS_DECLARATION.captures(line) {
                let name = caps[1].to_string();
                signatures.insert(name.clone(), comma_count(&caps[2]));
                bindings.insert(name, "function".into());
            }
            if let Some(caps) = VAR_DECLARATION.captures(line) {
                if !line.contains("=>") {
                    let name = &caps[1];
                    if !bindings.contains_key(name) {
                        let inferred = infer_type(normalized_value(&caps[2]), &bindings);
                        bindings.insert(name.to_string(), inferred);
                    }
                }
            }
        }

        // Pass 2: check usages against the harvested tables.
        for (index, line) in lines.iter().enumerate() {
            let line_no = index + 1;

            for caps in CALL_SHAPE.captures_iter(line) {
                let name_match = caps.get(1).expect("call pattern has a name group");
                if preceded_by_control_keyword(line, name_match.start()) {
                    continue;
                }
                let name = name_match.as_str();
                if let Some(&expected) = signatures.get(name) {
                    let args = comma_count(&caps[2]);
                    if args != expected {
                        findings.push(Finding::new(
                            format!(
                                "Line {line_no}: `{name}` called with {args} arguments, \
                                 but expected {expected}."
                            ),
                            line_no,
                            FindingCategory::Logic,
                        ));
                    }
                }
            }

            if let Some(caps) = REASSIGNMENT.captures(line) {
                let name = caps[1].to_string();
                if let Some(old_type) = bindings.get(&name).cloned() {
                    let new_type = infer_type(normalized_value(&caps[2]), &bindings);
                    if old_type != "any" && new_type != "any" && old_type != new_type {
                        findings.push(Finding::new(
                            format!(
                                "Line {line_no}: `{name}` type changed from \
                                 `{old_type}` to `{new_type}`."
                            ),
                            line_no,
                            FindingCategory::Logic,
                        ));
                    }
                    // State carries forward even when no finding fires.
                    bindings.insert(name, new_type);
                }
            }
        }

        findings
    }
}
