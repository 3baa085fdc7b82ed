use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::ComplexityEstimate;

/// No space inference is attempted offline.
pub const SPACE_LABEL: &str = "Hard to estimate offline; depends on input size.";

static FUNCTION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:function\s+|def\s+)(\w+)\s*\(").expect("valid name pattern"));

static LOOP_OPENING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:for|while)\s*\(").expect("valid loop pattern"));

const ARRAY_METHODS: [&str; 5] = [".map(", ".filter(", ".reduce(", ".forEach(", ".sort("];

/// Classify the input's time complexity from two whole-text
/// measurements: self-referencing function names and for/while nesting
/// depth. Priority is fixed: recursion beats nesting beats array-method
/// usage beats the constant fallback.
pub fn estimate(source: &str) -> ComplexityEstimate {
    let time_label = if has_recursion(source) {
        "Potentially O(2^n) or O(n) (recursion)".to_string()
    } else {
        let nesting = max_loop_nesting(source);
        if nesting > 0 {
            format!("O(n^{nesting}) (loop nesting)")
        } else if source.len() > 100 && ARRAY_METHODS.iter().any(|m| source.contains(m)) {
            "O(n) or O(n log n) (array methods)".to_string()
        } else {
            "O(1)".to_string()
        }
    };

    ComplexityEstimate {
        time_label,
        space_label: SPACE_LABEL.to_string(),
    }
}

/// A declared function counts as recursive when its name shows up as a
/// call target more than once anywhere in the text (the declaration
/// itself is one of the hits). First hit wins; remaining candidates are
/// not scanned.
fn has_recursion(source: &str) -> bool {
    for line in source.lines() {
        let Some(caps) = FUNCTION_NAME.captures(line) else {
            continue;
        };
        let call = Regex::new(&format!(r"\b{}\s*\(", regex::escape(&caps[1])))
            .expect("escaped name is a valid pattern");
        if call.find_iter(source).count() > 1 {
            return true;
        }
    }
    false
}

/// Running nesting counter: +1 on a line with a for/while opening, then
/// -1 per `}` on the line, clamped at zero.
fn max_loop_nesting(source: &str) -> usize {
    let mut current = 0usize;
    let mut max = 0usize;
    for line in source.lines() {
        if LOOP_OPENING.is_match(line) {
            current += 1;
        }
        let closes = line.matches('}').count();
        current = current.saturating_sub(closes);
        max = max.max(current);
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_snippet_is_constant_time() {
        let estimate = estimate("let x = 1;");
        assert_eq!(estimate.time_label, "O(1)");
        assert_eq!(estimate.space_label, SPACE_LABEL);
    }

    #[test]
    fn nested_loops_count_depth() {
        let source = "\
for (let i = 0; i < n; i++) {
  for (let j = 0; j < n; j++) {
    total += i * j;
  }
}";
        assert_eq!(estimate(source).time_label, "O(n^2) (loop nesting)");
    }

    #[test]
    fn single_loop_is_linear() {
        let source = "while (count > 0) {\n  count -= 1;\n}";
        assert_eq!(estimate(source).time_label, "O(n^1) (loop nesting)");
    }

    #[test]
    fn recursion_wins_over_nesting() {
        let source = "\
function fact(n) {
  for (let i = 0; i < n; i++) {
    for (let j = 0; j < n; j++) {}
  }
  return n <= 1 ? 1 : n * fact(n - 1);
}";
        assert_eq!(
            estimate(source).time_label,
            "Potentially O(2^n) or O(n) (recursion)"
        );
    }

    #[test]
    fn python_defs_are_recursion_candidates() {
        let source = "def walk(node):\n    for child in node:\n        walk(child)";
        assert_eq!(
            estimate(source).time_label,
            "Potentially O(2^n) or O(n) (recursion)"
        );
    }

    #[test]
    fn array_methods_need_enough_text() {
        let long = "const doubled = values.map((value) => value * 2);\n\
                    const flagged = doubled.filter((value) => value > 10);";
        assert!(long.len() > 100);
        assert_eq!(
            estimate(long).time_label,
            "O(n) or O(n log n) (array methods)"
        );

        let short = "xs.map(f);";
        assert_eq!(estimate(short).time_label, "O(1)");
    }

    #[test]
    fn declaration_alone_is_not_recursion() {
        let source = "function once(x) {\n  return x;\n}";
        assert_eq!(estimate(source).time_label, "O(1)");
    }
}
