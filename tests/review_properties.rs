use deskcheck::{review, Language};

#[test]
fn two_invocations_are_byte_identical() {
    let source = r#"
function totalPrice(items, taxRate) {
    let total = 0;
    for (let i = 0; i < items.length; i++) {
        total += items[i].price;
    }
    return total * (1 + taxRate);
}
totalPrice([], 0.2, "extra");
"#;
    let first = review(source, Language::JavaScript);
    let second = review(source, Language::JavaScript);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.detailed, second.detailed);
}

#[test]
fn balanced_source_has_no_syntax_findings() {
    let source = "fn main() {\n    let pairs = [(1, 2), (3, 4)];\n    println!(\"{:?}\", pairs);\n}\n";
    let result = review(source, Language::Rust);
    assert!(!result.detailed.contains("**Syntax Errors Detected**"));
}

#[test]
fn nested_loops_get_the_nesting_label() {
    let source = "\
for (let i = 0; i < n; i++) {
  for (let j = 0; j < n; j++) {
    for (let k = 0; k < n; k++) {
      sink(i, j, k);
    }
  }
}";
    let result = review(source, Language::JavaScript);
    assert!(result.detailed.contains("O(n^3) (loop nesting)"));
    assert!(result.summary.contains("O(n^3) (loop nesting)"));
}

#[test]
fn recursion_label_beats_loop_nesting() {
    let source = "\
function spin(depth) {
  for (let i = 0; i < depth; i++) {
    for (let j = 0; j < depth; j++) {}
  }
  return spin(depth - 1);
}";
    let result = review(source, Language::JavaScript);
    assert!(result
        .detailed
        .contains("Potentially O(2^n) or O(n) (recursion)"));
    assert!(!result.detailed.contains("loop nesting"));
}

#[test]
fn arity_mismatch_reaches_the_report() {
    let source = "function add(a,b){return a+b;}\nlet total = 0;\ntotal = add(1,2,3);";
    let result = review(source, Language::JavaScript);
    assert!(result.detailed.contains("**Potential Logic Errors**"));
    assert!(result
        .detailed
        .contains("`add` called with 3 arguments, but expected 2."));
}

#[test]
fn type_drift_reaches_the_report() {
    let source = "let x = 5;\nx = \"hi\";";
    let result = review(source, Language::TypeScript);
    assert!(result
        .detailed
        .contains("`x` type changed from `number` to `string`."));
}

#[test]
fn unmatched_opener_yields_exactly_one_bracket_finding() {
    let source = "let value = compute(\n";
    let result = review(source, Language::JavaScript);
    let bracket_mentions = result.detailed.matches("bracket").count();
    assert_eq!(bracket_mentions, 1, "detailed was: {}", result.detailed);
    assert!(result
        .detailed
        .contains("Unclosed opening bracket `(` from line 1."));
}

#[test]
fn no_function_shapes_means_no_unit_tests_section() {
    let source = "SELECT name FROM users WHERE age > 30;";
    let result = review(source, Language::Sql);
    assert!(!result.detailed.contains("### Unit Tests"));
}

#[test]
fn renderer_heading_vocabulary_is_used() {
    let source = "def fetch_user(user_id):\n    return user_id\n";
    let result = review(source, Language::Python);
    assert!(result.detailed.contains("### Time Complexity Analysis"));
    assert!(result.detailed.contains("### Unit Tests"));
}

#[test]
fn non_js_tags_skip_debug_and_logic_checks() {
    let source = "console.log(\"x\");\nlet x = 5;\nx = \"hi\";";
    let result = review(source, Language::Ruby);
    assert!(!result.detailed.contains("console.log` found"));
    assert!(!result.detailed.contains("type changed"));

    let js = review(source, Language::Auto);
    assert!(js.detailed.contains("Debug statement `console.log` found on line 1."));
    assert!(js.detailed.contains("type changed"));
}

#[test]
fn clean_snippet_reports_zero_issues_and_looks_good() {
    let source = "SELECT 1;";
    let result = review(source, Language::Sql);
    assert!(result.summary.contains("0 potential issue(s) found."));
    assert!(result
        .detailed
        .contains("Your code looks good based on this basic offline check."));
}

#[test]
fn review_file_detects_language_from_extension() {
    use std::io::Write;

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("snippet.py");
    let source = "def is_even(number):\n    return number % 2 == 0\n";
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(source.as_bytes()).expect("write file");

    let from_file = deskcheck::review_file(&path).expect("review file");
    let direct = review(source, Language::Python);
    assert_eq!(from_file.summary, direct.summary);
    assert_eq!(from_file.detailed, direct.detailed);
    assert!(from_file.detailed.contains("import unittest"));
}

#[test]
fn large_input_stays_responsive() {
    let mut source = String::new();
    for i in 0..10_000 {
        source.push_str(&format!("let value_{i} = {i};\n"));
    }
    let start = std::time::Instant::now();
    let result = review(&source, Language::JavaScript);
    let elapsed = start.elapsed();
    assert!(result.summary.contains("O(1)"));
    assert!(
        elapsed.as_millis() < 2000,
        "review took {}ms on a 10k-line input",
        elapsed.as_millis()
    );
}
