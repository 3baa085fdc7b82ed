pub mod brackets;
pub mod static_issues;
pub mod type_inference;

use crate::language::Language;
use crate::report::Finding;

/// Trait for all finding-producing analyzers.
pub trait Analyzer: Send + Sync {
    /// A short name identifying this analyzer.
    fn name(&self) -> &str;

    /// Analyze the given source code and return findings.
    fn analyze(&self, source: &str, language: Language) -> Vec<Finding>;
}

/// Returns the default set of analyzers, in report group order.
pub fn default_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(brackets::BracketScanner),
        Box::new(static_issues::StaticIssueScanner),
        Box::new(type_inference::TypeInferenceEngine),
    ]
}
