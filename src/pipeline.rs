use crate::analyzers::{default_analyzers, Analyzer};
use crate::complexity;
use crate::language::Language;
use crate::report::{self, Finding, Review};
use crate::scaffold;

/// Orchestrates the analyzers and assembles their fragments into a
/// review. Each run is a cold pass over the input; nothing is cached or
/// shared between calls.
pub struct Pipeline {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Pipeline {
    pub fn new(analyzers: Vec<Box<dyn Analyzer>>) -> Self {
        Self { analyzers }
    }

    pub fn with_defaults() -> Self {
        Self::new(default_analyzers())
    }

    pub fn run(&self, source: &str, language: Language) -> Review {
        let findings: Vec<Finding> = self
            .analyzers
            .iter()
            .flat_map(|a| a.analyze(source, language))
            .collect();

        let complexity = complexity::estimate(source);
        let scaffold = scaffold::generate(source, language);

        report::assemble(&findings, &complexity, scaffold.as_deref())
    }
}
