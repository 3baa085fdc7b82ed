pub mod analyzers;
pub mod complexity;
pub mod language;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod scaffold;

use std::path::Path;

pub use language::Language;
pub use report::Review;

use pipeline::Pipeline;

/// Review a source snippet under the given language tag.
pub fn review(source: &str, language: Language) -> Review {
    let pipeline = Pipeline::with_defaults();
    pipeline.run(source, language)
}

/// Review a file at the given path, detecting the language tag from the
/// file extension (falling back to auto).
pub fn review_file(path: &Path) -> std::io::Result<Review> {
    let source = std::fs::read_to_string(path)?;
    let language = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
        .unwrap_or(Language::Auto);
    let pipeline = Pipeline::with_defaults();
    Ok(pipeline.run(&source, language))
}
