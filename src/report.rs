use serde::{Deserialize, Serialize};

/// The analyzer family a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingCategory {
    Syntax,
    Static,
    Logic,
}

impl FindingCategory {
    /// Fixed report order of the finding groups.
    pub fn all() -> &'static [FindingCategory] {
        &[
            FindingCategory::Syntax,
            FindingCategory::Static,
            FindingCategory::Logic,
        ]
    }

    /// Bold title leading this category's group in the detailed report.
    pub fn group_title(&self) -> &'static str {
        match self {
            FindingCategory::Syntax => "**Syntax Errors Detected**",
            FindingCategory::Static => "**Static Issues Found**",
            FindingCategory::Logic => "**Potential Logic Errors**",
        }
    }
}

/// A single line-anchored heuristic observation.
///
/// `message` carries the full sentence, line reference included, in the
/// prose style of the analyzer that produced it; `line` repeats the
/// 1-based anchor for structured consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub message: String,
    pub line: usize,
    pub category: FindingCategory,
}

impl Finding {
    pub fn new(message: impl Into<String>, line: usize, category: FindingCategory) -> Self {
        Self {
            message: message.into(),
            line,
            category,
        }
    }
}

/// Free-text complexity classification labels. These are coarse guesses,
/// not computed complexity classes; the space label is a fixed
/// disclaimer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityEstimate {
    pub time_label: String,
    pub space_label: String,
}

impl ComplexityEstimate {
    pub fn markdown(&self) -> String {
        format!(
            "- **Time Complexity:** {}\n- **Space Complexity:** {}",
            self.time_label, self.space_label
        )
    }
}

/// The review for a single source input: a short summary and a long
/// structured markdown body. Constructed once per call, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub summary: String,
    pub detailed: String,
}

/// Merge analyzer fragments into the final review.
///
/// Section order is fixed: preamble, identified issues (grouped per
/// analyzer family, non-empty groups only), time complexity, unit-test
/// scaffold. The issue count in the summary is the number of non-empty
/// groups, not the number of findings.
pub fn assemble(
    findings: &[Finding],
    complexity: &ComplexityEstimate,
    scaffold: Option<&str>,
) -> Review {
    let groups: Vec<String> = FindingCategory::all()
        .iter()
        .filter_map(|category| {
            let items: Vec<&Finding> = findings
                .iter()
                .filter(|f| f.category == *category)
                .collect();
            if items.is_empty() {
                return None;
            }
            let mut group = String::from(category.group_title());
            for finding in items {
                group.push_str("\n- ");
                group.push_str(&finding.message);
            }
            Some(group)
        })
        .collect();
    let issues_found = groups.len();

    let mut detailed = String::from(
        "### Offline Analysis\nThis is a basic analysis performed while offline. \
         For a comprehensive review, please connect to the internet.\n\n",
    );

    if issues_found > 0 {
        detailed.push_str(&format!("### Identified Issues\n{}\n", groups.join("\n\n")));
    }

    detailed.push_str(&format!(
        "### Time Complexity Analysis\n{}\n",
        complexity.markdown()
    ));

    if let Some(scaffold) = scaffold {
        detailed.push_str(scaffold);
    }

    if issues_found == 0 && scaffold.is_none() {
        detailed.push_str("\nYour code looks good based on this basic offline check.");
    }

    let mut summary =
        String::from("📝 **Code Purpose:** An offline analysis was performed on this snippet.\n");
    summary.push_str(&format!(
        "- 🐞 **Critical Issues:** {issues_found} potential issue(s) found.\n"
    ));
    summary.push_str(&format!("- ⏳ **Complexity:** {}", complexity.time_label));

    Review { summary, detailed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate() -> ComplexityEstimate {
        ComplexityEstimate {
            time_label: "O(1)".into(),
            space_label: "Hard to estimate offline; depends on input size.".into(),
        }
    }

    #[test]
    fn clean_input_gets_the_looks_good_line() {
        let review = assemble(&[], &estimate(), None);
        assert!(review
            .detailed
            .ends_with("Your code looks good based on this basic offline check."));
        assert!(review.summary.contains("0 potential issue(s) found"));
    }

    #[test]
    fn issue_count_is_per_group_not_per_finding() {
        let findings = vec![
            Finding::new(
                "Unmatched closing bracket `)` on line 1.",
                1,
                FindingCategory::Syntax,
            ),
            Finding::new(
                "Unmatched closing bracket `]` on line 2.",
                2,
                FindingCategory::Syntax,
            ),
            Finding::new("TODO comment found on line 3.", 3, FindingCategory::Static),
        ];
        let review = assemble(&findings, &estimate(), None);
        assert!(review.summary.contains("2 potential issue(s) found"));
        assert!(review.detailed.contains("### Identified Issues"));
        assert!(review.detailed.contains("**Syntax Errors Detected**"));
        assert!(review.detailed.contains("**Static Issues Found**"));
        assert!(!review.detailed.contains("**Potential Logic Errors**"));
    }

    #[test]
    fn groups_keep_fixed_order() {
        let findings = vec![
            Finding::new(
                "Line 2: `f` called with 1 arguments, but expected 2.",
                2,
                FindingCategory::Logic,
            ),
            Finding::new(
                "Line 1 is longer than 120 characters.",
                1,
                FindingCategory::Static,
            ),
        ];
        let review = assemble(&findings, &estimate(), None);
        let static_pos = review.detailed.find("**Static Issues Found**").unwrap();
        let logic_pos = review.detailed.find("**Potential Logic Errors**").unwrap();
        assert!(static_pos < logic_pos);
    }

    #[test]
    fn scaffold_suppresses_looks_good_line() {
        let review = assemble(&[], &estimate(), Some("### Unit Tests\nstub"));
        assert!(review.detailed.contains("### Unit Tests"));
        assert!(!review.detailed.contains("looks good"));
    }

    #[test]
    fn summary_ends_with_time_label() {
        let review = assemble(&[], &estimate(), None);
        assert!(review.summary.ends_with("O(1)"));
    }
}
