//! Run-level aggregation of per-category results

use serde::Serialize;

use crate::category::Category;
use crate::evaluate::ComplianceResult;

pub const SUCCESS_MESSAGE: &str =
    "Congratulations! All checked elements meet the thermal performance requirements.";

/// Evaluation summary for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    /// Number of elements of this category that were checked
    pub total: usize,
    pub failures: Vec<ComplianceResult>,
}

impl CategoryReport {
    pub fn from_results(category: Category, results: Vec<ComplianceResult>) -> Self {
        let total = results.len();
        let failures = results.into_iter().filter(|r| !r.passed).collect();
        Self {
            category,
            total,
            failures,
        }
    }

    pub fn empty(category: Category) -> Self {
        Self {
            category,
            total: 0,
            failures: Vec::new(),
        }
    }

    pub fn summary_line(&self) -> String {
        if self.total == 0 {
            format!("{}: there are no elements of this category", self.category)
        } else {
            format!(
                "{}: {}/{} elements failed",
                self.category,
                self.failures.len(),
                self.total
            )
        }
    }
}

/// Final artifact of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    pub passed: bool,
    pub message: String,
    pub failures: Vec<ComplianceResult>,
}

/// Combine category reports into the run outcome
///
/// Only categories listed in `enabled` contribute, in that order. An enabled
/// category without a report counts as having no elements.
pub fn aggregate(reports: &[CategoryReport], enabled: &[Category]) -> RunOutcome {
    let mut lines = Vec::new();
    let mut failures = Vec::new();

    for &category in enabled {
        match reports.iter().find(|r| r.category == category) {
            Some(report) => {
                lines.push(report.summary_line());
                failures.extend(report.failures.iter().cloned());
            }
            None => lines.push(CategoryReport::empty(category).summary_line()),
        }
    }

    if failures.is_empty() {
        RunOutcome {
            passed: true,
            message: SUCCESS_MESSAGE.to_string(),
            failures,
        }
    } else {
        RunOutcome {
            passed: false,
            message: lines.join("\n"),
            failures,
        }
    }
}
