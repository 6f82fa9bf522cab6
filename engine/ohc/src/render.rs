//! Plain-text rendering of reports for the terminal.

use std::fmt::Write;

use ohc_classify::OverallAssessment;
use ohc_compliance::{catalog, Category, ComplianceResult};
use ohc_types::MetricResult;

use crate::{ExamReport, Subject};

const RULE: &str =
    "--------------------------------------------------------------------------------";

fn value_cell(result: &MetricResult) -> String {
    match result.unit {
        Some(unit) => format!("{} {}", result.value, unit),
        None => result.value.to_string(),
    }
}

fn subject_line(subject: &Subject, sex: &str) -> String {
    let name = subject.name.as_deref().unwrap_or("(unnamed)");
    match subject.age {
        Some(age) => format!("Examinee: {name} ({sex}, age {age})"),
        None => format!("Examinee: {name} ({sex})"),
    }
}

pub fn render_assessment(assessment: &OverallAssessment) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Health risk grading");
    let _ = writeln!(out, "{RULE}");
    if assessment.results.is_empty() {
        let _ = writeln!(out, "  no measurements were graded");
    } else {
        let _ = writeln!(
            out,
            "  {:<26} {:<16} {:<16} {:<6} Advice",
            "Item", "Value", "Reference", "Level"
        );
        for result in &assessment.results {
            let _ = writeln!(
                out,
                "  {:<26} {:<16} {:<16} {:<6} {}",
                result.metric.name(),
                value_cell(result),
                result.reference_range,
                result.level.value(),
                result.advice
            );
        }
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Overall: {} - {}",
        assessment.overall_level, assessment.overall_advice
    );
    let decisive: Vec<&str> = assessment.decisive().map(|r| r.metric.name()).collect();
    if !decisive.is_empty() {
        let _ = writeln!(out, "  driven by: {}", decisive.join(", "));
    }
    if !assessment.rejected.is_empty() {
        let _ = writeln!(out, "Not graded (invalid input):");
        for rejected in &assessment.rejected {
            let _ = writeln!(out, "  {}: {}", rejected.metric.name(), rejected.error);
        }
    }
    out
}

pub fn render_compliance(compliance: &ComplianceResult) -> String {
    let mut out = String::new();
    let summary = compliance.summary();
    let _ = writeln!(
        out,
        "Report completeness: {}/{} items present",
        summary.passed, summary.total
    );
    if compliance.is_compliant() {
        let _ = writeln!(out, "  fully compliant, all mandatory items present");
        return out;
    }
    for (category, items) in compliance.by_category() {
        let _ = writeln!(out, "  {}", category.name());
        for item in items {
            let _ = writeln!(out, "    MISSING  {:<44} {}", item.label, item.remedy);
        }
    }
    out
}

pub fn render_report(report: &ExamReport) -> String {
    let mut out = subject_line(&report.subject, report.sex.as_str());
    out.push_str("\n\n");
    out.push_str(&render_assessment(&report.assessment));
    out.push('\n');
    out.push_str(&render_compliance(&report.compliance));
    out
}

pub fn render_catalog() -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let _ = writeln!(out, "{}", category.name());
        for item in category.items() {
            let _ = write!(out, "  {:<22} {}", item.key, item.label);
            if let Some(url) = item.reference_url {
                let _ = write!(out, " <{url}>");
            }
            out.push('\n');
        }
    }
    let _ = writeln!(out, "{} items", catalog().len());
    out
}
