//! Occupational health exam checker.
//!
//! Ties the risk grading and the report completeness check together for one
//! examinee. The two halves share nothing and can be used on their own
//! through [`ohc_classify`] and [`ohc_compliance`].

pub mod error;
pub mod render;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use ohc_classify::{assess, OverallAssessment};
use ohc_compliance::{validate, ChecklistRecord, ComplianceResult, ComplianceSummary};
use ohc_types::{MeasurementRecord, Sex};
use serde::{Deserialize, Serialize};

pub use error::ReportError;

/// Identification printed at the top of a report. Not used for grading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    pub name: Option<String>,
    pub age: Option<u32>,
}

/// Everything collected for one examinee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamInput {
    pub sex: Sex,
    #[serde(default)]
    pub subject: Subject,
    #[serde(default)]
    pub measurements: MeasurementRecord,
    #[serde(default)]
    pub checklist: ChecklistRecord,
}

impl ExamInput {
    pub fn new(sex: Sex) -> Self {
        Self {
            sex,
            subject: Subject::default(),
            measurements: MeasurementRecord::default(),
            checklist: ChecklistRecord::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamReport {
    pub subject: Subject,
    pub sex: Sex,
    pub assessment: OverallAssessment,
    pub compliance: ComplianceResult,
    pub compliance_summary: ComplianceSummary,
}

/// Grade the measurements and check the report for missing items.
pub fn evaluate_exam(input: &ExamInput) -> ExamReport {
    let assessment = assess(&input.measurements, input.sex);
    let compliance = validate(&input.checklist);
    log::info!(
        "exam evaluated: overall {}, {} checklist items missing",
        assessment.overall_level,
        compliance.missing.len()
    );
    ExamReport {
        subject: input.subject.clone(),
        sex: input.sex,
        compliance_summary: compliance.summary(),
        assessment,
        compliance,
    }
}

pub fn parse_input(text: &str) -> Result<ExamInput, ReportError> {
    Ok(serde_json::from_str(text)?)
}

/// Read input text from `path`, or from stdin when no path is given.
pub fn read_source(path: Option<&Path>) -> Result<String, ReportError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(ReportError::Stdin)?;
            Ok(buf)
        }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
    serde_json::to_string_pretty(value).map_err(ReportError::Serialize)
}
