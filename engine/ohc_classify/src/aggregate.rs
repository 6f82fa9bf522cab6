use ohc_types::{MeasurementRecord, MetricResult, RejectedInput, RiskLevel, Sex};
use serde::Serialize;

use crate::classifier::{classify, Classification};

/// Overall grade for one examinee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallAssessment {
    pub results: Vec<MetricResult>,
    /// Never lower than any entry in `results`; 1 when nothing was graded.
    pub overall_level: RiskLevel,
    pub overall_advice: &'static str,
    pub rejected: Vec<RejectedInput>,
}

impl OverallAssessment {
    pub fn follow_up_months(&self) -> Option<u8> {
        self.overall_level.follow_up_months()
    }

    /// Results that set the overall grade, i.e. those at the maximum level.
    pub fn decisive(&self) -> impl Iterator<Item = &MetricResult> {
        let level = self.overall_level;
        self.results
            .iter()
            .filter(move |r| level > RiskLevel::Normal && r.level == level)
    }
}

/// Highest level in `results`, or [`RiskLevel::Normal`] when empty.
pub fn overall_level(results: &[MetricResult]) -> RiskLevel {
    results
        .iter()
        .map(|r| r.level)
        .max()
        .unwrap_or(RiskLevel::Normal)
}

pub fn aggregate(classification: Classification) -> OverallAssessment {
    let Classification { results, rejected } = classification;
    let overall_level = overall_level(&results);
    log::debug!(
        "graded {} metrics ({} rejected), overall {overall_level}",
        results.len(),
        rejected.len()
    );
    OverallAssessment {
        results,
        overall_level,
        overall_advice: overall_level.standard_advice(),
        rejected,
    }
}

/// Classify a record and reduce it to the overall grade.
pub fn assess(record: &MeasurementRecord, sex: Sex) -> OverallAssessment {
    aggregate(classify(record, sex))
}
