use ohc_types::{
    parse_reading, present, InputError, MeasurementRecord, Metric, MetricResult, MetricValue,
    RejectedInput, RiskLevel, Sex, UrineGrade, XrayFinding,
};
use serde::Serialize;

use crate::rules::{self, ScalarRule};

/// Per-metric grades for one record, before aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Classification {
    pub results: Vec<MetricResult>,
    pub rejected: Vec<RejectedInput>,
}

impl Classification {
    fn record(&mut self, metric: Metric, outcome: Result<Option<MetricResult>, InputError>) {
        match outcome {
            Ok(Some(result)) => {
                log::debug!(
                    "{}: {} -> {}",
                    metric.name(),
                    result.value,
                    result.level
                );
                self.results.push(result);
            }
            Ok(None) => log::trace!("{}: not measured", metric.name()),
            Err(error) => {
                log::warn!("{} excluded from grading: {error}", metric.name());
                self.rejected.push(RejectedInput { metric, error });
            }
        }
    }

    pub fn level_of(&self, metric: Metric) -> Option<RiskLevel> {
        self.results
            .iter()
            .find(|r| r.metric == metric)
            .map(|r| r.level)
    }
}

/// Grade every metric whose inputs are present.
///
/// Each metric is evaluated on its own: a blank field yields no result and
/// an unreadable one is listed in [`Classification::rejected`] without
/// affecting the others.
pub fn classify(record: &MeasurementRecord, sex: Sex) -> Classification {
    let mut out = Classification::default();

    out.record(Metric::Bmi, bmi(record));
    out.record(Metric::Waist, scalar(&rules::WAIST, record.waist.as_deref(), sex));
    out.record(Metric::BloodPressure, blood_pressure(record));
    for rule in rules::LAB_RULES {
        out.record(rule.metric, scalar(rule, record.get(rule.field), sex));
    }
    out.record(
        Metric::UrineProtein,
        urine(Metric::UrineProtein, "urine_protein", record.urine_protein.as_deref()),
    );
    out.record(
        Metric::UrineOccultBlood,
        urine(Metric::UrineOccultBlood, "urine_blood", record.urine_blood.as_deref()),
    );
    out.record(Metric::ChestXray, chest_xray(record));

    out
}

fn scalar(
    rule: &ScalarRule,
    raw: Option<&str>,
    sex: Sex,
) -> Result<Option<MetricResult>, InputError> {
    let Some(value) = parse_reading(rule.field, raw)? else {
        return Ok(None);
    };
    let grade = rule.ladder.pick(sex).grade(value);
    Ok(Some(MetricResult::new(
        rule.metric,
        MetricValue::Number(value),
        grade.level,
        rule.reference.pick(sex),
        grade.advice,
    )))
}

/// BMI needs both height (cm) and weight (kg). The value is rounded to one
/// decimal before grading, so the grade always agrees with the printed value.
fn bmi(record: &MeasurementRecord) -> Result<Option<MetricResult>, InputError> {
    let (Some(height), Some(weight)) = (
        present(record.height.as_deref()),
        present(record.weight.as_deref()),
    ) else {
        return Ok(None);
    };
    let (Some(height_cm), Some(weight_kg)) = (
        parse_reading("height", Some(height))?,
        parse_reading("weight", Some(weight))?,
    ) else {
        return Ok(None);
    };
    if height_cm <= 0.0 {
        return Err(InputError::NonPositiveHeight {
            raw: height_cm.to_string(),
        });
    }
    let height_m = height_cm / 100.0;
    let bmi = (weight_kg / (height_m * height_m) * 10.0).round() / 10.0;
    let grade = rules::BMI.grade(bmi);
    Ok(Some(MetricResult::new(
        Metric::Bmi,
        MetricValue::Derived(bmi),
        grade.level,
        rules::BMI_REFERENCE,
        grade.advice,
    )))
}

fn blood_pressure(record: &MeasurementRecord) -> Result<Option<MetricResult>, InputError> {
    let (Some(sbp), Some(dbp)) = (
        present(record.sbp.as_deref()),
        present(record.dbp.as_deref()),
    ) else {
        return Ok(None);
    };
    let (Some(systolic), Some(diastolic)) = (
        parse_reading("sbp", Some(sbp))?,
        parse_reading("dbp", Some(dbp))?,
    ) else {
        return Ok(None);
    };
    let grade = rules::BLOOD_PRESSURE.grade(systolic, diastolic);
    Ok(Some(MetricResult::new(
        Metric::BloodPressure,
        MetricValue::Pressure {
            systolic,
            diastolic,
        },
        grade.level,
        rules::BLOOD_PRESSURE_REFERENCE,
        grade.advice,
    )))
}

fn urine_level(grade: UrineGrade) -> RiskLevel {
    match grade {
        UrineGrade::Negative => RiskLevel::Normal,
        UrineGrade::OnePlus => RiskLevel::Elevated,
        UrineGrade::TwoPlus | UrineGrade::ThreePlus => RiskLevel::High,
        UrineGrade::FourPlus => RiskLevel::Severe,
    }
}

fn urine(
    metric: Metric,
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<MetricResult>, InputError> {
    let Some(token) = present(raw) else {
        return Ok(None);
    };
    let grade = UrineGrade::parse(field, token)?;
    let level = urine_level(grade);
    Ok(Some(MetricResult::new(
        metric,
        MetricValue::Text(grade.label().to_string()),
        level,
        rules::URINE_REFERENCE,
        level.standard_advice(),
    )))
}

const URGENT_REFERRAL: &str = "refer to physician immediately";

fn xray_grade(finding: &XrayFinding) -> (RiskLevel, &'static str) {
    match finding {
        XrayFinding::Normal | XrayFinding::Calcified | XrayFinding::Scoliosis => {
            (RiskLevel::Normal, RiskLevel::Normal.standard_advice())
        }
        XrayFinding::LargeNodule | XrayFinding::SuspectedTuberculosis => {
            (RiskLevel::Severe, URGENT_REFERRAL)
        }
        XrayFinding::Other(_) => (RiskLevel::Elevated, "confirm whether follow-up is needed"),
    }
}

fn chest_xray(record: &MeasurementRecord) -> Result<Option<MetricResult>, InputError> {
    let Some(token) = present(record.xray_result.as_deref()) else {
        return Ok(None);
    };
    let finding = XrayFinding::parse(token, record.xray_other.as_deref())?;
    let (level, advice) = xray_grade(&finding);
    Ok(Some(MetricResult::new(
        Metric::ChestXray,
        MetricValue::Text(finding.description()),
        level,
        rules::XRAY_REFERENCE,
        advice,
    )))
}
