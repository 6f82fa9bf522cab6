use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::InputError;
use crate::level::RiskLevel;

/// Every quantity or finding the classifier grades, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Bmi,
    Waist,
    BloodPressure,
    FastingGlucose,
    TotalCholesterol,
    Ldl,
    Triglycerides,
    Alt,
    UricAcid,
    Hdl,
    Wbc,
    Hemoglobin,
    Creatinine,
    UrineProtein,
    UrineOccultBlood,
    ChestXray,
}

impl Metric {
    pub const ALL: [Metric; 16] = [
        Metric::Bmi,
        Metric::Waist,
        Metric::BloodPressure,
        Metric::FastingGlucose,
        Metric::TotalCholesterol,
        Metric::Ldl,
        Metric::Triglycerides,
        Metric::Alt,
        Metric::UricAcid,
        Metric::Hdl,
        Metric::Wbc,
        Metric::Hemoglobin,
        Metric::Creatinine,
        Metric::UrineProtein,
        Metric::UrineOccultBlood,
        Metric::ChestXray,
    ];

    /// Display name used in report tables.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Bmi => "BMI",
            Metric::Waist => "Waist Circumference",
            Metric::BloodPressure => "Blood Pressure",
            Metric::FastingGlucose => "Fasting Glucose",
            Metric::TotalCholesterol => "Total Cholesterol",
            Metric::Ldl => "LDL Cholesterol",
            Metric::Triglycerides => "Triglycerides",
            Metric::Alt => "Liver Function (GPT/ALT)",
            Metric::UricAcid => "Uric Acid",
            Metric::Hdl => "HDL Cholesterol",
            Metric::Wbc => "White Blood Cells (WBC)",
            Metric::Hemoglobin => "Hemoglobin (Hb)",
            Metric::Creatinine => "Creatinine (Cr)",
            Metric::UrineProtein => "Urine Protein",
            Metric::UrineOccultBlood => "Urine Occult Blood",
            Metric::ChestXray => "Chest X-ray",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            Metric::Waist => Some("cm"),
            Metric::BloodPressure => Some("mmHg"),
            Metric::FastingGlucose
            | Metric::TotalCholesterol
            | Metric::Ldl
            | Metric::Triglycerides
            | Metric::UricAcid
            | Metric::Hdl
            | Metric::Creatinine => Some("mg/dl"),
            Metric::Alt => Some("U/L"),
            Metric::Wbc => Some("/ul"),
            Metric::Hemoglobin => Some("gm/dl"),
            Metric::Bmi
            | Metric::UrineProtein
            | Metric::UrineOccultBlood
            | Metric::ChestXray => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value shown next to a graded metric.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Number(f64),
    /// Computed quantity, shown with one decimal place.
    Derived(f64),
    Pressure { systolic: f64, diastolic: f64 },
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(v) => write!(f, "{v}"),
            MetricValue::Derived(v) => write!(f, "{v:.1}"),
            MetricValue::Pressure {
                systolic,
                diastolic,
            } => write!(f, "{systolic}/{diastolic}"),
            MetricValue::Text(t) => f.write_str(t),
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Grade for one metric whose inputs were present and valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub metric: Metric,
    pub value: MetricValue,
    pub level: RiskLevel,
    pub reference_range: &'static str,
    pub advice: &'static str,
    pub unit: Option<&'static str>,
}

impl MetricResult {
    pub fn new(
        metric: Metric,
        value: MetricValue,
        level: RiskLevel,
        reference_range: &'static str,
        advice: &'static str,
    ) -> Self {
        Self {
            metric,
            value,
            level,
            reference_range,
            advice,
            unit: metric.unit(),
        }
    }
}

/// A metric left out of the grade because its input could not be read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedInput {
    pub metric: Metric,
    pub error: InputError,
}
