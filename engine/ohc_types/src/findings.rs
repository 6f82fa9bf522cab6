//! Categorical exam findings.
//!
//! The form offers a closed set of choices for the urine dipstick and the
//! chest X-ray; anything outside that set is rejected at parse time.

use std::fmt;

use serde::Serialize;

use crate::error::InputError;

/// Semi-quantitative dipstick grade, shared by urine protein and urine
/// occult blood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrineGrade {
    /// Negative or trace (+/-).
    Negative,
    OnePlus,
    TwoPlus,
    ThreePlus,
    FourPlus,
}

impl UrineGrade {
    pub fn label(self) -> &'static str {
        match self {
            UrineGrade::Negative => "negative (-)",
            UrineGrade::OnePlus => "1+",
            UrineGrade::TwoPlus => "2+",
            UrineGrade::ThreePlus => "3+",
            UrineGrade::FourPlus => "4+",
        }
    }

    pub fn parse(field: &'static str, raw: &str) -> Result<Self, InputError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "normal" | "negative" | "-" | "+/-" | "trace" => Ok(UrineGrade::Negative),
            "1+" => Ok(UrineGrade::OnePlus),
            "2+" => Ok(UrineGrade::TwoPlus),
            "3+" => Ok(UrineGrade::ThreePlus),
            "4+" => Ok(UrineGrade::FourPlus),
            _ => Err(InputError::UnknownToken {
                field,
                raw: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for UrineGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chest X-ray reading as selected on the form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum XrayFinding {
    Normal,
    Calcified,
    Scoliosis,
    /// Pulmonary nodule larger than 1 cm.
    LargeNodule,
    /// Suspected infiltration or tuberculosis.
    SuspectedTuberculosis,
    /// Free-text finding; `None` when the examiner left the note blank.
    Other(Option<String>),
}

impl XrayFinding {
    /// Parse the finding token, attaching `note` to [`XrayFinding::Other`].
    pub fn parse(raw: &str, note: Option<&str>) -> Result<Self, InputError> {
        let finding = match raw.trim().to_ascii_lowercase().as_str() {
            "normal" => XrayFinding::Normal,
            "calcified" | "calcification" => XrayFinding::Calcified,
            "scoliosis" => XrayFinding::Scoliosis,
            "nodule_large" | "nodule>1cm" => XrayFinding::LargeNodule,
            "tb_suspect" | "suspected_tb" => XrayFinding::SuspectedTuberculosis,
            "other" => XrayFinding::Other(
                note.map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string),
            ),
            _ => {
                return Err(InputError::UnknownToken {
                    field: "xray_result",
                    raw: raw.to_string(),
                })
            }
        };
        Ok(finding)
    }

    /// Text shown in the value column of the report.
    pub fn description(&self) -> String {
        match self {
            XrayFinding::Normal => "normal / no significant findings".to_string(),
            XrayFinding::Calcified => "calcification".to_string(),
            XrayFinding::Scoliosis => "scoliosis".to_string(),
            XrayFinding::LargeNodule => "pulmonary nodule > 1cm".to_string(),
            XrayFinding::SuspectedTuberculosis => {
                "suspected infiltration / tuberculosis".to_string()
            }
            XrayFinding::Other(Some(note)) => format!("other: {note}"),
            XrayFinding::Other(None) => "other (no description given)".to_string(),
        }
    }
}
