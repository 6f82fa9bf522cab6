use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal health-risk grade, 1 (normal) through 4 (severe).
///
/// Ordering follows intervention urgency, so `max` over a set of levels is
/// the overall grade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum RiskLevel {
    #[default]
    Normal = 1,
    Elevated = 2,
    High = 3,
    Severe = 4,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Normal,
        RiskLevel::Elevated,
        RiskLevel::High,
        RiskLevel::Severe,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Standard management advice attached to each grade.
    pub fn standard_advice(self) -> &'static str {
        match self {
            RiskLevel::Normal => "self-managed health maintenance",
            RiskLevel::Elevated => "hygiene guidance, annual follow-up",
            RiskLevel::High => {
                "seek medical evaluation + case management, follow-up within 6 months"
            }
            RiskLevel::Severe => {
                "medication/treatment + case management, follow-up within 3 months"
            }
        }
    }

    /// Months until the next follow-up; level 1 has no scheduled follow-up.
    pub fn follow_up_months(self) -> Option<u8> {
        match self {
            RiskLevel::Normal => None,
            RiskLevel::Elevated => Some(12),
            RiskLevel::High => Some(6),
            RiskLevel::Severe => Some(3),
        }
    }
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> Self {
        level.value()
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RiskLevel::Normal),
            2 => Ok(RiskLevel::Elevated),
            3 => Ok(RiskLevel::High),
            4 => Ok(RiskLevel::Severe),
            other => Err(format!("risk level must be 1-4, got {other}")),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.value())
    }
}
