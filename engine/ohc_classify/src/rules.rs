//! Regulatory threshold tables, one per graded metric.
//!
//! Tiers are listed most severe first. Limits follow the grading sheet used
//! for pre-employment exams; sex-specific tables are kept side by side so
//! each metric still has a single definition.

use ohc_types::{Metric, RiskLevel, SexDependent};

use crate::table::{Bound, Ladder, PressureLadder, PressureTier, Tier};

use Bound::{Above, AtLeast, Below};
use RiskLevel::{Elevated, High, Severe};

/// A metric graded from one numeric reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarRule {
    pub metric: Metric,
    /// Input key in the measurement record.
    pub field: &'static str,
    pub reference: SexDependent<&'static str>,
    pub ladder: SexDependent<Ladder>,
}

pub const BMI_REFERENCE: &str = "18.5-24";

pub static BMI: Ladder = Ladder {
    tiers: &[
        Tier::labelled(AtLeast(30.0), Severe, "moderate obesity"),
        Tier::labelled(AtLeast(27.0), High, "mild obesity"),
        Tier::labelled(AtLeast(24.1), Elevated, "overweight"),
    ],
    baseline: None,
};

pub const BLOOD_PRESSURE_REFERENCE: &str = "SBP<120, DBP<80";

pub static BLOOD_PRESSURE: PressureLadder = PressureLadder {
    tiers: &[
        PressureTier {
            systolic: 180.0,
            diastolic: 110.0,
            level: Severe,
            label: "stage 3 hypertension (danger)",
        },
        PressureTier {
            systolic: 160.0,
            diastolic: 100.0,
            level: Severe,
            label: "stage 2 hypertension",
        },
        PressureTier {
            systolic: 140.0,
            diastolic: 90.0,
            level: High,
            label: "stage 1 hypertension",
        },
        PressureTier {
            systolic: 120.0,
            diastolic: 80.0,
            level: Elevated,
            label: "prehypertension",
        },
    ],
    baseline: "normal",
};

pub static WAIST: ScalarRule = ScalarRule {
    metric: Metric::Waist,
    field: "waist",
    reference: SexDependent {
        male: "<90",
        female: "<80",
    },
    ladder: SexDependent {
        male: Ladder {
            tiers: &[Tier::labelled(
                AtLeast(90.0),
                Elevated,
                "abdominal obesity, control diet and exercise",
            )],
            baseline: Some("normal"),
        },
        female: Ladder {
            tiers: &[Tier::labelled(
                AtLeast(80.0),
                Elevated,
                "abdominal obesity, control diet and exercise",
            )],
            baseline: Some("normal"),
        },
    },
};

pub static FASTING_GLUCOSE: ScalarRule = ScalarRule {
    metric: Metric::FastingGlucose,
    field: "sugar_ac",
    reference: SexDependent {
        male: "74-109",
        female: "74-109",
    },
    ladder: SexDependent {
        male: GLUCOSE_LADDER,
        female: GLUCOSE_LADDER,
    },
};

const GLUCOSE_LADDER: Ladder = Ladder {
    tiers: &[
        Tier::new(AtLeast(240.0), Severe),
        Tier::new(AtLeast(126.0), High),
        Tier::new(AtLeast(100.0), Elevated),
    ],
    baseline: None,
};

pub static TOTAL_CHOLESTEROL: ScalarRule = ScalarRule {
    metric: Metric::TotalCholesterol,
    field: "cholesterol",
    reference: SexDependent {
        male: "<200",
        female: "<200",
    },
    ladder: SexDependent {
        male: CHOLESTEROL_LADDER,
        female: CHOLESTEROL_LADDER,
    },
};

// 200 itself is still desirable, hence the strict bound on the lowest tier.
const CHOLESTEROL_LADDER: Ladder = Ladder {
    tiers: &[
        Tier::new(AtLeast(300.0), Severe),
        Tier::new(AtLeast(240.0), High),
        Tier::new(Above(200.0), Elevated),
    ],
    baseline: None,
};

pub static LDL: ScalarRule = ScalarRule {
    metric: Metric::Ldl,
    field: "ldl",
    reference: SexDependent {
        male: "<100",
        female: "<100",
    },
    ladder: SexDependent {
        male: LDL_LADDER,
        female: LDL_LADDER,
    },
};

const LDL_LADDER: Ladder = Ladder {
    tiers: &[
        Tier::new(AtLeast(200.0), Severe),
        Tier::new(AtLeast(190.0), High),
        Tier::new(AtLeast(140.0), Elevated),
    ],
    baseline: None,
};

pub static TRIGLYCERIDES: ScalarRule = ScalarRule {
    metric: Metric::Triglycerides,
    field: "tg",
    reference: SexDependent {
        male: "<150",
        female: "<150",
    },
    ladder: SexDependent {
        male: TG_LADDER,
        female: TG_LADDER,
    },
};

const TG_LADDER: Ladder = Ladder {
    tiers: &[
        Tier::new(AtLeast(501.0), Severe),
        Tier::new(AtLeast(301.0), High),
        Tier::new(AtLeast(151.0), Elevated),
    ],
    baseline: None,
};

pub static ALT: ScalarRule = ScalarRule {
    metric: Metric::Alt,
    field: "alt",
    reference: SexDependent {
        male: "0-41",
        female: "0-31",
    },
    ladder: SexDependent {
        male: ALT_LADDER,
        female: ALT_LADDER,
    },
};

const ALT_LADDER: Ladder = Ladder {
    tiers: &[
        Tier::new(AtLeast(101.0), Severe),
        Tier::new(AtLeast(80.0), High),
        Tier::new(AtLeast(41.0), Elevated),
    ],
    baseline: None,
};

pub static URIC_ACID: ScalarRule = ScalarRule {
    metric: Metric::UricAcid,
    field: "uric_acid",
    reference: SexDependent {
        male: "<7",
        female: "<7",
    },
    ladder: SexDependent {
        male: URIC_ACID_LADDER,
        female: URIC_ACID_LADDER,
    },
};

const URIC_ACID_LADDER: Ladder = Ladder {
    tiers: &[
        Tier::new(Above(10.0), Severe),
        Tier::new(AtLeast(8.0), High),
        Tier::new(AtLeast(7.0), Elevated),
    ],
    baseline: None,
};

// HDL is protective, so only a low reading is flagged.
pub static HDL: ScalarRule = ScalarRule {
    metric: Metric::Hdl,
    field: "hdl",
    reference: SexDependent {
        male: ">40",
        female: ">50",
    },
    ladder: SexDependent {
        male: Ladder {
            tiers: &[Tier::labelled(
                Below(40.0),
                Elevated,
                "low, exercise recommended",
            )],
            baseline: Some("normal"),
        },
        female: Ladder {
            tiers: &[Tier::labelled(
                Below(50.0),
                Elevated,
                "low, exercise recommended",
            )],
            baseline: Some("normal"),
        },
    },
};

pub static WBC: ScalarRule = ScalarRule {
    metric: Metric::Wbc,
    field: "wbc",
    reference: SexDependent {
        male: "4800-10800",
        female: "4800-10800",
    },
    ladder: SexDependent {
        male: WBC_LADDER,
        female: WBC_LADDER,
    },
};

// Two-sided: a reading can only leave the 4800-10800 band in one direction.
const WBC_LADDER: Ladder = Ladder {
    tiers: &[
        Tier::labelled(Above(15100.0), Severe, "infection/inflammation risk"),
        Tier::labelled(Below(2100.0), Severe, "reduced resistance"),
        Tier::labelled(Above(13000.0), High, "infection/inflammation risk"),
        Tier::labelled(Below(3500.0), High, "reduced resistance"),
        Tier::labelled(Above(10800.0), Elevated, "infection/inflammation risk"),
        Tier::labelled(Below(4800.0), Elevated, "reduced resistance"),
    ],
    baseline: None,
};

pub static HEMOGLOBIN: ScalarRule = ScalarRule {
    metric: Metric::Hemoglobin,
    field: "hb",
    reference: SexDependent {
        male: "13-18",
        female: "11-16",
    },
    ladder: SexDependent {
        male: Ladder {
            tiers: &[
                Tier::new(Below(9.0), Severe),
                Tier::new(Below(11.0), High),
                Tier::new(Below(13.0), Elevated),
            ],
            baseline: None,
        },
        female: Ladder {
            tiers: &[
                Tier::new(Below(7.0), Severe),
                Tier::new(Below(9.0), High),
                Tier::new(Below(11.0), Elevated),
            ],
            baseline: None,
        },
    },
};

pub static CREATININE: ScalarRule = ScalarRule {
    metric: Metric::Creatinine,
    field: "creatinine",
    reference: SexDependent {
        male: "0.7-1.2",
        female: "0.5-0.9",
    },
    ladder: SexDependent {
        male: CREATININE_LADDER,
        female: CREATININE_LADDER,
    },
};

const CREATININE_LADDER: Ladder = Ladder {
    tiers: &[
        Tier::new(Above(2.0), Severe),
        Tier::new(AtLeast(1.4), High),
        Tier::new(AtLeast(1.3), Elevated),
    ],
    baseline: None,
};

/// Single-reading lab rules in report order, between blood pressure and the
/// urine tests.
pub static LAB_RULES: [&ScalarRule; 10] = [
    &FASTING_GLUCOSE,
    &TOTAL_CHOLESTEROL,
    &LDL,
    &TRIGLYCERIDES,
    &ALT,
    &URIC_ACID,
    &HDL,
    &WBC,
    &HEMOGLOBIN,
    &CREATININE,
];

pub const URINE_REFERENCE: &str = "-";
pub const XRAY_REFERENCE: &str = "normal";
