use ohc_classify::assess;
use ohc_types::{MeasurementRecord, Metric, RiskLevel, Sex};
use pretty_assertions::assert_eq;

use crate::init_logger;

fn level(record: MeasurementRecord, sex: Sex, metric: Metric) -> Option<u8> {
    assess(&record, sex)
        .results
        .iter()
        .find(|r| r.metric == metric)
        .map(|r| r.level.value())
}

fn single(key: &str, value: &str, metric: Metric) -> Option<u8> {
    level(MeasurementRecord::new().with(key, value), Sex::Male, metric)
}

#[test]
fn bmi_boundaries_at_170cm() {
    init_logger();
    let bmi = |weight: &str| {
        level(
            MeasurementRecord::new()
                .with("height", "170")
                .with("weight", weight),
            Sex::Female,
            Metric::Bmi,
        )
    };
    assert_eq!(bmi("86.7"), Some(4));
    assert_eq!(bmi("78"), Some(3));
    assert_eq!(bmi("69.7"), Some(2));
    // 24.08 prints as 24.1 and is graded as printed.
    assert_eq!(bmi("69.6"), Some(2));
    assert_eq!(bmi("69.5"), Some(1));
}

#[test]
fn blood_pressure_worse_reading_decides() {
    init_logger();
    let bp = |sbp: &str, dbp: &str| {
        level(
            MeasurementRecord::new().with("sbp", sbp).with("dbp", dbp),
            Sex::Male,
            Metric::BloodPressure,
        )
    };
    assert_eq!(bp("179", "90"), Some(4));
    assert_eq!(bp("159", "90"), Some(3));
    assert_eq!(bp("139", "90"), Some(3));
    assert_eq!(bp("180", "70"), Some(4));
    assert_eq!(bp("118", "100"), Some(4));
    assert_eq!(bp("119", "79"), Some(1));
    assert_eq!(bp("120", ""), None);
}

#[test]
fn wbc_band_in_both_directions() {
    init_logger();
    let cases = [
        ("10900", 2),
        ("13100", 3),
        ("15200", 4),
        ("4700", 2),
        ("2000", 4),
        ("7000", 1),
        ("10800", 1),
        ("4800", 1),
    ];
    for (raw, expected) in cases {
        assert_eq!(single("wbc", raw, Metric::Wbc), Some(expected), "wbc {raw}");
    }
}

#[test]
fn urine_grades() {
    init_logger();
    let assessment = assess(
        &MeasurementRecord::new()
            .with("urine_protein", "3+")
            .with("urine_blood", "normal"),
        Sex::Female,
    );
    let protein = &assessment.results[0];
    assert_eq!(protein.metric, Metric::UrineProtein);
    assert_eq!(protein.level, RiskLevel::High);
    let blood = &assessment.results[1];
    assert_eq!(blood.level, RiskLevel::Normal);
    assert_eq!(blood.value.to_string(), "negative (-)");
    assert_eq!(single("urine_protein", "4+", Metric::UrineProtein), Some(4));
}

#[test]
fn hemoglobin_and_alt_depend_on_sex() {
    init_logger();
    let hb = MeasurementRecord::new().with("hb", "10");
    assert_eq!(level(hb.clone(), Sex::Male, Metric::Hemoglobin), Some(3));
    assert_eq!(level(hb, Sex::Female, Metric::Hemoglobin), Some(2));

    let alt = MeasurementRecord::new().with("alt", "35");
    let male = assess(&alt, Sex::Male);
    let female = assess(&alt, Sex::Female);
    assert_eq!(male.results[0].reference_range, "0-41");
    assert_eq!(female.results[0].reference_range, "0-31");
    assert_eq!(male.results[0].level, female.results[0].level);
}

#[test]
fn cholesterol_lowest_tier_is_strict() {
    init_logger();
    assert_eq!(single("cholesterol", "200", Metric::TotalCholesterol), Some(1));
    assert_eq!(single("cholesterol", "201", Metric::TotalCholesterol), Some(2));
    assert_eq!(single("uric_acid", "10", Metric::UricAcid), Some(3));
    assert_eq!(single("uric_acid", "10.1", Metric::UricAcid), Some(4));
}

#[test]
fn invalid_reading_is_isolated() {
    init_logger();
    let assessment = assess(
        &MeasurementRecord::new()
            .with("sugar_ac", "high")
            .with("tg", "600"),
        Sex::Male,
    );
    assert_eq!(assessment.results.len(), 1);
    assert_eq!(assessment.results[0].metric, Metric::Triglycerides);
    assert_eq!(assessment.overall_level, RiskLevel::Severe);
    assert_eq!(assessment.rejected.len(), 1);
    assert_eq!(assessment.rejected[0].metric, Metric::FastingGlucose);
}
