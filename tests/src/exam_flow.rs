use ohc::{evaluate_exam, parse_input, ExamInput};
use ohc_compliance::{catalog, validate, ChecklistRecord};
use ohc_types::{RiskLevel, Sex};
use pretty_assertions::assert_eq;

use crate::init_logger;

const EXAM: &str = r#"{
    "sex": "male",
    "subject": {"name": "Wang", "age": 52},
    "measurements": {
        "height": 172, "weight": 75, "waist": "94",
        "sbp": "136", "dbp": "88",
        "sugar_ac": "131", "cholesterol": "215", "ldl": "150", "hdl": "38",
        "tg": "180", "alt": "45", "uric_acid": "7.4",
        "wbc": "6200", "hb": "14.5", "creatinine": "1.1",
        "urine_protein": "1+", "urine_blood": "normal",
        "xray_result": "other", "xray_other": "old fracture, right rib"
    },
    "checklist": {
        "historySurvey": true, "hospitalCertified": true,
        "physical_heightWeight": true, "physical_waist": true, "physical_systemic": true,
        "physical_bp": true, "physical_vision": true, "physical_color": true,
        "physical_hearing": true, "xray_chest": true, "urine_protein": true,
        "urine_blood": true, "blood_hb": true, "blood_wbc": true,
        "blood_sugar": true, "blood_alt": true, "blood_creatinine": true,
        "blood_cholesterol": true, "blood_tg": true, "blood_hdl": true
    }
}"#;

#[test]
fn full_exam_report() {
    init_logger();
    let input = parse_input(EXAM).unwrap();
    let report = evaluate_exam(&input);

    assert_eq!(report.assessment.results.len(), 16);
    assert_eq!(report.assessment.overall_level, RiskLevel::High);
    let decisive: Vec<&str> = report
        .assessment
        .decisive()
        .map(|r| r.metric.name())
        .collect();
    assert_eq!(decisive, vec!["Fasting Glucose"]);
    assert_eq!(report.assessment.follow_up_months(), Some(6));

    let xray = report.assessment.results.last().unwrap();
    assert_eq!(xray.level, RiskLevel::Elevated);
    assert_eq!(xray.value.to_string(), "other: old fracture, right rib");

    assert!(report.compliance.is_compliant(), "{:?}", report.compliance);
}

#[test]
fn checklist_keys_match_catalog() {
    let input = parse_input(EXAM).unwrap();
    for item in catalog() {
        assert!(input.checklist.is_present(item.key), "{}", item.key);
    }
    assert_eq!(input.checklist.unknown_keys().count(), 0);
}

#[test]
fn one_missing_blood_test() {
    init_logger();
    let result = validate(&ChecklistRecord::complete().with("blood_wbc", false));
    assert_eq!(result.missing.len(), 1);
    assert_eq!(result.missing[0].category_name(), "Blood Tests");
    assert_eq!(result.missing[0].label, "White Blood Cell Count (WBC)");
}

#[test]
fn pipelines_are_independent() {
    init_logger();
    let mut input = parse_input(EXAM).unwrap();
    let before = evaluate_exam(&input);

    input.checklist = ChecklistRecord::new();
    let after = evaluate_exam(&input);
    assert_eq!(before.assessment, after.assessment);
    assert_eq!(after.compliance.missing.len(), 20);

    let mut no_measurements = ExamInput::new(Sex::Male);
    no_measurements.checklist = parse_input(EXAM).unwrap().checklist;
    let report = evaluate_exam(&no_measurements);
    assert_eq!(report.compliance, before.compliance);
    assert!(report.assessment.results.is_empty());
}

#[test]
fn repeated_evaluation_is_identical() {
    init_logger();
    let input = parse_input(EXAM).unwrap();
    let first = evaluate_exam(&input);
    let second = evaluate_exam(&input);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn json_report_shape() {
    let report = evaluate_exam(&parse_input(EXAM).unwrap());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["assessment"]["overall_level"], 3);
    assert_eq!(json["assessment"]["results"][0]["metric"], "bmi");
    assert_eq!(json["assessment"]["results"][0]["value"], "25.4");
    assert_eq!(json["assessment"]["results"][2]["value"], "136/88");
    assert_eq!(json["compliance_summary"]["passed"], 20);
    assert_eq!(json["subject"]["name"], "Wang");
}
