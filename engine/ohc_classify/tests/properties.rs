use ohc_classify::{assess, classify, overall_level};
use ohc_types::{MeasurementRecord, RiskLevel, Sex};
use proptest::prelude::*;

const NUMERIC_KEYS: [&str; 15] = [
    "height",
    "weight",
    "waist",
    "sbp",
    "dbp",
    "sugar_ac",
    "cholesterol",
    "ldl",
    "hdl",
    "tg",
    "wbc",
    "hb",
    "alt",
    "creatinine",
    "uric_acid",
];

fn sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

/// A field value: blank, a plausible reading, or junk.
fn raw_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None::<String>),
        1 => Just(Some(String::new())),
        6 => (0.0f64..20000.0).prop_map(|v| Some(format!("{v:.2}"))),
        1 => "[a-z+/-]{1,4}".prop_map(Some),
    ]
}

fn categorical(tokens: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        1 => Just(None::<String>),
        4 => proptest::sample::select(tokens).prop_map(|t| Some(t.to_string())),
    ]
}

fn record() -> impl Strategy<Value = MeasurementRecord> {
    (
        proptest::collection::vec(raw_value(), NUMERIC_KEYS.len()),
        categorical(&["normal", "1+", "2+", "3+", "4+", "5+"]),
        categorical(&["normal", "1+", "2+", "3+", "4+"]),
        categorical(&[
            "normal",
            "calcified",
            "scoliosis",
            "nodule_large",
            "tb_suspect",
            "other",
            "unknown",
        ]),
        proptest::option::of("[a-z ]{0,12}"),
    )
        .prop_map(|(numbers, protein, blood, xray, note)| {
            let mut record = MeasurementRecord::new();
            for (key, value) in NUMERIC_KEYS.iter().zip(numbers) {
                if let Some(value) = value {
                    record.set(key, value);
                }
            }
            record.urine_protein = protein;
            record.urine_blood = blood;
            record.xray_result = xray;
            record.xray_other = note;
            record
        })
}

proptest! {
    #[test]
    fn overall_level_is_max_of_results(record in record(), sex in sex()) {
        let a = assess(&record, sex);
        let expected = a.results.iter().map(|r| r.level).max().unwrap_or(RiskLevel::Normal);
        prop_assert_eq!(a.overall_level, expected);
        for r in &a.results {
            prop_assert!((1..=4).contains(&r.level.value()));
            prop_assert!(r.level <= a.overall_level);
        }
        prop_assert_eq!(a.overall_advice, a.overall_level.standard_advice());
    }

    #[test]
    fn each_metric_appears_at_most_once(record in record(), sex in sex()) {
        let c = classify(&record, sex);
        let mut seen: Vec<_> = c
            .results
            .iter()
            .map(|r| r.metric)
            .chain(c.rejected.iter().map(|r| r.metric))
            .collect();
        let total = seen.len();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), total);
    }

    #[test]
    fn classification_is_idempotent(record in record(), sex in sex()) {
        prop_assert_eq!(assess(&record, sex), assess(&record, sex));
    }

    #[test]
    fn extra_result_never_lowers_overall(
        record in record(),
        sex in sex(),
        level in 1u8..=4,
    ) {
        let mut results = classify(&record, sex).results;
        let before = overall_level(&results);
        if let Some(mut extra) = results.first().cloned() {
            extra.level = RiskLevel::try_from(level).unwrap();
            results.push(extra);
            let after = overall_level(&results);
            prop_assert!(after >= before);
            prop_assert_eq!(after, before.max(RiskLevel::try_from(level).unwrap()));
        }
    }

    #[test]
    fn wbc_in_band_is_normal(v in 4800u32..=10800) {
        let record = MeasurementRecord::new().with("wbc", v.to_string());
        let a = assess(&record, Sex::Male);
        prop_assert_eq!(a.results.len(), 1);
        prop_assert_eq!(a.results[0].level, RiskLevel::Normal);
    }
}

#[test]
fn empty_record_grades_normal() {
    let a = assess(&MeasurementRecord::new(), Sex::Male);
    assert!(a.results.is_empty());
    assert_eq!(a.overall_level, RiskLevel::Normal);
}

#[test]
fn concurrent_calls_agree() {
    let record = MeasurementRecord::new()
        .with("sbp", "150")
        .with("dbp", "85")
        .with("wbc", "12000")
        .with("urine_protein", "2+");
    let expected = assess(&record, Sex::Female);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| assess(&record, Sex::Female))).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
