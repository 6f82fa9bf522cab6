use serde::Serialize;

use crate::catalog::{Category, CATALOG};
use crate::checklist::ChecklistRecord;

pub const REMEDY: &str = "request correction or supplementary report";

/// A mandatory item the report does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingItem {
    pub category: Category,
    pub key: &'static str,
    pub label: &'static str,
    pub remedy: &'static str,
}

impl MissingItem {
    pub fn category_name(&self) -> &'static str {
        self.category.name()
    }
}

/// Missing items in catalog order; empty means the report is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceResult {
    pub missing: Vec<MissingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    pub total: usize,
    pub passed: usize,
    pub missing: usize,
}

impl ComplianceResult {
    pub fn is_compliant(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn summary(&self) -> ComplianceSummary {
        let total = CATALOG.len();
        let missing = self.missing.len();
        ComplianceSummary {
            total,
            passed: total - missing,
            missing,
        }
    }

    /// Missing items grouped by category, categories in catalog order.
    pub fn by_category(&self) -> Vec<(Category, Vec<&MissingItem>)> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let items: Vec<&MissingItem> = self
                    .missing
                    .iter()
                    .filter(|m| m.category == category)
                    .collect();
                (!items.is_empty()).then_some((category, items))
            })
            .collect()
    }
}

/// Walk the catalog and collect every item not marked present.
pub fn validate(record: &ChecklistRecord) -> ComplianceResult {
    for key in record.unknown_keys() {
        log::debug!("checklist key '{key}' is not a catalog item, ignoring");
    }
    let missing: Vec<MissingItem> = CATALOG
        .iter()
        .filter(|item| !record.is_present(item.key))
        .map(|item| MissingItem {
            category: item.category,
            key: item.key,
            label: item.label,
            remedy: REMEDY,
        })
        .collect();
    log::debug!(
        "checklist: {} of {} items missing",
        missing.len(),
        CATALOG.len()
    );
    ComplianceResult { missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn complete_record_is_compliant() {
        let result = validate(&ChecklistRecord::complete());
        assert!(result.is_compliant());
        assert_eq!(
            result.summary(),
            ComplianceSummary {
                total: 20,
                passed: 20,
                missing: 0
            }
        );
    }

    #[test]
    fn single_missing_blood_test() {
        let record = ChecklistRecord::complete().with("blood_wbc", false);
        let result = validate(&record);
        assert_eq!(result.missing.len(), 1);
        let item = &result.missing[0];
        assert_eq!(item.category_name(), "Blood Tests");
        assert_eq!(item.label, "White Blood Cell Count (WBC)");
        assert_eq!(item.remedy, REMEDY);
    }

    #[test]
    fn empty_record_misses_everything_in_order() {
        let result = validate(&ChecklistRecord::new());
        let keys: Vec<&str> = result.missing.iter().map(|m| m.key).collect();
        let expected: Vec<&str> = CATALOG.iter().map(|i| i.key).collect();
        assert_eq!(keys, expected);
        assert_eq!(result.summary().passed, 0);
    }

    #[test]
    fn grouping_keeps_catalog_order() {
        let record = ChecklistRecord::complete()
            .with("blood_tg", false)
            .with("historySurvey", false)
            .with("blood_hb", false);
        let result = validate(&record);
        let groups = result.by_category();
        let shape: Vec<(Category, Vec<&str>)> = groups
            .iter()
            .map(|(c, items)| (*c, items.iter().map(|m| m.key).collect()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (Category::Administrative, vec!["historySurvey"]),
                (Category::BloodTests, vec!["blood_hb", "blood_tg"]),
            ]
        );
    }

    #[test]
    fn missing_item_json_uses_report_headings() {
        let result = validate(&ChecklistRecord::complete().with("blood_wbc", false));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json["missing"][0],
            serde_json::json!({
                "category": "Blood Tests",
                "key": "blood_wbc",
                "label": "White Blood Cell Count (WBC)",
                "remedy": REMEDY,
            })
        );
    }

    #[test]
    fn unknown_keys_do_not_count() {
        let record = ChecklistRecord::complete().with("extra_item", false);
        assert!(validate(&record).is_compliant());
    }
}
