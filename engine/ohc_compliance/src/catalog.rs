use std::fmt;

use serde::{Serialize, Serializer};

/// Section of the mandatory exam item list.
///
/// Serialized as its display name, the heading used on the exam report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Administrative,
    PhysicalExam,
    InstrumentalAndUrine,
    BloodTests,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Administrative,
        Category::PhysicalExam,
        Category::InstrumentalAndUrine,
        Category::BloodTests,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Administrative => "Administrative & Questionnaire",
            Category::PhysicalExam => "General Physical Exam",
            Category::InstrumentalAndUrine => "Instrumental & Urine Tests",
            Category::BloodTests => "Blood Tests",
        }
    }

    pub fn items(self) -> impl Iterator<Item = &'static CatalogItem> {
        CATALOG.iter().filter(move |item| item.category == self)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub category: Category,
    pub key: &'static str,
    pub label: &'static str,
    /// Where the examiner can verify the item, when such a page exists.
    pub reference_url: Option<&'static str>,
}

const fn item(category: Category, key: &'static str, label: &'static str) -> CatalogItem {
    CatalogItem {
        category,
        key,
        label,
        reference_url: None,
    }
}

use Category::{Administrative, BloodTests, InstrumentalAndUrine, PhysicalExam};

/// Items a pre-employment exam report must contain, in report order.
pub static CATALOG: [CatalogItem; 20] = [
    CatalogItem {
        category: Administrative,
        key: "hospitalCertified",
        label: "Report issued by a certified medical institution",
        reference_url: Some("https://hrpts.osha.gov.tw/Home/CertifiedHospInfoSearch"),
    },
    item(
        Administrative,
        "historySurvey",
        "Work history / medical history / lifestyle questionnaire",
    ),
    item(PhysicalExam, "physical_heightWeight", "Height & Weight"),
    item(PhysicalExam, "physical_waist", "Waist Circumference"),
    item(PhysicalExam, "physical_vision", "Visual Acuity"),
    item(PhysicalExam, "physical_color", "Color Vision"),
    item(PhysicalExam, "physical_hearing", "Hearing"),
    item(PhysicalExam, "physical_bp", "Blood Pressure"),
    item(
        PhysicalExam,
        "physical_systemic",
        "Systemic Physical Examination (physician interview)",
    ),
    item(InstrumentalAndUrine, "xray_chest", "Chest X-ray (full size)"),
    item(InstrumentalAndUrine, "urine_protein", "Urine Protein"),
    item(InstrumentalAndUrine, "urine_blood", "Urine Occult Blood"),
    item(BloodTests, "blood_hb", "Hemoglobin (Hb)"),
    item(BloodTests, "blood_wbc", "White Blood Cell Count (WBC)"),
    item(BloodTests, "blood_sugar", "Fasting Blood Glucose (AC Sugar)"),
    item(BloodTests, "blood_alt", "Liver Function (ALT/GPT)"),
    item(BloodTests, "blood_creatinine", "Creatinine"),
    item(BloodTests, "blood_cholesterol", "Total Cholesterol"),
    item(BloodTests, "blood_hdl", "HDL Cholesterol"),
    item(BloodTests, "blood_tg", "Triglycerides (TG)"),
];

pub fn catalog() -> &'static [CatalogItem] {
    &CATALOG
}

/// Look up a catalog entry by its checklist key.
pub fn find(key: &str) -> Option<&'static CatalogItem> {
    CATALOG.iter().find(|item| item.key == key)
}
